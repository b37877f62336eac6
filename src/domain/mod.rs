// ==========================================
// 退货分拣人力规划 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、派生结果结构
// 红线: 不含文件读取逻辑,不含引擎逻辑
// ==========================================

pub mod planning;
pub mod profile;
pub mod queue;
pub mod route;
pub mod types;

// 重导出核心类型
pub use planning::{ActualOverlay, HourlyPlan, PlannedHeadcount, PlanningConfig, PlanningState};
pub use profile::{DayProfile, HourSlot};
pub use queue::{QueueHourRow, QueueSimulation, QueueState};
pub use route::{RouteImportBatch, RouteImportResult, RouteRecord};
pub use types::{CheckStatus, ProfileStatus, Stream};
