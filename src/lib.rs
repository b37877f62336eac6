// ==========================================
// 退货分拣人力规划 - 核心库
// ==========================================
// 系统定位: 班次规划辅助工具 (人工最终控制权)
// 输入: 场景参数 + 日内曲线 + 线路退件文件
// 输出: 逐小时需求 / 峰值检查 / 压力测试 / 队列模拟 / 进度跟踪
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算管线
pub mod engine;

// 导入层 - 线路文件
pub mod importer;

// 配置层 - 场景配置与输入解析
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 规划会话
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CheckStatus, ProfileStatus, Stream};

// 领域实体
pub use domain::{
    ActualOverlay, DayProfile, HourlyPlan, PlannedHeadcount, PlanningConfig, PlanningState,
    QueueSimulation, RouteRecord,
};

// 引擎
pub use engine::{
    GapEvaluator, HourlyRequirementCalculator, PeakDetector, PlanningOrchestrator,
    PlanningReport, ProfileNormalizer, ProgressTracker, QueueSimulator, StressTester,
};

// 配置
pub use config::{ConfigManager, RawPlanningInput};

// 导入
pub use importer::{RouteImporter, RouteImporterImpl};

// API
pub use api::{ApiError, ApiResult, PlannerApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "退货分拣人力规划";
