// ==========================================
// 退货分拣人力规划 - API层
// ==========================================
// 职责: 规划会话接口（编辑 / 导入 / 重置 / 计算）
// ==========================================

pub mod error;
pub mod planner_api;

pub use error::{ApiError, ApiResult};
pub use planner_api::{ImportOutcome, PlannerApi};
