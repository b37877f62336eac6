// ==========================================
// 退货分拣人力规划 - 配置层
// ==========================================
// 职责: 场景配置加载 + 输入解析夹取边界
// 存储: JSON 文件
// ==========================================

pub mod coercion;
pub mod config_manager;
pub mod error;

// 重导出核心配置类型
pub use coercion::{coerce_number, coerce_text, RawPlanningInput};
pub use config_manager::ConfigManager;
pub use error::{ConfigError, ConfigResult};
