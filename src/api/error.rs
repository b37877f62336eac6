// ==========================================
// 退货分拣人力规划 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换导入/配置错误为用户可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("时段序号越界: index={index}, 时段数={hours}")]
    HourOutOfRange { index: usize, hours: usize },

    // ==========================================
    // 导入 / 配置错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportFailed(#[from] ImportError),

    #[error("配置加载失败: {0}")]
    ConfigFailed(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
