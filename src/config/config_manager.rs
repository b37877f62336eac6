// ==========================================
// 退货分拣人力规划 - 配置管理器
// ==========================================
// 职责: 场景配置加载、默认路径解析、配置快照导出
// 存储: JSON 文件（规划参数 + 日内曲线 + 实际覆写）
// ==========================================

use crate::config::coercion::RawPlanningInput;
use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::planning::PlanningState;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// 配置路径环境变量
pub const CONFIG_PATH_ENV: &str = "RETURNS_PLANNER_CONFIG";

/// 默认配置目录名
pub const CONFIG_DIR_NAME: &str = "returns-planner";

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "planner.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    raw: RawPlanningInput,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用默认参数创建（不读取文件）
    pub fn with_defaults() -> Self {
        Self {
            raw: RawPlanningInput::default(),
            source: None,
        }
    }

    /// 从 JSON 字符串创建
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let raw: RawPlanningInput = serde_json::from_str(json)?;
        Ok(Self { raw, source: None })
    }

    /// 从 JSON 文件创建
    ///
    /// # 返回
    /// - Ok: 配置已解析（字段级格式问题在此不报错,统一在 to_state 中夹取）
    /// - Err: 文件不存在、读取失败、整体不是合法 JSON 对象
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let text = std::fs::read_to_string(path)?;
        let raw: RawPlanningInput = serde_json::from_str(&text)?;
        info!("配置文件加载完成");

        Ok(Self {
            raw,
            source: Some(path.to_path_buf()),
        })
    }

    /// 解析默认配置路径
    ///
    /// 优先级: 环境变量 RETURNS_PLANNER_CONFIG > 系统配置目录/returns-planner/planner.json
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoDefaultPath)
    }

    /// 加载默认路径配置；文件不存在时回退到默认参数
    pub fn load_default() -> ConfigResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "默认配置文件不存在,使用默认参数");
            Ok(Self::with_defaults())
        }
    }

    /// 配置来源路径
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 生成计算快照（不含线路,线路由导入层提供）
    pub fn to_state(&self) -> PlanningState {
        PlanningState {
            config: self.raw.to_config(),
            profile: self.raw.to_profile(),
            actuals: self.raw.to_actuals(),
            routes: Vec::new(),
        }
    }

    /// 导出配置快照（JSON）
    ///
    /// 快照取已校验值,重新加载后得到相同状态
    pub fn snapshot_json(state: &PlanningState) -> ConfigResult<String> {
        let raw = RawPlanningInput::from_parts(&state.config, &state.profile, &state.actuals);
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}
