// ==========================================
// 退货分拣人力规划 - 规划会话 API
// ==========================================
// 职责: 持有会话输入,在边界处应用编辑并触发完整重算
// 并发: 单写者（RwLock）；计算时复制快照,锁外执行纯函数管线
// 红线: 导入失败清空线路列表,规划继续使用手工总量
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::coercion::{coerce_number, RawPlanningInput};
use crate::config::ConfigManager;
use crate::domain::planning::PlanningState;
use crate::domain::route::{total_parcels, RouteImportBatch, RouteRecord};
use crate::engine::profile_normalizer::{clamp_arrival_pct, clamp_utilization};
use crate::engine::{PlanningOrchestrator, PlanningReport};
use crate::importer::{RouteImporter, RouteImporterImpl, VolumeSplit};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, instrument, warn};

// ==========================================
// ImportOutcome - 导入结果 + 重算报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub batch: RouteImportBatch,
    pub report: PlanningReport,
}

/// 会话内部状态
struct PlannerSession {
    state: PlanningState,
    baseline: PlanningState,                 // 重置目标
    last_import: Option<RouteImportBatch>,
}

// ==========================================
// PlannerApi - 规划会话 API
// ==========================================
pub struct PlannerApi {
    session: RwLock<PlannerSession>,
    importer: Arc<dyn RouteImporter>,
    orchestrator: PlanningOrchestrator,
}

impl PlannerApi {
    /// 以初始快照创建会话（使用默认线路导入器）
    pub fn new(initial: PlanningState) -> Self {
        Self::with_importer(initial, Arc::new(RouteImporterImpl::default()))
    }

    /// 以配置文件内容创建会话
    pub fn from_config(config: &ConfigManager) -> Self {
        Self::new(config.to_state())
    }

    /// 加载场景配置并创建会话
    ///
    /// # 参数
    /// - path: 指定配置文件；None 时按默认路径加载（不存在则使用默认参数）
    pub fn load(path: Option<&Path>) -> ApiResult<Self> {
        let config = match path {
            Some(path) => ConfigManager::from_file(path)?,
            None => ConfigManager::load_default()?,
        };
        if let Some(source) = config.source() {
            info!(path = %source.display(), "场景配置已加载");
        }
        Ok(Self::from_config(&config))
    }

    /// 指定线路导入器创建会话
    pub fn with_importer(initial: PlanningState, importer: Arc<dyn RouteImporter>) -> Self {
        Self {
            session: RwLock::new(PlannerSession {
                state: initial.clone(),
                baseline: initial,
                last_import: None,
            }),
            importer,
            orchestrator: PlanningOrchestrator::new(),
        }
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, PlannerSession>> {
        self.session
            .read()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, PlannerSession>> {
        self.session
            .write()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }

    fn check_hour(state: &PlanningState, index: usize) -> ApiResult<()> {
        let hours = state.profile.len();
        if index < hours {
            Ok(())
        } else {
            Err(ApiError::HourOutOfRange { index, hours })
        }
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 当前输入快照
    pub fn snapshot(&self) -> ApiResult<PlanningState> {
        Ok(self.read()?.state.clone())
    }

    /// 最近一次成功导入的批次
    pub fn last_import(&self) -> ApiResult<Option<RouteImportBatch>> {
        Ok(self.read()?.last_import.clone())
    }

    /// 基于当前快照完整重算
    pub fn compute(&self) -> ApiResult<PlanningReport> {
        let snapshot = self.snapshot()?;
        Ok(self.orchestrator.compute(&snapshot))
    }

    // ==========================================
    // 编辑（每次编辑后完整重算）
    // ==========================================

    /// 以原始输入更新规划参数（解析夹取后替换,不影响曲线与覆写）
    #[instrument(skip_all)]
    pub fn apply_raw_config(&self, raw: &RawPlanningInput) -> ApiResult<PlanningReport> {
        self.write()?.state.config = raw.to_config();
        self.compute()
    }

    /// 修改单时段到货占比（夹取到 [0,1]）
    #[instrument(skip(self, value))]
    pub fn set_arrival_pct(&self, index: usize, value: &Value) -> ApiResult<PlanningReport> {
        {
            let mut session = self.write()?;
            Self::check_hour(&session.state, index)?;
            let pct = clamp_arrival_pct(coerce_number(value));
            let profile = &mut session.state.profile;
            let hours = profile.len();
            profile.arrival_pct.resize(hours, 0.0);
            profile.arrival_pct[index] = pct;
        }
        self.compute()
    }

    /// 修改单时段利用率（夹取到 [0.05,1]；null 恢复为默认利用率）
    #[instrument(skip(self, value))]
    pub fn set_utilization(&self, index: usize, value: &Value) -> ApiResult<PlanningReport> {
        {
            let mut session = self.write()?;
            Self::check_hour(&session.state, index)?;
            let util = if value.is_null() {
                None
            } else {
                Some(clamp_utilization(coerce_number(value)))
            };
            let profile = &mut session.state.profile;
            let hours = profile.len();
            profile.utilization.resize(hours, None);
            profile.utilization[index] = util;
        }
        self.compute()
    }

    /// 写入单时段实际袋数（null 清除覆写）
    #[instrument(skip(self, value))]
    pub fn set_actual_bags(&self, index: usize, value: &Value) -> ApiResult<PlanningReport> {
        {
            let mut session = self.write()?;
            Self::check_hour(&session.state, index)?;
            let bags = if value.is_null() {
                None
            } else {
                Some(coerce_number(value))
            };
            session.state.actuals.set(index, bags);
        }
        self.compute()
    }

    /// 直接设置线路列表（不调整总量）
    pub fn set_routes(&self, routes: Vec<RouteRecord>) -> ApiResult<PlanningReport> {
        self.write()?.state.routes = routes;
        self.compute()
    }

    /// 恢复初始快照（清空覆写与线路）
    #[instrument(skip_all)]
    pub fn reset(&self) -> ApiResult<PlanningReport> {
        {
            let mut session = self.write()?;
            let baseline = session.baseline.clone();
            session.state = baseline;
            session.state.actuals.clear();
            session.state.routes.clear();
            session.last_import = None;
        }
        info!("会话已重置");
        self.compute()
    }

    // ==========================================
    // 导入
    // ==========================================

    /// 导入线路文件
    ///
    /// # 成功
    /// - 替换线路列表
    /// - 总件数取线路合计,白件沿用当前值（超过总量时截断）,Vinted 取剩余
    ///
    /// # 失败
    /// - 线路列表清空,总量保持手工输入,错误返回调用方
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub async fn import_routes<P: AsRef<Path>>(&self, file_path: P) -> ApiResult<ImportOutcome> {
        let result = self.importer.import_file(file_path.as_ref()).await;

        match result {
            Ok(imported) => {
                {
                    let mut session = self.write()?;
                    let total = total_parcels(&imported.routes);
                    let split = VolumeSplit::derive(total, session.state.config.white_parcels);
                    session.state.config.total_parcels = split.total_parcels;
                    session.state.config.white_parcels = split.white_parcels;
                    session.state.config.vinted_parcels = split.vinted_parcels;
                    session.state.routes = imported.routes;
                    session.last_import = Some(imported.batch.clone());
                }
                info!(batch_id = %imported.batch.batch_id, "线路导入已应用");

                Ok(ImportOutcome {
                    batch: imported.batch,
                    report: self.compute()?,
                })
            }
            Err(e) => {
                warn!(error = %e, "线路导入失败,清空线路并使用手工总量");
                {
                    let mut session = self.write()?;
                    session.state.routes.clear();
                    session.last_import = None;
                }
                Err(ApiError::ImportFailed(e))
            }
        }
    }
}
