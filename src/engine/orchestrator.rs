// ==========================================
// 退货分拣人力规划 - 引擎编排器
// ==========================================
// 用途: 按固定顺序执行全部引擎,产出完整规划报告
// 流程: 曲线校验 → 小时需求 → 峰值 → 缺口 → 压力测试 → 积压仿真 → 进度
// 说明: 每次输入变化都做一次完整、同步、幂等的重算,不做增量缓存
// ==========================================

use crate::domain::planning::{HourlyPlan, PlanningConfig, PlanningState};
use crate::domain::queue::QueueSimulation;
use crate::engine::gap_evaluator::{GapEvaluation, GapEvaluator};
use crate::engine::hourly_requirement::HourlyRequirementCalculator;
use crate::engine::peak_detector::PeakDetector;
use crate::engine::profile_normalizer::{NormalizedProfile, ProfileNormalizer};
use crate::engine::progress_tracker::{ProgressReport, ProgressTracker};
use crate::engine::queue_simulator::QueueSimulator;
use crate::engine::route_ranking::RouteRanking;
use crate::engine::stress_tester::{StressEstimate, StressTester};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ==========================================
// DailySummary - 日汇总指标
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub total_parcels: f64,
    pub total_bags: u64,            // ceil(total / parcels_per_bag)
    pub avg_bags_per_hour: f64,     // total_bags / window_hours
    pub vinted_share: f64,
    pub white_share: f64,
}

impl DailySummary {
    pub fn build(config: &PlanningConfig) -> Self {
        let total_bags = (config.total_parcels / config.parcels_per_bag.max(1.0))
            .ceil()
            .max(0.0) as u64;
        Self {
            total_parcels: config.total_parcels,
            total_bags,
            avg_bags_per_hour: total_bags as f64 / config.window_hours.max(1.0),
            vinted_share: config.vinted_share(),
            white_share: config.white_share(),
        }
    }
}

// ==========================================
// PlanningReport - 规划报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningReport {
    pub summary: DailySummary,
    pub profile: NormalizedProfile,
    pub hourly: Vec<HourlyPlan>,
    pub peak: HourlyPlan,
    pub gap: GapEvaluation,
    pub stress: Option<StressEstimate>,   // 无线路时缺省
    pub queue: QueueSimulation,
    pub progress: ProgressReport,
    pub routes: RouteRanking,
}

// ==========================================
// PlanningOrchestrator - 引擎编排器
// ==========================================
pub struct PlanningOrchestrator {
    normalizer: ProfileNormalizer,
    calculator: HourlyRequirementCalculator,
    peak_detector: PeakDetector,
    gap_evaluator: GapEvaluator,
    stress_tester: StressTester,
    queue_simulator: QueueSimulator,
    progress_tracker: ProgressTracker,
}

impl PlanningOrchestrator {
    pub fn new() -> Self {
        Self {
            normalizer: ProfileNormalizer::new(),
            calculator: HourlyRequirementCalculator::new(),
            peak_detector: PeakDetector::new(),
            gap_evaluator: GapEvaluator::new(),
            stress_tester: StressTester::new(),
            queue_simulator: QueueSimulator::new(),
            progress_tracker: ProgressTracker::new(),
        }
    }

    /// 执行完整规划计算
    ///
    /// # 参数
    /// - state: 本次计算快照（只读）
    ///
    /// # 返回
    /// 规划报告；本函数对已校验输入是全函数,不会失败
    #[instrument(skip_all, fields(
        hours = state.profile.len(),
        routes = state.routes.len(),
        total_parcels = state.config.total_parcels
    ))]
    pub fn compute(&self, state: &PlanningState) -> PlanningReport {
        // 边界外直接构造的参数同样施加下限
        let config = state.config.clone().sanitized();

        // ==========================================
        // 步骤1: 到货曲线校验
        // ==========================================
        debug!("步骤1: 到货曲线校验");
        let profile = self.normalizer.normalize(&state.profile);

        // ==========================================
        // 步骤2: 小时需求计算
        // ==========================================
        debug!("步骤2: 小时需求计算");
        let hourly = self.calculator.calculate(&config, &profile.slots);

        // ==========================================
        // 步骤3: 峰值时段识别
        // ==========================================
        debug!("步骤3: 峰值时段识别");
        let peak = self.peak_detector.detect(&hourly);

        // ==========================================
        // 步骤4: 人数缺口校验
        // ==========================================
        debug!("步骤4: 人数缺口校验");
        let gap = self.gap_evaluator.evaluate(&peak, &config.plan);

        // ==========================================
        // 步骤5: 压力测试（仅参考）
        // ==========================================
        debug!("步骤5: 压力测试");
        let stress = self.stress_tester.estimate(&config, &state.routes);

        // ==========================================
        // 步骤6: 积压仿真
        // ==========================================
        debug!("步骤6: 积压仿真");
        let queue = self.queue_simulator.simulate(&config, &hourly);

        // ==========================================
        // 步骤7: 进度跟踪
        // ==========================================
        debug!("步骤7: 进度跟踪");
        let progress = self.progress_tracker.track(&hourly, &state.actuals);

        info!(
            peak_hour = %peak.hour,
            peak_heads = peak.total_heads,
            overall = %gap.overall,
            end_bag_backlog = queue.end_state.bag_backlog,
            "规划计算完成"
        );

        PlanningReport {
            summary: DailySummary::build(&config),
            profile,
            hourly,
            peak,
            gap,
            stress,
            queue,
            progress,
            routes: RouteRanking::build(&state.routes),
        }
    }
}

impl Default for PlanningOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
