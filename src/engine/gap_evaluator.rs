// ==========================================
// 退货分拣人力规划 - 人数缺口校验
// ==========================================
// 职责: 计划人数 vs 峰值时段需求人数
// 规则:
//   单作业流: gap = planned - required, PASS ⇔ planned >= required
//   汇总:     机动人数只计入计划总数,不计入任何单一作业流
// ==========================================

use crate::domain::planning::{signed_gap, HourlyPlan, PlannedHeadcount};
use crate::domain::types::{CheckStatus, Stream};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ==========================================
// StreamGap - 单作业流缺口
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamGap {
    pub stream: Stream,
    pub required: u64,
    pub planned: u64,
    pub gap: i64,             // 正数为富余,负数为缺口
    pub status: CheckStatus,
}

impl StreamGap {
    fn new(stream: Stream, required: u64, planned: u64) -> Self {
        Self {
            stream,
            required,
            planned,
            gap: signed_gap(planned, required),
            status: CheckStatus::from_comparison(planned, required),
        }
    }
}

// ==========================================
// GapEvaluation - 校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapEvaluation {
    pub streams: Vec<StreamGap>,    // 顺序: STAGE, SEG, INTAKE
    pub total_required: u64,
    pub total_planned: u64,         // 含机动人数
    pub overall: CheckStatus,
}

impl GapEvaluation {
    /// 按作业流取结果
    pub fn stream(&self, stream: Stream) -> Option<&StreamGap> {
        self.streams.iter().find(|s| s.stream == stream)
    }
}

pub struct GapEvaluator {
    // 无状态引擎
}

impl GapEvaluator {
    pub fn new() -> Self {
        Self {}
    }

    #[instrument(skip_all, fields(peak_hour = %peak.hour))]
    pub fn evaluate(&self, peak: &HourlyPlan, plan: &PlannedHeadcount) -> GapEvaluation {
        let streams = vec![
            StreamGap::new(Stream::Stage, peak.stage_heads, plan.stage),
            StreamGap::new(Stream::Seg, peak.seg_heads, plan.seg),
            StreamGap::new(Stream::Intake, peak.intake_heads, plan.intake),
        ];

        let total_required = peak
            .stage_heads
            .saturating_add(peak.seg_heads)
            .saturating_add(peak.intake_heads);
        let total_planned = plan.total();
        let overall = CheckStatus::from_comparison(total_planned, total_required);

        info!(
            total_required = total_required,
            total_planned = total_planned,
            overall = %overall,
            "人数缺口校验完成"
        );

        GapEvaluation {
            streams,
            total_required,
            total_planned,
            overall,
        }
    }
}

impl Default for GapEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
