// ==========================================
// 退货分拣人力规划 - 进度跟踪
// ==========================================
// 职责: 实际袋数（可覆写）vs 计划袋数,计算达成率与累计偏差
// 规则:
//   actual_i   = 覆写值,缺省取计划 bags_i
//   attainment = clamp(actual / planned × 100, 0, 180),planned = 0 时为 0
//   display    = clamp(attainment, 0, 100)
//   cum_gap    = 累计实际 - 累计计划（可为负,表示落后）
// ==========================================

use crate::domain::planning::{signed_gap, ActualOverlay, HourlyPlan};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 达成率上限（%）
pub const MAX_ATTAINMENT_PCT: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRow {
    pub index: usize,
    pub hour: String,
    pub planned_bags: u64,
    pub actual_bags: u64,
    pub overridden: bool,          // 实际值是否来自人工覆写
    pub cumulative_planned: u64,
    pub cumulative_actual: u64,
    pub cumulative_gap: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub planned_total: u64,
    pub actual_total: u64,
    pub attainment_pct: f64,       // [0,180]
    pub display_pct: f64,          // [0,100]
    pub rows: Vec<ProgressRow>,
}

pub struct ProgressTracker {
    // 无状态引擎
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {}
    }

    #[instrument(skip_all, fields(hours = hourly.len(), overrides = actuals.len()))]
    pub fn track(&self, hourly: &[HourlyPlan], actuals: &ActualOverlay) -> ProgressReport {
        let mut rows = Vec::with_capacity(hourly.len());
        let mut cumulative_planned: u64 = 0;
        let mut cumulative_actual: u64 = 0;

        for hour in hourly {
            let override_value = actuals.get(hour.index);
            let actual_bags = override_value.unwrap_or(hour.bags);
            cumulative_planned = cumulative_planned.saturating_add(hour.bags);
            cumulative_actual = cumulative_actual.saturating_add(actual_bags);

            rows.push(ProgressRow {
                index: hour.index,
                hour: hour.hour.clone(),
                planned_bags: hour.bags,
                actual_bags,
                overridden: override_value.is_some(),
                cumulative_planned,
                cumulative_actual,
                cumulative_gap: signed_gap(cumulative_actual, cumulative_planned),
            });
        }

        let attainment_pct = Self::attainment(cumulative_actual, cumulative_planned);
        debug!(attainment_pct = attainment_pct, "进度计算完成");

        ProgressReport {
            planned_total: cumulative_planned,
            actual_total: cumulative_actual,
            attainment_pct,
            display_pct: attainment_pct.clamp(0.0, 100.0),
            rows,
        }
    }

    /// 达成率（%）
    pub fn attainment(actual_total: u64, planned_total: u64) -> f64 {
        if planned_total == 0 {
            return 0.0;
        }
        (actual_total as f64 / planned_total as f64 * 100.0).clamp(0.0, MAX_ATTAINMENT_PCT)
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
