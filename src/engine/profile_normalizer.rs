// ==========================================
// 退货分拣人力规划 - 到货曲线校验器
// ==========================================
// 职责: 占比/利用率取有限值并夹取区间,汇总占比并给出提示状态
// 输入: DayProfile（可能含越界或非有限值）
// 输出: NormalizedProfile（HourSlot 序列 + 占比合计 + 状态）
// 红线: 占比合计不为 1 只提示,不修正,不阻断
// ==========================================

use crate::domain::planning::finite_or_zero;
use crate::domain::profile::{DayProfile, HourSlot, MAX_UTILIZATION, MIN_UTILIZATION};
use crate::domain::types::ProfileStatus;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// 占比合计容差
pub const PCT_SUM_TOLERANCE: f64 = 1e-4;

/// 到货占比夹取到 [0,1]
pub fn clamp_arrival_pct(value: f64) -> f64 {
    finite_or_zero(value).clamp(0.0, 1.0)
}

/// 利用率夹取到 [0.05,1]
pub fn clamp_utilization(value: f64) -> f64 {
    finite_or_zero(value).clamp(MIN_UTILIZATION, MAX_UTILIZATION)
}

// ==========================================
// NormalizedProfile - 校验后的曲线
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub slots: Vec<HourSlot>,
    pub pct_sum: f64,
    pub status: ProfileStatus,
}

// ==========================================
// ProfileNormalizer
// ==========================================
pub struct ProfileNormalizer {
    // 无状态引擎
}

impl ProfileNormalizer {
    pub fn new() -> Self {
        Self {}
    }

    /// 校验日内曲线
    ///
    /// 时段序列以 labels 为准：数组不足补 0 / 未设置,超出部分截断
    #[instrument(skip(self, profile), fields(hours = profile.len()))]
    pub fn normalize(&self, profile: &DayProfile) -> NormalizedProfile {
        let slots: Vec<HourSlot> = profile
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| HourSlot {
                index,
                label: *label,
                arrival_pct: clamp_arrival_pct(
                    profile.arrival_pct.get(index).copied().unwrap_or(0.0),
                ),
                utilization: profile
                    .utilization
                    .get(index)
                    .copied()
                    .flatten()
                    .map(clamp_utilization),
            })
            .collect();

        let pct_sum: f64 = slots.iter().map(|s| s.arrival_pct).sum();
        let status = Self::check_sum(pct_sum);

        if status.is_ok() {
            debug!(pct_sum = pct_sum, "到货占比校验通过");
        } else {
            warn!(pct_sum = pct_sum, "到货占比合计不为 100%");
        }

        NormalizedProfile {
            slots,
            pct_sum,
            status,
        }
    }

    /// 占比合计校验（容差 1e-4）
    pub fn check_sum(pct_sum: f64) -> ProfileStatus {
        if (pct_sum - 1.0).abs() <= PCT_SUM_TOLERANCE {
            ProfileStatus::Ok
        } else {
            ProfileStatus::Fix {
                sum_pct: pct_sum * 100.0,
            }
        }
    }
}

impl Default for ProfileNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
