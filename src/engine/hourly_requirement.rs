// ==========================================
// 退货分拣人力规划 - 小时需求计算引擎
// ==========================================
// 职责: 日总量 + 到货曲线 → 每时段件数/袋数/三作业流需求人数
// 公式:
//   parcels_i = round(total × pct_i)
//   bags_i    = ceil(parcels_i / parcels_per_bag)
//   heads     = ceil((bags_i × sec / 3600) / u_i)
//   白件收货按本时段袋量估算: bags_i × parcels_per_bag × white_share
// 红线: 纯函数,输入已夹取,无错误分支
// ==========================================

use crate::domain::planning::{HourlyPlan, PlanningConfig};
use crate::domain::profile::HourSlot;
use crate::engine::profile_normalizer::clamp_utilization;
use tracing::{debug, instrument};

/// 每小时秒数
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// 需求人数 = ceil(工时 / 利用率)
///
/// 利用率在此处再次夹取到 [0.05,1],保证除数为正
pub fn required_heads(units: f64, service_sec: f64, utilization: f64) -> u64 {
    let labor_hours = (units * service_sec) / SECONDS_PER_HOUR;
    let u = clamp_utilization(utilization);
    let heads = (labor_hours / u).ceil();
    if heads.is_finite() && heads > 0.0 {
        heads as u64
    } else {
        0
    }
}

// ==========================================
// HourlyRequirementCalculator
// ==========================================
pub struct HourlyRequirementCalculator {
    // 无状态引擎
}

impl HourlyRequirementCalculator {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算全部时段的需求表（按时段顺序）
    #[instrument(skip_all, fields(hours = slots.len(), total_parcels = config.total_parcels))]
    pub fn calculate(&self, config: &PlanningConfig, slots: &[HourSlot]) -> Vec<HourlyPlan> {
        let w_share = config.white_share();
        let plans: Vec<HourlyPlan> = slots
            .iter()
            .map(|slot| self.calculate_slot(config, slot, w_share))
            .collect();

        debug!(
            total_bags = plans.iter().fold(0u64, |acc, p| acc.saturating_add(p.bags)),
            "小时需求计算完成"
        );
        plans
    }

    /// 单时段需求
    fn calculate_slot(&self, config: &PlanningConfig, slot: &HourSlot, w_share: f64) -> HourlyPlan {
        let ppb = config.parcels_per_bag.max(1.0);
        let parcels = (config.total_parcels * slot.arrival_pct).round().max(0.0) as u64;
        let bags = (parcels as f64 / ppb).ceil() as u64;

        let u = clamp_utilization(slot.utilization.unwrap_or(config.default_utilization));

        let stage_heads = required_heads(bags as f64, config.stage_sec, u);
        let seg_heads = required_heads(bags as f64, config.seg_sec, u);
        let white_parcels_hr = bags as f64 * ppb * w_share;
        let intake_heads = required_heads(white_parcels_hr, config.intake_sec, u);

        HourlyPlan {
            index: slot.index,
            hour: slot.label.format("%H:%M").to_string(),
            arrival_pct: slot.arrival_pct,
            utilization: u,
            parcels,
            bags,
            stage_heads,
            seg_heads,
            intake_heads,
            total_heads: stage_heads.saturating_add(seg_heads).saturating_add(intake_heads),
        }
    }
}

impl Default for HourlyRequirementCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::DayProfile;
    use crate::engine::profile_normalizer::ProfileNormalizer;

    fn slots() -> Vec<HourSlot> {
        ProfileNormalizer::new()
            .normalize(&DayProfile::default())
            .slots
    }

    #[test]
    fn test_required_heads_ceiling() {
        // 8 袋 × 450 秒 = 1 工时
        assert_eq!(required_heads(8.0, 450.0, 1.0), 1);
        // 利用率 0.5 → 2 人
        assert_eq!(required_heads(8.0, 450.0, 0.5), 2);
        // 略超 1 工时 → 2 人
        assert_eq!(required_heads(9.0, 450.0, 1.0), 2);
        assert_eq!(required_heads(0.0, 450.0, 1.0), 0);
    }

    #[test]
    fn test_zero_utilization_clamped() {
        // 0 利用率按 0.05 处理: 1 工时 / 0.05 = 20 人
        assert_eq!(required_heads(8.0, 450.0, 0.0), 20);
    }

    #[test]
    fn test_peak_share_hour_volumes() {
        let config = PlanningConfig {
            total_parcels: 1000.0,
            parcels_per_bag: 25.0,
            ..PlanningConfig::default()
        };
        let plans = HourlyRequirementCalculator::new().calculate(&config, &slots());

        assert_eq!(plans.len(), 8);
        assert_eq!(plans[3].hour, "12:00");
        assert_eq!(plans[3].parcels, 200);
        assert_eq!(plans[3].bags, 8);
    }

    #[test]
    fn test_unset_utilization_uses_default() {
        let config = PlanningConfig {
            total_parcels: 1000.0,
            default_utilization: 0.5,
            ..PlanningConfig::default()
        };
        let mut profile = DayProfile::default();
        profile.utilization[3] = None;
        let slots = ProfileNormalizer::new().normalize(&profile).slots;

        let plans = HourlyRequirementCalculator::new().calculate(&config, &slots);
        assert_eq!(plans[3].utilization, 0.5);
        assert_eq!(plans[2].utilization, 1.0);
    }

    #[test]
    fn test_zero_default_utilization_still_clamped() {
        let config = PlanningConfig {
            total_parcels: 1000.0,
            default_utilization: 0.0,
            ..PlanningConfig::default()
        };
        let mut profile = DayProfile::default();
        profile.utilization = vec![None; 8];
        let slots = ProfileNormalizer::new().normalize(&profile).slots;

        let plans = HourlyRequirementCalculator::new().calculate(&config, &slots);
        assert!(plans.iter().all(|p| p.utilization == 0.05));
    }

    #[test]
    fn test_total_heads_is_stream_sum() {
        let config = PlanningConfig {
            total_parcels: 5000.0,
            white_parcels: 1500.0,
            ..PlanningConfig::default()
        };
        let plans = HourlyRequirementCalculator::new().calculate(&config, &slots());
        for p in &plans {
            assert_eq!(p.total_heads, p.stage_heads + p.seg_heads + p.intake_heads);
        }
    }
}
