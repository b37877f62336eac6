// ==========================================
// 退货分拣人力规划 - 规划参数与小时计划
// ==========================================
// 职责: 规划参数 / 计划人数 / 小时需求表 / 实际量覆写 / 计算快照
// 红线: 引擎只读 PlanningConfig,快照按次构造,不在引擎内修改
// ==========================================

use crate::domain::profile::DayProfile;
use crate::domain::route::RouteRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// PlannedHeadcount - 计划人数
// ==========================================
// float 为机动人员,只计入总量,不计入任何单一作业流
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedHeadcount {
    pub stage: u64,
    pub seg: u64,
    pub intake: u64,
    pub float: u64,
}

impl PlannedHeadcount {
    /// 计划总人数（含机动）
    pub fn total(&self) -> u64 {
        self.stage
            .saturating_add(self.seg)
            .saturating_add(self.intake)
            .saturating_add(self.float)
    }
}

/// 有符号差值 a - b（超出 i64 范围时饱和）
pub fn signed_gap(a: u64, b: u64) -> i64 {
    (a as i128 - b as i128).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

// ==========================================
// PlanningConfig - 规划参数（已校验）
// ==========================================
// 取值范围在边界处由 config::coercion 保证；
// 直接构造时调用 sanitized() 重新施加下限
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningConfig {
    // ===== 日总量 =====
    pub total_parcels: f64,          // 当日总件数 >= 0
    pub vinted_parcels: f64,         // Vinted 件数 >= 0
    pub white_parcels: f64,          // 白件数 >= 0

    // ===== 装袋与窗口 =====
    pub parcels_per_bag: f64,        // 每袋件数 >= 1
    pub window_hours: f64,           // 作业窗口小时 >= 1
    pub default_utilization: f64,    // 默认利用率 [0,1]

    // ===== 作业流单件耗时（秒） =====
    pub stage_sec: f64,
    pub seg_sec: f64,
    pub intake_sec: f64,

    // ===== 压力测试参数 =====
    pub peak_window_minutes: f64,    // >= 30
    pub peak_top_n: usize,           // >= 1
    pub peak_factor: f64,            // >= 0.5

    // ===== 计划人数 =====
    pub plan: PlannedHeadcount,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            total_parcels: 0.0,
            vinted_parcels: 0.0,
            white_parcels: 0.0,
            parcels_per_bag: 25.0,
            window_hours: 8.0,
            default_utilization: 0.85,
            stage_sec: 45.0,
            seg_sec: 60.0,
            intake_sec: 20.0,
            peak_window_minutes: 60.0,
            peak_top_n: 5,
            peak_factor: 1.2,
            plan: PlannedHeadcount::default(),
        }
    }
}

impl PlanningConfig {
    /// 施加各字段的取值下限/区间（幂等）
    pub fn sanitized(mut self) -> Self {
        self.total_parcels = non_negative(self.total_parcels);
        self.vinted_parcels = non_negative(self.vinted_parcels);
        self.white_parcels = non_negative(self.white_parcels);
        self.parcels_per_bag = finite_or_zero(self.parcels_per_bag).max(1.0);
        self.window_hours = finite_or_zero(self.window_hours).max(1.0);
        self.default_utilization = finite_or_zero(self.default_utilization).clamp(0.0, 1.0);
        self.stage_sec = non_negative(self.stage_sec);
        self.seg_sec = non_negative(self.seg_sec);
        self.intake_sec = non_negative(self.intake_sec);
        self.peak_window_minutes = finite_or_zero(self.peak_window_minutes).max(30.0);
        self.peak_top_n = self.peak_top_n.max(1);
        self.peak_factor = finite_or_zero(self.peak_factor).max(0.5);
        self
    }

    /// 白件占比 = white / total,total 为 0 时为 0,结果限制在 [0,1]
    pub fn white_share(&self) -> f64 {
        share_of(self.white_parcels, self.total_parcels)
    }

    /// Vinted 占比 = vinted / total,规则同白件占比
    pub fn vinted_share(&self) -> f64 {
        share_of(self.vinted_parcels, self.total_parcels)
    }
}

fn share_of(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// 非有限值（NaN/∞）按 0 处理
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

// ==========================================
// HourlyPlan - 小时需求（派生）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPlan {
    pub index: usize,
    pub hour: String,            // 时段标签 "HH:MM"
    pub arrival_pct: f64,        // 到货占比
    pub utilization: f64,        // 生效利用率 [0.05,1]
    pub parcels: u64,            // 本时段件数
    pub bags: u64,               // 本时段袋数
    pub stage_heads: u64,
    pub seg_heads: u64,
    pub intake_heads: u64,
    pub total_heads: u64,
}

impl HourlyPlan {
    /// 空时段序列下的峰值占位
    pub fn sentinel() -> Self {
        Self {
            index: 0,
            hour: "—".to_string(),
            arrival_pct: 0.0,
            utilization: 0.0,
            parcels: 0,
            bags: 0,
            stage_heads: 0,
            seg_heads: 0,
            intake_heads: 0,
            total_heads: 0,
        }
    }
}

// ==========================================
// ActualOverlay - 实际袋数覆写
// ==========================================
// 稀疏映射: 时段序号 → 实际袋数；缺省表示沿用计划袋数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActualOverlay {
    entries: BTreeMap<usize, u64>,
}

impl ActualOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入实际袋数；None 清除覆写
    ///
    /// 输入按 max(0, floor(x)) 归一,非有限值按 0 处理
    pub fn set(&mut self, index: usize, value: Option<f64>) {
        match value {
            Some(v) => {
                let bags = finite_or_zero(v).floor().max(0.0) as u64;
                self.entries.insert(index, bags);
            }
            None => {
                self.entries.remove(&index);
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<u64> {
        self.entries.get(&index).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// PlanningState - 单次计算快照
// ==========================================
// 调用方构造新快照后整体交给引擎,引擎内部不修改
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanningState {
    pub config: PlanningConfig,
    pub profile: DayProfile,
    pub actuals: ActualOverlay,
    pub routes: Vec<RouteRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_enforces_floors() {
        let config = PlanningConfig {
            parcels_per_bag: 0.0,
            window_hours: -3.0,
            default_utilization: 1.7,
            peak_window_minutes: 10.0,
            peak_top_n: 0,
            peak_factor: 0.1,
            stage_sec: f64::NAN,
            ..PlanningConfig::default()
        }
        .sanitized();

        assert_eq!(config.parcels_per_bag, 1.0);
        assert_eq!(config.window_hours, 1.0);
        assert_eq!(config.default_utilization, 1.0);
        assert_eq!(config.peak_window_minutes, 30.0);
        assert_eq!(config.peak_top_n, 1);
        assert_eq!(config.peak_factor, 0.5);
        assert_eq!(config.stage_sec, 0.0);
    }

    #[test]
    fn test_white_share_zero_total() {
        let config = PlanningConfig {
            total_parcels: 0.0,
            white_parcels: 50.0,
            ..PlanningConfig::default()
        };
        assert_eq!(config.white_share(), 0.0);
    }

    #[test]
    fn test_white_share_clamped() {
        let config = PlanningConfig {
            total_parcels: 100.0,
            white_parcels: 150.0,
            ..PlanningConfig::default()
        };
        assert_eq!(config.white_share(), 1.0);
    }

    #[test]
    fn test_signed_gap_saturates() {
        assert_eq!(signed_gap(4, 7), -3);
        assert_eq!(signed_gap(u64::MAX, 0), i64::MAX);
        assert_eq!(signed_gap(0, u64::MAX), i64::MIN);
    }

    #[test]
    fn test_overlay_floor_and_clear() {
        let mut overlay = ActualOverlay::new();
        overlay.set(2, Some(7.9));
        overlay.set(3, Some(-4.0));
        assert_eq!(overlay.get(2), Some(7));
        assert_eq!(overlay.get(3), Some(0));

        overlay.set(2, None);
        assert_eq!(overlay.get(2), None);
        assert_eq!(overlay.len(), 1);
    }
}
