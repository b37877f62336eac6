// ==========================================
// 退货分拣人力规划 - 输入解析与夹取
// ==========================================
// 职责: 松散类型输入 → 已校验数值（每个字段一个入口,进入引擎前只做一次）
// 规则: 非数值按 0 处理,再按字段取值区间夹取；缺省字段使用默认值
// 红线: 输入格式问题从不上报为错误
// ==========================================

use crate::domain::planning::{ActualOverlay, PlannedHeadcount, PlanningConfig};
use crate::domain::profile::{DayProfile, DEFAULT_FIRST_HOUR};
use crate::engine::profile_normalizer::{clamp_arrival_pct, clamp_utilization};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 任意 JSON 值 → 有限数值（非数值为 0）
///
/// - 数字: 原值（非有限为 0）
/// - 字符串: 去空白后解析,空串或无法解析为 0
/// - 布尔: true=1 / false=0
/// - 其他: 0
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// 文本 → 有限数值（导入单元格使用同一规则）
pub fn coerce_text(text: &str) -> f64 {
    coerce_number(&Value::String(text.to_string()))
}

/// 缺省（字段不存在或 null）返回 None
fn present(value: &Value) -> Option<f64> {
    if value.is_null() {
        None
    } else {
        Some(coerce_number(value))
    }
}

fn non_negative_count(value: f64) -> u64 {
    value.floor().max(0.0) as u64
}

// ==========================================
// RawPlanningInput - 原始规划输入
// ==========================================
// 所有字段以 JSON 值接收,由 to_config / to_profile / to_actuals 统一解析夹取
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPlanningInput {
    // ===== 日总量 =====
    #[serde(default)]
    pub total_parcels: Value,
    #[serde(default)]
    pub vinted_parcels: Value,
    #[serde(default)]
    pub white_parcels: Value,

    // ===== 装袋与窗口 =====
    #[serde(default)]
    pub parcels_per_bag: Value,
    #[serde(default)]
    pub window_hours: Value,
    #[serde(default)]
    pub default_utilization: Value,

    // ===== 单件耗时 =====
    #[serde(default)]
    pub stage_sec: Value,
    #[serde(default)]
    pub seg_sec: Value,
    #[serde(default)]
    pub intake_sec: Value,

    // ===== 压力测试 =====
    #[serde(default)]
    pub peak_window_minutes: Value,
    #[serde(default)]
    pub peak_top_n: Value,
    #[serde(default)]
    pub peak_factor: Value,

    // ===== 计划人数 =====
    #[serde(default)]
    pub plan_stage: Value,
    #[serde(default)]
    pub plan_seg: Value,
    #[serde(default)]
    pub plan_intake: Value,
    #[serde(default)]
    pub plan_float: Value,

    // ===== 日内曲线 =====
    #[serde(default)]
    pub first_hour: Value,
    #[serde(default)]
    pub arrival_pct: Option<Vec<Value>>,
    #[serde(default)]
    pub utilization: Option<Vec<Value>>,

    // ===== 实际袋数覆写（null 表示沿用计划） =====
    #[serde(default)]
    pub actual_bags: Vec<Value>,
}

impl RawPlanningInput {
    /// 解析规划参数
    pub fn to_config(&self) -> PlanningConfig {
        let d = PlanningConfig::default();
        let num = |v: &Value, default: f64| present(v).unwrap_or(default);

        PlanningConfig {
            total_parcels: num(&self.total_parcels, d.total_parcels).max(0.0),
            vinted_parcels: num(&self.vinted_parcels, d.vinted_parcels).max(0.0),
            white_parcels: num(&self.white_parcels, d.white_parcels).max(0.0),
            parcels_per_bag: num(&self.parcels_per_bag, d.parcels_per_bag).max(1.0),
            window_hours: num(&self.window_hours, d.window_hours).max(1.0),
            default_utilization: num(&self.default_utilization, d.default_utilization)
                .clamp(0.0, 1.0),
            stage_sec: num(&self.stage_sec, d.stage_sec).max(0.0),
            seg_sec: num(&self.seg_sec, d.seg_sec).max(0.0),
            intake_sec: num(&self.intake_sec, d.intake_sec).max(0.0),
            peak_window_minutes: num(&self.peak_window_minutes, d.peak_window_minutes).max(30.0),
            peak_top_n: num(&self.peak_top_n, d.peak_top_n as f64).floor().max(1.0) as usize,
            peak_factor: num(&self.peak_factor, d.peak_factor).max(0.5),
            plan: PlannedHeadcount {
                stage: non_negative_count(num(&self.plan_stage, 0.0)),
                seg: non_negative_count(num(&self.plan_seg, 0.0)),
                intake: non_negative_count(num(&self.plan_intake, 0.0)),
                float: non_negative_count(num(&self.plan_float, 0.0)),
            },
        }
    }

    /// 解析日内曲线
    ///
    /// 时段数取占比数组长度（缺省为默认曲线的 8 个时段）
    pub fn to_profile(&self) -> DayProfile {
        let default = DayProfile::default();
        let first_hour = present(&self.first_hour)
            .map(|h| h.floor().clamp(0.0, 23.0) as u32)
            .unwrap_or(DEFAULT_FIRST_HOUR);

        let arrival_pct: Vec<f64> = match &self.arrival_pct {
            Some(values) => values.iter().map(|v| clamp_arrival_pct(coerce_number(v))).collect(),
            None => default.arrival_pct.clone(),
        };
        let hours = arrival_pct.len();

        let utilization: Vec<Option<f64>> = match &self.utilization {
            Some(values) => values
                .iter()
                .map(|v| present(v).map(clamp_utilization))
                .collect(),
            None if hours == default.len() => default.utilization.clone(),
            None => vec![None; hours],
        };

        let mut profile = DayProfile::empty(first_hour, hours);
        profile.arrival_pct = arrival_pct;
        profile.utilization = utilization;
        profile
    }

    /// 解析实际袋数覆写
    pub fn to_actuals(&self) -> ActualOverlay {
        let mut overlay = ActualOverlay::new();
        for (index, value) in self.actual_bags.iter().enumerate() {
            if let Some(v) = present(value) {
                overlay.set(index, Some(v));
            }
        }
        overlay
    }

    /// 由已校验状态反向生成原始输入（用于配置快照导出）
    pub fn from_parts(config: &PlanningConfig, profile: &DayProfile, actuals: &ActualOverlay) -> Self {
        let first_hour = profile
            .labels
            .first()
            .map(|t| t.hour())
            .unwrap_or(DEFAULT_FIRST_HOUR);

        Self {
            total_parcels: Value::from(config.total_parcels),
            vinted_parcels: Value::from(config.vinted_parcels),
            white_parcels: Value::from(config.white_parcels),
            parcels_per_bag: Value::from(config.parcels_per_bag),
            window_hours: Value::from(config.window_hours),
            default_utilization: Value::from(config.default_utilization),
            stage_sec: Value::from(config.stage_sec),
            seg_sec: Value::from(config.seg_sec),
            intake_sec: Value::from(config.intake_sec),
            peak_window_minutes: Value::from(config.peak_window_minutes),
            peak_top_n: Value::from(config.peak_top_n as u64),
            peak_factor: Value::from(config.peak_factor),
            plan_stage: Value::from(config.plan.stage),
            plan_seg: Value::from(config.plan.seg),
            plan_intake: Value::from(config.plan.intake),
            plan_float: Value::from(config.plan.float),
            first_hour: Value::from(first_hour),
            arrival_pct: Some(profile.arrival_pct.iter().copied().map(Value::from).collect()),
            utilization: Some(
                profile
                    .utilization
                    .iter()
                    .map(|u| u.map(Value::from).unwrap_or(Value::Null))
                    .collect(),
            ),
            actual_bags: (0..profile.len())
                .map(|i| actuals.get(i).map(Value::from).unwrap_or(Value::Null))
                .collect(),
        }
    }
}
