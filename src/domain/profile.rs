// ==========================================
// 退货分拣人力规划 - 到货曲线领域模型
// ==========================================
// 职责: 小时时段 + 到货占比曲线 + 利用率曲线
// 红线: 时段序列固定,所有数组按时段序列生成
// ==========================================

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// 默认到货占比曲线（8 个时段,合计 100%）
pub const DEFAULT_ARRIVAL_PCT: [f64; 8] = [0.05, 0.12, 0.18, 0.20, 0.18, 0.15, 0.07, 0.05];

/// 默认小时利用率曲线
pub const DEFAULT_UTILIZATION: [f64; 8] = [0.30, 0.95, 1.00, 1.00, 1.00, 1.00, 0.80, 1.00];

/// 默认首个时段开始小时（09:00）
pub const DEFAULT_FIRST_HOUR: u32 = 9;

/// 利用率下限（防止除零）
pub const MIN_UTILIZATION: f64 = 0.05;

/// 利用率上限
pub const MAX_UTILIZATION: f64 = 1.0;

/// 生成从 first_hour 开始的连续整点标签
pub fn hour_labels(first_hour: u32, count: usize) -> Vec<NaiveTime> {
    (0..count as u32)
        .filter_map(|i| NaiveTime::from_hms_opt((first_hour % 24 + i % 24) % 24, 0, 0))
        .collect()
}

// ==========================================
// HourSlot - 校验后的小时时段
// ==========================================
// 由 ProfileNormalizer 产出,引擎只消费该类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourSlot {
    pub index: usize,                // 时段序号
    pub label: NaiveTime,            // 时段标签（整点）
    pub arrival_pct: f64,            // 到货占比 [0,1]
    pub utilization: Option<f64>,    // 利用率 [0.05,1]；None 表示使用默认利用率
}

// ==========================================
// DayProfile - 可编辑的日内曲线（原始输入）
// ==========================================
// 用途: 会话内由用户编辑,计算前交由 ProfileNormalizer 校验
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProfile {
    pub labels: Vec<NaiveTime>,
    pub arrival_pct: Vec<f64>,
    pub utilization: Vec<Option<f64>>,
}

impl DayProfile {
    /// 按时段数生成空曲线（占比 0,利用率未设置）
    pub fn empty(first_hour: u32, hours: usize) -> Self {
        Self {
            labels: hour_labels(first_hour, hours),
            arrival_pct: vec![0.0; hours],
            utilization: vec![None; hours],
        }
    }

    /// 时段数量
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for DayProfile {
    fn default() -> Self {
        Self {
            labels: hour_labels(DEFAULT_FIRST_HOUR, DEFAULT_ARRIVAL_PCT.len()),
            arrival_pct: DEFAULT_ARRIVAL_PCT.to_vec(),
            utilization: DEFAULT_UTILIZATION.iter().copied().map(Some).collect(),
        }
    }
}
