// ==========================================
// 退货分拣人力规划 - 峰值时段识别
// ==========================================
// 职责: 从左到右扫描需求表,取 total_heads 严格最大的时段
// 规则: 并列时保留最早时段；空序列返回零值占位
// 说明: 峰值时段三作业流人数即缺口校验的"需求人数"（不是压力测试估算）
// ==========================================

use crate::domain::planning::HourlyPlan;
use tracing::{debug, instrument};

pub struct PeakDetector {
    // 无状态引擎
}

impl PeakDetector {
    pub fn new() -> Self {
        Self {}
    }

    #[instrument(skip_all, fields(hours = hourly.len()))]
    pub fn detect(&self, hourly: &[HourlyPlan]) -> HourlyPlan {
        let mut peak = match hourly.first() {
            Some(first) => first,
            None => return HourlyPlan::sentinel(),
        };

        for row in hourly.iter().skip(1) {
            if row.total_heads > peak.total_heads {
                peak = row;
            }
        }

        debug!(hour = %peak.hour, total_heads = peak.total_heads, "峰值时段识别完成");
        peak.clone()
    }
}

impl Default for PeakDetector {
    fn default() -> Self {
        Self::new()
    }
}
