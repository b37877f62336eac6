// ==========================================
// 退货分拣人力规划 - 峰值压力测试
// ==========================================
// 职责: 取退件最多的 Top-N 线路,集中到峰值窗口内,估算袋/时
// 公式:
//   stress_parcels = Σ top_n.parcels × peak_factor
//   stress_bags    = ceil(stress_parcels / parcels_per_bag)
//   bags_per_hour  = stress_bags / (peak_window_minutes / 60)
// 红线: 仅供参考,不与计划人数比较；无线路时不输出（不是 0）
// ==========================================

use crate::domain::planning::PlanningConfig;
use crate::domain::route::RouteRecord;
use crate::engine::route_ranking::top_routes;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ==========================================
// StressEstimate - 压力测试估算
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressEstimate {
    pub top_n: usize,
    pub routes_used: usize,       // 实际参与线路数（可能少于 top_n）
    pub base_parcels: f64,        // Top-N 合计（未放大）
    pub peak_factor: f64,
    pub stress_parcels: f64,      // 放大后件数
    pub stress_bags: u64,
    pub window_minutes: f64,
    pub bags_per_hour: f64,
}

pub struct StressTester {
    // 无状态引擎
}

impl StressTester {
    pub fn new() -> Self {
        Self {}
    }

    #[instrument(skip_all, fields(routes = routes.len(), top_n = config.peak_top_n))]
    pub fn estimate(&self, config: &PlanningConfig, routes: &[RouteRecord]) -> Option<StressEstimate> {
        if routes.is_empty() {
            return None;
        }

        let top_n = config.peak_top_n.max(1);
        let top = top_routes(routes, top_n);
        let base_parcels: f64 = top.iter().map(|r| r.parcels).sum();
        let stress_parcels = base_parcels * config.peak_factor;
        let stress_bags = (stress_parcels / config.parcels_per_bag.max(1.0)).ceil().max(0.0) as u64;
        let window_hours = config.peak_window_minutes / 60.0;
        let bags_per_hour = if window_hours > 0.0 {
            stress_bags as f64 / window_hours
        } else {
            0.0
        };

        debug!(
            stress_parcels = stress_parcels,
            bags_per_hour = bags_per_hour,
            "压力测试估算完成"
        );

        Some(StressEstimate {
            top_n,
            routes_used: top.len(),
            base_parcels,
            peak_factor: config.peak_factor,
            stress_parcels,
            stress_bags,
            window_minutes: config.peak_window_minutes,
            bags_per_hour,
        })
    }
}

impl Default for StressTester {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_routes_absent() {
        let config = PlanningConfig::default();
        assert!(StressTester::new().estimate(&config, &[]).is_none());
    }

    #[test]
    fn test_top_two_with_surge() {
        let config = PlanningConfig {
            peak_top_n: 2,
            peak_factor: 1.5,
            parcels_per_bag: 25.0,
            peak_window_minutes: 30.0,
            ..PlanningConfig::default()
        };
        let routes = vec![
            RouteRecord::new("A", 500.0),
            RouteRecord::new("B", 300.0),
            RouteRecord::new("C", 100.0),
        ];

        let estimate = StressTester::new().estimate(&config, &routes).unwrap();
        assert_eq!(estimate.base_parcels, 800.0);
        assert_eq!(estimate.stress_parcels, 1200.0);
        assert_eq!(estimate.stress_bags, 48);
        // 30 分钟窗口 → 96 袋/时
        assert_eq!(estimate.bags_per_hour, 96.0);
    }

    #[test]
    fn test_top_n_exceeds_route_count() {
        let config = PlanningConfig {
            peak_top_n: 10,
            peak_factor: 1.0,
            ..PlanningConfig::default()
        };
        let routes = vec![RouteRecord::new("A", 40.0)];
        let estimate = StressTester::new().estimate(&config, &routes).unwrap();
        assert_eq!(estimate.routes_used, 1);
        assert_eq!(estimate.stress_bags, 2);
    }
}
