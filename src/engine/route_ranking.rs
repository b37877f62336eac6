// ==========================================
// 退货分拣人力规划 - 线路排行
// ==========================================
// 职责: 按退件数降序取前 N 条线路（稳定排序,同值保持出现顺序）
// ==========================================

use crate::domain::route::{total_parcels, RouteRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 排行展示条数
pub const RANKING_SIZE: usize = 10;

/// 取退件数最多的前 n 条线路
///
/// sort_by 为稳定排序,同值线路保留原始顺序
pub fn top_routes(routes: &[RouteRecord], n: usize) -> Vec<RouteRecord> {
    let mut sorted: Vec<RouteRecord> = routes.to_vec();
    sorted.sort_by(|a, b| b.parcels.partial_cmp(&a.parcels).unwrap_or(Ordering::Equal));
    sorted.truncate(n);
    sorted
}

// ==========================================
// RouteRanking
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRoute {
    pub rank: usize,          // 1 起
    pub route_id: String,
    pub parcels: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteRanking {
    pub route_count: usize,
    pub total_parcels: f64,
    pub top: Vec<RankedRoute>,
}

impl RouteRanking {
    pub fn build(routes: &[RouteRecord]) -> Self {
        let top = top_routes(routes, RANKING_SIZE)
            .into_iter()
            .enumerate()
            .map(|(idx, r)| RankedRoute {
                rank: idx + 1,
                route_id: r.route_id,
                parcels: r.parcels,
            })
            .collect();

        Self {
            route_count: routes.len(),
            total_parcels: total_parcels(routes),
            top,
        }
    }
}
