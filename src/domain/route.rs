// ==========================================
// 退货分拣人力规划 - 线路领域模型
// ==========================================
// 职责: 线路退件记录 + 导入批次信息
// 说明: 同一 route_id 允许重复,不做合并
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RouteRecord - 线路退件记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,   // 线路标识
    pub parcels: f64,       // 退件数 > 0
}

impl RouteRecord {
    pub fn new(route_id: impl Into<String>, parcels: f64) -> Self {
        Self {
            route_id: route_id.into(),
            parcels,
        }
    }
}

/// 全部线路退件总数
pub fn total_parcels(routes: &[RouteRecord]) -> f64 {
    routes.iter().map(|r| r.parcels).sum()
}

// ==========================================
// RouteImportBatch - 导入批次
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteImportBatch {
    pub batch_id: String,                   // 批次 ID（UUID）
    pub file_name: Option<String>,          // 源文件名
    pub sheet_name: Option<String>,         // 工作表名（仅 Excel）
    pub header_row: usize,                  // 表头所在行（0 起）
    pub route_count: usize,                 // 有效线路数
    pub skipped_rows: usize,                // 跳过行数（退件数 <= 0）
    pub total_parcels: f64,                 // 线路退件合计
    pub imported_at: DateTime<Utc>,         // 导入时间
    pub elapsed_ms: u64,                    // 导入耗时（毫秒）
}

// ==========================================
// RouteImportResult - 导入结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteImportResult {
    pub batch: RouteImportBatch,
    pub routes: Vec<RouteRecord>,
}
