// ==========================================
// 退货分拣人力规划 - 导入后总量拆分
// ==========================================
// 职责: 线路文件只提供总件数,白件沿用用户当前值,Vinted 取剩余
// 规则:
//   total  = round(Σ parcels)
//   white  > total → white = round(total), vinted = 0
//   否则   → white 不变, vinted = max(0, round(total - white))
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeSplit {
    pub total_parcels: f64,
    pub white_parcels: f64,
    pub vinted_parcels: f64,
}

impl VolumeSplit {
    /// 按导入总量与当前白件数拆分
    pub fn derive(total_from_routes: f64, current_white: f64) -> Self {
        let white_now = if current_white.is_finite() {
            current_white.max(0.0)
        } else {
            0.0
        };

        if white_now > total_from_routes {
            Self {
                total_parcels: total_from_routes.round(),
                white_parcels: total_from_routes.round(),
                vinted_parcels: 0.0,
            }
        } else {
            Self {
                total_parcels: total_from_routes.round(),
                white_parcels: white_now,
                vinted_parcels: (total_from_routes - white_now).round().max(0.0),
            }
        }
    }
}
