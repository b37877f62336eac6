// ==========================================
// 退货分拣人力规划 - 表头定位与字段映射
// ==========================================
// 职责: 在扫描窗口内定位表头行 + 按列提取线路记录
// 表头规则（去空白、不区分大小写）:
//   线路列: 等于 "route"
//   件数列: 等于 "parcels_returned" → 等于 "parcels returned" → 同时包含 "parcels" 与 "return"
// ==========================================

use crate::config::coercion::coerce_text;
use crate::domain::route::RouteRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::is_blank_row;
use tracing::debug;

/// 表头定位结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocation {
    pub row: usize,          // 表头行号（0 起）
    pub route_col: usize,
    pub parcels_col: usize,
}

/// 行提取结果
#[derive(Debug, Clone, Default)]
pub struct ExtractedRoutes {
    pub routes: Vec<RouteRecord>,
    pub skipped_rows: usize,   // 退件数 <= 0 的行
}

pub struct HeaderLocator;

impl HeaderLocator {
    /// 在前 scan_rows 行内定位表头
    pub fn locate(&self, rows: &[Vec<String>], scan_rows: usize) -> ImportResult<HeaderLocation> {
        for (row_idx, row) in rows.iter().take(scan_rows).enumerate() {
            let lower: Vec<String> = row.iter().map(|c| c.trim().to_lowercase()).collect();

            let route_col = match lower.iter().position(|c| c == "route") {
                Some(col) => col,
                None => continue,
            };

            let parcels_col = lower
                .iter()
                .position(|c| c == "parcels_returned")
                .or_else(|| lower.iter().position(|c| c == "parcels returned"))
                .or_else(|| {
                    lower
                        .iter()
                        .position(|c| c.contains("parcels") && c.contains("return"))
                });

            if let Some(parcels_col) = parcels_col {
                debug!(row = row_idx, route_col, parcels_col, "表头定位完成");
                return Ok(HeaderLocation {
                    row: row_idx,
                    route_col,
                    parcels_col,
                });
            }
        }

        Err(ImportError::HeadersNotFound {
            scanned_rows: rows.len().min(scan_rows),
        })
    }

    /// 提取表头之后的线路记录
    ///
    /// 退件数按数值解析（非数值为 0）,<= 0 的行跳过
    pub fn extract(&self, rows: &[Vec<String>], header: &HeaderLocation) -> ExtractedRoutes {
        let mut extracted = ExtractedRoutes::default();

        for row in rows.iter().skip(header.row + 1) {
            if is_blank_row(row) {
                continue;
            }

            let route_id = row
                .get(header.route_col)
                .map(|v| v.trim().to_string())
                .unwrap_or_default();
            let parcels = row
                .get(header.parcels_col)
                .map(|v| coerce_text(v))
                .unwrap_or(0.0);

            if parcels <= 0.0 {
                extracted.skipped_rows += 1;
                continue;
            }

            extracted.routes.push(RouteRecord { route_id, parcels });
        }

        extracted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_locate_after_preamble() {
        let data = rows(&[
            &["Returns export"],
            &["Depot", "ROUTE", "Driver", "Parcels_Returned"],
            &["D1", "R1", "x", "10"],
        ]);
        let header = HeaderLocator.locate(&data, 50).unwrap();
        assert_eq!(header.row, 1);
        assert_eq!(header.route_col, 1);
        assert_eq!(header.parcels_col, 3);
    }

    #[test]
    fn test_locate_loose_parcels_header() {
        let data = rows(&[&["Route", "Total Parcels (Returned)"]]);
        let header = HeaderLocator.locate(&data, 50).unwrap();
        assert_eq!(header.parcels_col, 1);
    }

    #[test]
    fn test_exact_match_preferred_over_loose() {
        let data = rows(&[&["Route", "parcels returned to depot", "Parcels Returned"]]);
        let header = HeaderLocator.locate(&data, 50).unwrap();
        assert_eq!(header.parcels_col, 2);
    }

    #[test]
    fn test_header_outside_window_not_found() {
        let mut data = rows(&[&["noise"], &["noise"], &["noise"]]);
        data.push(vec!["Route".to_string(), "Parcels_Returned".to_string()]);

        let result = HeaderLocator.locate(&data, 3);
        assert!(matches!(
            result,
            Err(ImportError::HeadersNotFound { scanned_rows: 3 })
        ));
    }

    #[test]
    fn test_extract_skips_non_positive() {
        let data = rows(&[
            &["Route", "Parcels_Returned"],
            &["R1", "12"],
            &["R2", "0"],
            &["R3", "n/a"],
            &["", "7"],
            &["R1", "3"],
        ]);
        let header = HeaderLocator.locate(&data, 50).unwrap();
        let extracted = HeaderLocator.extract(&data, &header);

        assert_eq!(extracted.skipped_rows, 2);
        assert_eq!(extracted.routes.len(), 3);
        // 空线路名但件数为正的行保留；重复线路不合并
        assert_eq!(extracted.routes[1].route_id, "");
        assert_eq!(extracted.routes[2].route_id, "R1");
    }

    #[test]
    fn test_blank_rows_count_toward_window() {
        let mut data = rows(&[&["Returns export"]]);
        data.extend(std::iter::repeat(vec![String::new(), String::new()]).take(4));
        data.push(vec!["Route".to_string(), "Parcels_Returned".to_string()]);

        let result = HeaderLocator.locate(&data, 5);
        assert!(matches!(
            result,
            Err(ImportError::HeadersNotFound { scanned_rows: 5 })
        ));
        assert_eq!(HeaderLocator.locate(&data, 6).unwrap().row, 5);
    }

    #[test]
    fn test_extract_ignores_blank_rows() {
        let data = rows(&[
            &["Route", "Parcels_Returned"],
            &["R1", "4"],
            &["", " "],
            &["R2", "6"],
        ]);
        let header = HeaderLocator.locate(&data, 50).unwrap();
        let extracted = HeaderLocator.extract(&data, &header);

        assert_eq!(extracted.routes.len(), 2);
        assert_eq!(extracted.skipped_rows, 0);
    }
}
