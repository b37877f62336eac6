// ==========================================
// 线路导入器集成测试
// ==========================================
// 测试目标: 验证 CSV / Excel 导入流程（表头定位 / 行提取 / 批次汇总）
// ==========================================

mod test_helpers;

use returns_planner::importer::{ImportError, RouteImporter, RouteImporterImpl};
use std::path::Path;
use test_helpers::{fixture_path, standard_routes_csv, write_routes_csv, write_temp_file};

#[tokio::test]
async fn test_import_csv_with_preamble() {
    let temp_file = write_routes_csv(standard_routes_csv()).expect("Failed to write csv");

    let importer = RouteImporterImpl::default();
    let result = importer
        .import_file(temp_file.path())
        .await
        .expect("Import should succeed");

    let ids: Vec<&str> = result.routes.iter().map(|r| r.route_id.as_str()).collect();
    assert_eq!(ids, vec!["R-01", "R-02", "R-04"], "退件为 0 的线路应跳过");
    assert_eq!(result.batch.header_row, 2);
    assert_eq!(result.batch.route_count, 3);
    assert_eq!(result.batch.skipped_rows, 1);
    assert_eq!(result.batch.total_parcels, 900.0);
    assert!(result.batch.sheet_name.is_none());
    assert!(!result.batch.batch_id.is_empty());
    assert!(result
        .batch
        .file_name
        .as_deref()
        .is_some_and(|n| n.ends_with(".csv")));
}

#[tokio::test]
async fn test_import_loose_header_match() {
    let temp_file = write_routes_csv(
        "ROUTE,Total Parcels Returned (today)\n\
         North,42\n\
         South, 8 \n",
    )
    .expect("Failed to write csv");

    let result = RouteImporterImpl::default()
        .import_file(temp_file.path())
        .await
        .expect("Loose header should be accepted");

    assert_eq!(result.routes.len(), 2);
    assert_eq!(result.routes[1].parcels, 8.0);
}

#[tokio::test]
async fn test_import_non_numeric_parcels_skipped() {
    let temp_file = write_routes_csv(
        "Route,Parcels_Returned\n\
         A,12\n\
         B,n/a\n\
         C,-3\n\
         D,2.5\n",
    )
    .expect("Failed to write csv");

    let result = RouteImporterImpl::default()
        .import_file(temp_file.path())
        .await
        .expect("Import should succeed");

    assert_eq!(result.routes.len(), 2);
    assert_eq!(result.batch.skipped_rows, 2);
    assert_eq!(result.batch.total_parcels, 14.5);
}

#[tokio::test]
async fn test_import_missing_headers() {
    let temp_file = write_routes_csv("Depot,Count\nA,10\nB,20\n").expect("Failed to write csv");

    let result = RouteImporterImpl::default().import_file(temp_file.path()).await;
    assert!(matches!(
        result,
        Err(ImportError::HeadersNotFound { scanned_rows: 3 })
    ));
}

#[tokio::test]
async fn test_import_header_beyond_scan_window() {
    let mut content = String::new();
    for i in 0..60 {
        content.push_str(&format!("note {}\n", i));
    }
    content.push_str("Route,Parcels_Returned\nA,10\n");
    let temp_file = write_routes_csv(&content).expect("Failed to write csv");

    let result = RouteImporterImpl::default().import_file(temp_file.path()).await;
    assert!(matches!(
        result,
        Err(ImportError::HeadersNotFound { scanned_rows: 50 })
    ));
}

#[tokio::test]
async fn test_import_empty_file() {
    let temp_file = write_routes_csv("\n\n").expect("Failed to write csv");

    let result = RouteImporterImpl::default().import_file(temp_file.path()).await;
    assert!(matches!(result, Err(ImportError::EmptySource)));
}

#[tokio::test]
async fn test_import_unsupported_format() {
    let temp_file = write_temp_file(".json", "{}").expect("Failed to write file");

    let result = RouteImporterImpl::default().import_file(temp_file.path()).await;
    assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "json"));
}

#[tokio::test]
async fn test_import_file_not_found() {
    let result = RouteImporterImpl::default()
        .import_file(Path::new("/nonexistent/routes.csv"))
        .await;
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[tokio::test]
async fn test_import_header_only_yields_empty_list() {
    let temp_file = write_routes_csv("Route,Parcels_Returned\n").expect("Failed to write csv");

    let result = RouteImporterImpl::default()
        .import_file(temp_file.path())
        .await
        .expect("Header-only file should import");

    assert!(result.routes.is_empty());
    assert_eq!(result.batch.total_parcels, 0.0);
}

// ==========================================
// Excel 工作簿导入
// ==========================================
// routes.xlsx: Summary / routes_raw_old / ROUTES_RAW 三个工作表,
// ROUTES_RAW 的表头位于第 61 行（前面是说明行与空行）

#[tokio::test]
async fn test_import_workbook_selects_exact_sheet() {
    let result = RouteImporterImpl::default()
        .import_file(&fixture_path("routes.xlsx"))
        .await
        .expect("Workbook import should succeed");

    assert_eq!(result.batch.sheet_name.as_deref(), Some("ROUTES_RAW"));
    assert!(
        result.routes.iter().all(|r| r.route_id != "OLD-1"),
        "不应读取 routes_raw_old"
    );
    assert_eq!(result.batch.file_name.as_deref(), Some("routes.xlsx"));
}

#[tokio::test]
async fn test_import_workbook_header_past_csv_window() {
    let result = RouteImporterImpl::default()
        .import_file(&fixture_path("routes.xlsx"))
        .await
        .expect("Workbook import should succeed");

    assert_eq!(result.batch.header_row, 60);

    // 数值单元格作为线路号时按整数文本输出
    let ids: Vec<&str> = result.routes.iter().map(|r| r.route_id.as_str()).collect();
    assert_eq!(ids, vec!["101", "R-7", "R-10"]);
    assert_eq!(result.routes[2].parcels, 45.5);
    assert_eq!(result.batch.total_parcels, 245.5);
    // 102 (0 件) 与 R-9 (n/a) 跳过,空行不计
    assert_eq!(result.batch.skipped_rows, 2);
}

#[tokio::test]
async fn test_import_workbook_blank_rows_fill_window() {
    let result = RouteImporterImpl::default()
        .import_file(&fixture_path("routes_blank_window.xlsx"))
        .await;

    assert!(matches!(
        result,
        Err(ImportError::HeadersNotFound { scanned_rows: 200 })
    ));
}
