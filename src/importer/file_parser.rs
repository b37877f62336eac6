// ==========================================
// 退货分拣人力规划 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 说明: 只产出原始行,表头定位交给 HeaderLocator
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::route_importer_trait::{ParsedSheet, RouteFileParser};
use calamine::{open_workbook_auto, Reader};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// CSV 表头扫描行数
pub const CSV_HEADER_SCAN_ROWS: usize = 50;

/// Excel 表头扫描行数
pub const EXCEL_HEADER_SCAN_ROWS: usize = 200;

/// 线路原始数据工作表名
pub const ROUTES_SHEET_NAME: &str = "routes_raw";

/// 小写扩展名
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImportError::FileNotFound(path.display().to_string()))
    }
}

/// 整行均为空白
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|v| v.trim().is_empty())
}

/// 保留非全空行
fn push_if_not_blank(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if !is_blank_row(&row) {
        rows.push(row);
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl RouteFileParser for CsvParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 表头位置未知,按无表头读取
        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .trim(Trim::All)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            push_if_not_blank(&mut rows, record.iter().map(|v| v.to_string()).collect());
        }

        Ok(ParsedSheet {
            sheet_name: None,
            rows,
            header_scan_rows: CSV_HEADER_SCAN_ROWS,
        })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// 选择线路工作表: 名称等于 routes_raw,其次包含 routes_raw（均不区分大小写）
    pub fn select_sheet(sheet_names: &[String]) -> Option<String> {
        sheet_names
            .iter()
            .find(|n| n.to_lowercase() == ROUTES_SHEET_NAME)
            .or_else(|| {
                sheet_names
                    .iter()
                    .find(|n| n.to_lowercase().contains(ROUTES_SHEET_NAME))
            })
            .cloned()
    }
}

impl RouteFileParser for ExcelParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !matches!(ext.as_str(), "xlsx" | "xlsm" | "xls" | "ods") {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = Self::select_sheet(&sheet_names).ok_or_else(|| {
            ImportError::SheetNotFound {
                sheets: sheet_names.join(", "),
            }
        })?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // 工作表内的空行保留,计入表头扫描窗口
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|data_row| {
                data_row
                    .iter()
                    .map(|cell| cell.to_string().trim().to_string())
                    .collect()
            })
            .collect();

        Ok(ParsedSheet {
            sheet_name: Some(sheet_name),
            rows,
            header_scan_rows: EXCEL_HEADER_SCAN_ROWS,
        })
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl RouteFileParser for UniversalFileParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_rows(file_path),
            "xlsx" | "xlsm" | "xls" | "ods" => ExcelParser.parse_rows(file_path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_reads_all_rows() {
        let temp_file = csv_file(&["Depot report", "Route,Parcels_Returned", "R1,10", "\"R2\", 20 "]);
        let sheet = CsvParser.parse_rows(temp_file.path()).unwrap();

        assert_eq!(sheet.rows.len(), 4);
        assert_eq!(sheet.rows[3], vec!["R2".to_string(), "20".to_string()]);
        assert_eq!(sheet.header_scan_rows, CSV_HEADER_SCAN_ROWS);
    }

    #[test]
    fn test_csv_parser_skips_blank_rows() {
        let temp_file = csv_file(&["Route,Parcels_Returned", "R1,10", ",", "", "R2,5"]);
        let sheet = CsvParser.parse_rows(temp_file.path()).unwrap();
        assert_eq!(sheet.rows.len(), 3);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_rows(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser.parse_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }

    #[test]
    fn test_excel_parser_corrupt_file() {
        let mut temp_file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        temp_file.write_all(b"definitely not a zip archive").unwrap();

        let result = ExcelParser.parse_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_select_sheet_prefers_exact_name() {
        let names = vec![
            "Summary".to_string(),
            "ROUTES_RAW_old".to_string(),
            "Routes_Raw".to_string(),
        ];
        assert_eq!(ExcelParser::select_sheet(&names), Some("Routes_Raw".to_string()));

        let names = vec!["Summary".to_string(), "my_routes_raw_v2".to_string()];
        assert_eq!(
            ExcelParser::select_sheet(&names),
            Some("my_routes_raw_v2".to_string())
        );

        let names = vec!["Summary".to_string()];
        assert_eq!(ExcelParser::select_sheet(&names), None);
    }
}
