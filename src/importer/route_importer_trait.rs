// ==========================================
// 退货分拣人力规划 - 线路导入 Trait
// ==========================================
// 职责: 定义线路导入接口（不包含实现）
// ==========================================

use crate::domain::route::RouteImportResult;
use crate::importer::error::ImportResult;
use async_trait::async_trait;
use std::path::Path;

// ==========================================
// ParsedSheet - 解析后的原始表格
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ParsedSheet {
    pub sheet_name: Option<String>,   // 工作表名（仅 Excel）
    pub rows: Vec<Vec<String>>,       // 原始行（已去除全空行,单元格已去空白）
    pub header_scan_rows: usize,      // 表头扫描窗口
}

// ==========================================
// RouteFileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: CsvParser, ExcelParser, UniversalFileParser
pub trait RouteFileParser: Send + Sync {
    /// 解析文件为原始行（不假设表头位置）
    ///
    /// # 返回
    /// - Ok(ParsedSheet): 原始行 + 表头扫描窗口
    /// - Err: 文件不存在、格式不支持、解析失败、无工作表
    fn parse_rows(&self, file_path: &Path) -> ImportResult<ParsedSheet>;
}

// ==========================================
// RouteImporter Trait
// ==========================================
// 用途: 线路导入主接口
// 实现者: RouteImporterImpl
#[async_trait]
pub trait RouteImporter: Send + Sync {
    /// 从文件导入线路退件记录
    ///
    /// # 导入流程
    /// 1. 文件读取与解析
    /// 2. 表头定位（Route + Parcels_Returned）
    /// 3. 逐行提取,跳过退件数 <= 0 的行
    /// 4. 生成导入批次
    async fn import_file(&self, file_path: &Path) -> ImportResult<RouteImportResult>;
}
