// ==========================================
// 退货分拣人力规划 - 导入层
// ==========================================
// 职责: 外部线路文件导入,生成线路退件列表
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod header_locator;
pub mod route_importer_impl;
pub mod route_importer_trait;
pub mod volume_split;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use header_locator::{ExtractedRoutes, HeaderLocation, HeaderLocator};
pub use route_importer_impl::RouteImporterImpl;
pub use volume_split::VolumeSplit;

// 重导出 Trait 接口
pub use route_importer_trait::{ParsedSheet, RouteFileParser, RouteImporter};
