// ==========================================
// 退货分拣人力规划 - 线路导入器实现
// ==========================================
// 职责: 整合导入流程,从文件到线路列表
// 流程: 解析 → 表头定位 → 行提取 → 批次汇总
// 说明: 文件解析为阻塞操作,放入 spawn_blocking 执行
// ==========================================

use crate::domain::route::{total_parcels, RouteImportBatch, RouteImportResult};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{is_blank_row, UniversalFileParser};
use crate::importer::header_locator::HeaderLocator;
use crate::importer::route_importer_trait::{RouteFileParser, RouteImporter};
use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// RouteImporterImpl - 线路导入器实现
// ==========================================
pub struct RouteImporterImpl {
    file_parser: Arc<dyn RouteFileParser>,
    header_locator: HeaderLocator,
}

impl RouteImporterImpl {
    /// 使用指定解析器创建
    pub fn new(file_parser: Arc<dyn RouteFileParser>) -> Self {
        Self {
            file_parser,
            header_locator: HeaderLocator,
        }
    }
}

impl Default for RouteImporterImpl {
    /// 按扩展名自动选择解析器
    fn default() -> Self {
        Self::new(Arc::new(UniversalFileParser))
    }
}

#[async_trait]
impl RouteImporter for RouteImporterImpl {
    #[instrument(skip(self, file_path), fields(batch_id))]
    async fn import_file(&self, file_path: &Path) -> ImportResult<RouteImportResult> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        let file_path_str = file_path.display().to_string();
        info!(batch_id = %batch_id, file_path = %file_path_str, "开始导入线路数据");

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let parser = Arc::clone(&self.file_parser);
        let owned_path = file_path.to_path_buf();
        let sheet = tokio::task::spawn_blocking(move || parser.parse_rows(&owned_path))
            .await
            .map_err(|e| ImportError::InternalError(format!("解析任务异常: {}", e)))?
            .map_err(|e| {
                error!(error = %e, "文件解析失败");
                e
            })?;

        if sheet.rows.iter().all(|row| is_blank_row(row)) {
            error!("文件无数据行");
            return Err(ImportError::EmptySource);
        }
        info!(total_rows = sheet.rows.len(), "文件解析完成");

        // === 步骤 2: 表头定位 ===
        debug!("步骤 2: 表头定位");
        let header = self
            .header_locator
            .locate(&sheet.rows, sheet.header_scan_rows)
            .map_err(|e| {
                error!(error = %e, "表头定位失败");
                e
            })?;

        // === 步骤 3: 行提取 ===
        debug!("步骤 3: 行提取");
        let extracted = self.header_locator.extract(&sheet.rows, &header);

        // === 步骤 4: 批次汇总 ===
        let total = total_parcels(&extracted.routes);
        let batch = RouteImportBatch {
            batch_id,
            file_name: file_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string()),
            sheet_name: sheet.sheet_name,
            header_row: header.row,
            route_count: extracted.routes.len(),
            skipped_rows: extracted.skipped_rows,
            total_parcels: total,
            imported_at: Utc::now(),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            route_count = batch.route_count,
            skipped_rows = batch.skipped_rows,
            total_parcels = batch.total_parcels,
            elapsed_ms = batch.elapsed_ms,
            "线路导入完成"
        );

        Ok(RouteImportResult {
            batch,
            routes: extracted.routes,
        })
    }
}
