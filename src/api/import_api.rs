// ==========================================
// 견적 콘솔 - 단가표 导入API
// ==========================================
// 职责: 权限门控 + 会话编排 + 提交落地
// 持久化经由 PriceTableStore 接缝交给外部协作方
// ==========================================

use crate::auth::can;
use crate::api::error::{ApiError, ApiResult};
use crate::config::ImportConfig;
use crate::domain::price_table::PriceTableItem;
use crate::domain::types::{Action, Resource, Role};
use crate::importer::decoder::{FileDecoder, SheetData, UniversalDecoder};
use crate::importer::row_validator::{CellValue, MappedRecord};
use crate::importer::schema::price_table_item_schema;
use crate::importer::session::ImportSession;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// 行级错误（REST `ImportResult.errors` 条目）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// 导入结果（REST `ImportResult` 形状）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub success: bool,
    pub total_rows: usize,
    pub imported_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<RowError>>,
}

/// 持久化协作方接缝
///
/// 接收映射后的条目序列做提交；REST 后端实现在库外。
pub trait PriceTableStore {
    fn insert_items(&mut self, items: Vec<PriceTableItem>) -> anyhow::Result<usize>;
}

/// 测试/演示用内存实现
#[derive(Debug, Default)]
pub struct InMemoryPriceTableStore {
    pub items: Vec<PriceTableItem>,
}

impl PriceTableStore for InMemoryPriceTableStore {
    fn insert_items(&mut self, items: Vec<PriceTableItem>) -> anyhow::Result<usize> {
        let count = items.len();
        self.items.extend(items);
        Ok(count)
    }
}

/// 干净记录 → 단가표 항목
///
/// 仅对已通过校验的记录调用；缺失的可选字段落 None/空串。
pub fn record_to_item(record: &MappedRecord) -> PriceTableItem {
    let text = |key: &str| -> String {
        record
            .get(key)
            .and_then(CellValue::as_text)
            .unwrap_or_default()
            .to_string()
    };
    let optional_text = |key: &str| -> Option<String> {
        record
            .get(key)
            .and_then(CellValue::as_text)
            .map(|s| s.to_string())
    };

    PriceTableItem {
        id: Uuid::new_v4().to_string(),
        name: text("name"),
        unit: text("unit"),
        unit_price: record
            .get("unitPrice")
            .and_then(CellValue::as_number)
            .unwrap_or_default(),
        description: optional_text("description"),
        note: optional_text("note"),
        category: text("category"),
        media_type: text("mediaType"),
    }
}

/// 단가표 导入门面
pub struct ImportApi {
    config: ImportConfig,
}

impl Default for ImportApi {
    fn default() -> Self {
        Self::new(ImportConfig::default())
    }
}

impl ImportApi {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// 解码上传的文件为 { headers, rows }
    pub fn preview_file(&self, file_path: &Path) -> ApiResult<SheetData> {
        let sheet = UniversalDecoder.decode(file_path)?;
        info!(
            headers = sheet.headers.len(),
            rows = sheet.rows.len(),
            "파일 디코딩 완료"
        );
        Ok(sheet)
    }

    /// 端到端执行一次导入
    ///
    /// 权限: 需要 create price_table；拒绝返回 PermissionDenied。
    /// 映射不完整/重复列按错误传播（请求级问题）；
    /// 单元格校验错误返回 success=false 的结果（批次被阻断，
    /// 全部行号/消息回给调用方修正）。
    pub fn run_import(
        &self,
        role: Option<Role>,
        sheet: SheetData,
        selections: &HashMap<String, String>,
        store: &mut dyn PriceTableStore,
    ) -> ApiResult<ImportOutcome> {
        if !can::create(role, Resource::PriceTable) {
            warn!(?role, "단가표 가져오기 권한 거부");
            return Err(ApiError::PermissionDenied {
                role: role.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
                action: Action::Create,
                resource: Resource::PriceTable,
            });
        }

        let total_rows = sheet.rows.len();
        let mut session =
            ImportSession::start(sheet, price_table_item_schema(), self.config.clone());
        for (field_key, column) in selections {
            session.select_column(field_key, column)?;
        }

        let preview = session.to_preview()?;
        if !preview.validation_errors.is_empty() {
            let errors: Vec<RowError> = preview
                .validation_errors
                .iter()
                .map(|e| RowError {
                    row: e.row,
                    message: format!("{}: {}", e.column, e.message),
                })
                .collect();
            info!(error_count = errors.len(), "가져오기 차단: 검증 오류");
            return Ok(ImportOutcome {
                success: false,
                total_rows,
                imported_rows: 0,
                errors: Some(errors),
            });
        }

        let records = session.confirm()?;
        let items: Vec<PriceTableItem> = records.iter().map(record_to_item).collect();
        let imported_rows = store.insert_items(items)?;
        info!(total_rows, imported_rows, "단가표 가져오기 완료");

        Ok(ImportOutcome {
            success: true,
            total_rows,
            imported_rows,
            errors: None,
        })
    }
}
