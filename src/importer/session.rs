// ==========================================
// 견적 콘솔 - 导入会话 (Import Session)
// ==========================================
// 三步向导的单持有者状态对象:
//   파일 선택 → 필드 매핑 → 미리보기
// 映射器每次选择变化都重新调用（自身无保留状态），
// 会话对象是整个向导期间唯一的共享资源
// ==========================================

use crate::config::ImportConfig;
use crate::domain::types::{DuplicatePolicy, ImportStep};
use crate::importer::decoder::SheetData;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{build_mapping, MappingOutcome};
use crate::importer::row_validator::{validate_rows, MappedRecord, ValidationError, ValidationOutcome};
use crate::importer::schema::SchemaField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 预览载荷（与 REST `ImportPreview` 形状一致）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreview {
    pub headers: Vec<String>,
    /// 预览行（按配置截断；校验覆盖全部行）
    pub rows: Vec<Vec<String>>,
    /// 目标字段 key → 源列名
    pub mappings: HashMap<String, String>,
    pub validation_errors: Vec<ValidationError>,
}

/// 导入向导会话
pub struct ImportSession {
    schema: Vec<SchemaField>,
    sheet: SheetData,
    config: ImportConfig,
    selections: HashMap<String, String>,
    step: ImportStep,
    validation: Option<ValidationOutcome>,
}

impl ImportSession {
    /// 文件解码完成后开启会话，进入字段映射步骤
    pub fn start(sheet: SheetData, schema: Vec<SchemaField>, config: ImportConfig) -> Self {
        Self {
            schema,
            sheet,
            config,
            selections: HashMap::new(),
            step: ImportStep::MapFields,
            validation: None,
        }
    }

    pub fn step(&self) -> ImportStep {
        self.step
    }

    pub fn headers(&self) -> &[String] {
        &self.sheet.headers
    }

    pub fn total_rows(&self) -> usize {
        self.sheet.rows.len()
    }

    /// 记录一次用户选择（空串即清除，"선택 안함"）
    pub fn select_column(&mut self, field_key: &str, column: &str) -> ImportResult<MappingOutcome> {
        self.require_step(ImportStep::MapFields)?;
        if column.trim().is_empty() {
            self.selections.remove(field_key);
        } else {
            self.selections
                .insert(field_key.to_string(), column.to_string());
        }
        Ok(self.mapping())
    }

    /// 清除某字段的选择
    pub fn clear_column(&mut self, field_key: &str) -> ImportResult<MappingOutcome> {
        self.require_step(ImportStep::MapFields)?;
        self.selections.remove(field_key);
        Ok(self.mapping())
    }

    /// 当前选择下的候选映射（每次重新计算）
    pub fn mapping(&self) -> MappingOutcome {
        build_mapping(&self.sheet.headers, &self.schema, &self.selections)
    }

    /// 映射步骤 → 预览步骤
    ///
    /// 必填字段不全 → MappingIncomplete；
    /// 重复列且策略为 Reject → DuplicateMapping。
    /// 两者都是"다음"按钮被阻断的数据化表达，不是崩溃。
    pub fn to_preview(&mut self) -> ImportResult<ImportPreview> {
        self.require_step(ImportStep::MapFields)?;

        let outcome = self.mapping();
        if !outcome.is_complete {
            return Err(ImportError::MappingIncomplete {
                missing: outcome.missing_required,
            });
        }
        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && !outcome.duplicate_columns.is_empty()
        {
            return Err(ImportError::DuplicateMapping {
                columns: outcome.duplicate_columns,
            });
        }

        // 校验覆盖全部行；预览行按配置截断
        let validation = validate_rows(&self.sheet.rows, &outcome.mapping, &self.schema);
        let preview = ImportPreview {
            headers: self.sheet.headers.clone(),
            rows: self
                .sheet
                .rows
                .iter()
                .take(self.config.preview_rows)
                .cloned()
                .collect(),
            mappings: outcome.mapping.to_selection_map(),
            validation_errors: validation.errors.clone(),
        };

        self.validation = Some(validation);
        self.step = ImportStep::Preview;
        Ok(preview)
    }

    /// 预览步骤 → 回到字段映射
    pub fn back(&mut self) -> ImportResult<()> {
        self.require_step(ImportStep::Preview)?;
        self.step = ImportStep::MapFields;
        self.validation = None;
        Ok(())
    }

    /// 确认导入，产出全部映射后记录
    ///
    /// 只要存在任何校验错误，整批被阻断（不做按行部分导入）。
    /// 会话被消费——映射随会话结束丢弃，不持久化。
    pub fn confirm(self) -> ImportResult<Vec<MappedRecord>> {
        if self.step != ImportStep::Preview {
            return Err(ImportError::StepMismatch {
                expected: ImportStep::Preview,
                actual: self.step,
            });
        }

        // to_preview 成功后 validation 必定已填充
        let validation = self.validation.ok_or_else(|| {
            ImportError::Other(anyhow::anyhow!("导入会话缺少校验结果"))
        })?;

        if !validation.is_clean() {
            return Err(ImportError::ValidationBlocked {
                error_count: validation.errors.len(),
            });
        }
        Ok(validation.records)
    }

    fn require_step(&self, expected: ImportStep) -> ImportResult<()> {
        if self.step != expected {
            return Err(ImportError::StepMismatch {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::schema::price_table_item_schema;

    fn sheet(rows: &[&[&str]]) -> SheetData {
        SheetData {
            headers: ["품목", "단위", "금액", "매체"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    fn session(rows: &[&[&str]]) -> ImportSession {
        ImportSession::start(
            sheet(rows),
            price_table_item_schema(),
            ImportConfig::default(),
        )
    }

    fn map_all(s: &mut ImportSession) {
        s.select_column("name", "품목").unwrap();
        s.select_column("unit", "단위").unwrap();
        s.select_column("unitPrice", "금액").unwrap();
        s.select_column("mediaType", "매체").unwrap();
    }

    #[test]
    fn test_next_blocked_until_mapping_complete() {
        let mut s = session(&[&["배너", "건", "5000", "온라인"]]);
        s.select_column("name", "품목").unwrap();
        let err = s.to_preview().unwrap_err();
        assert!(matches!(err, ImportError::MappingIncomplete { .. }));
        assert_eq!(s.step(), ImportStep::MapFields);

        map_all(&mut s);
        let preview = s.to_preview().unwrap();
        assert!(preview.validation_errors.is_empty());
        assert_eq!(s.step(), ImportStep::Preview);
    }

    #[test]
    fn test_duplicate_mapping_rejected_by_default() {
        let mut s = session(&[&["배너", "건", "5000", "온라인"]]);
        map_all(&mut s);
        s.select_column("note", "품목").unwrap();
        let err = s.to_preview().unwrap_err();
        assert!(matches!(err, ImportError::DuplicateMapping { .. }));
    }

    #[test]
    fn test_duplicate_mapping_allowed_by_policy() {
        let config = ImportConfig {
            duplicate_policy: DuplicatePolicy::Allow,
            ..ImportConfig::default()
        };
        let mut s = ImportSession::start(
            sheet(&[&["배너", "건", "5000", "온라인"]]),
            price_table_item_schema(),
            config,
        );
        map_all(&mut s);
        s.select_column("note", "품목").unwrap();
        let preview = s.to_preview().unwrap();
        assert_eq!(preview.mappings.get("note"), Some(&"품목".to_string()));
    }

    #[test]
    fn test_confirm_blocked_while_errors_exist() {
        let mut s = session(&[&["", "건", "5000", "온라인"]]);
        map_all(&mut s);
        let preview = s.to_preview().unwrap();
        assert_eq!(preview.validation_errors.len(), 1);

        let err = s.confirm().unwrap_err();
        assert!(matches!(
            err,
            ImportError::ValidationBlocked { error_count: 1 }
        ));
    }

    #[test]
    fn test_confirm_yields_all_records() {
        let mut s = session(&[
            &["배너", "건", "5000", "온라인"],
            &["검색", "건", "3000", "온라인"],
        ]);
        map_all(&mut s);
        s.to_preview().unwrap();
        let records = s.confirm().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name").unwrap().as_text(), Some("배너"));
        assert_eq!(records[1].get("unitPrice").unwrap().as_number(), Some(3000.0));
    }

    #[test]
    fn test_preview_rows_capped_but_validation_covers_all() {
        let rows: Vec<Vec<String>> = (0..8)
            .map(|i| {
                let price = if i == 7 { "bad".to_string() } else { "1000".to_string() };
                vec![format!("품목{}", i), "건".to_string(), price, "온라인".to_string()]
            })
            .collect();
        let data = SheetData {
            headers: ["품목", "단위", "금액", "매체"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rows,
        };
        let mut s = ImportSession::start(data, price_table_item_schema(), ImportConfig::default());
        map_all(&mut s);
        let preview = s.to_preview().unwrap();
        assert_eq!(preview.rows.len(), 5);
        // 第 8 行（预览之外）的错误仍被检出
        assert_eq!(preview.validation_errors.len(), 1);
        assert_eq!(preview.validation_errors[0].row, 7);
    }

    #[test]
    fn test_back_returns_to_mapping() {
        let mut s = session(&[&["배너", "건", "5000", "온라인"]]);
        map_all(&mut s);
        s.to_preview().unwrap();
        s.back().unwrap();
        assert_eq!(s.step(), ImportStep::MapFields);
        // 回退后可修改选择并重新进入预览
        s.select_column("note", "").unwrap();
        s.to_preview().unwrap();
    }

    #[test]
    fn test_confirm_before_preview_is_step_mismatch() {
        let s = session(&[&["배너", "건", "5000", "온라인"]]);
        let err = s.confirm().unwrap_err();
        assert!(matches!(err, ImportError::StepMismatch { .. }));
    }
}
