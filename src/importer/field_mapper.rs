// ==========================================
// 견적 콘솔 - 字段映射器
// ==========================================
// 职责: 用户选择 → 候选列映射 + 完整性判定
// 纯转换，无保留状态；每次选择变化重新调用
// 不做隐式/模糊表头匹配——映射完全由用户驱动
// ==========================================

use crate::importer::schema::SchemaField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 已解析的源列（列名 + 0 基位置）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedColumn {
    pub column: String,
    pub index: usize,
}

/// 目标字段 key → 源列 的映射
///
/// 生命周期: 导入会话开始时为空，由用户选择填充，
/// 校验/导入消费一次后随会话丢弃（不持久化）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    entries: HashMap<String, MappedColumn>,
}

impl ColumnMapping {
    pub fn get(&self, field_key: &str) -> Option<&MappedColumn> {
        self.entries.get(field_key)
    }

    pub fn contains(&self, field_key: &str) -> bool {
        self.entries.contains_key(field_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 字段 key → 列名 的平坦视图（预览载荷用）
    pub fn to_selection_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.column.clone()))
            .collect()
    }

    fn insert(&mut self, field_key: String, column: MappedColumn) {
        self.entries.insert(field_key, column);
    }
}

/// build_mapping 的产物
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingOutcome {
    pub mapping: ColumnMapping,
    /// 所有必填字段均有有效选择
    pub is_complete: bool,
    /// 缺少有效选择的必填字段 key（schema 声明序）
    pub missing_required: Vec<String>,
    /// 被 2 个以上字段选中的源列（检出序）
    pub duplicate_columns: Vec<String>,
    /// 选择了表头列表之外的列名（不进入 mapping）
    pub unknown_columns: Vec<String>,
}

/// 由用户选择构建候选映射
///
/// - 空串选择视为占位（"선택 안함"），即未选择
/// - 选择了不存在的表头: 记入 unknown_columns，不进入 mapping
/// - 同一源列被多个字段选择: 两个字段都保留读取该列，
///   冲突记入 duplicate_columns，是否阻断由上层策略决定
pub fn build_mapping(
    headers: &[String],
    schema: &[SchemaField],
    selections: &HashMap<String, String>,
) -> MappingOutcome {
    let mut mapping = ColumnMapping::default();
    let mut missing_required = Vec::new();
    let mut unknown_columns = Vec::new();
    let mut column_usage: Vec<(String, usize)> = Vec::new();

    for field in schema {
        let selection = selections
            .get(&field.key)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty());

        match selection {
            Some(column) => match headers.iter().position(|h| h == column) {
                Some(index) => {
                    match column_usage.iter_mut().find(|(c, _)| c == column) {
                        Some((_, count)) => *count += 1,
                        None => column_usage.push((column.to_string(), 1)),
                    }
                    mapping.insert(
                        field.key.clone(),
                        MappedColumn {
                            column: column.to_string(),
                            index,
                        },
                    );
                }
                None => {
                    unknown_columns.push(column.to_string());
                    if field.required {
                        missing_required.push(field.key.clone());
                    }
                }
            },
            None => {
                if field.required {
                    missing_required.push(field.key.clone());
                }
            }
        }
    }

    let duplicate_columns: Vec<String> = column_usage
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(column, _)| column)
        .collect();

    MappingOutcome {
        is_complete: missing_required.is_empty(),
        mapping,
        missing_required,
        duplicate_columns,
        unknown_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::schema::price_table_item_schema;

    fn headers() -> Vec<String> {
        ["품목", "단위", "금액", "매체", "비고란"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn select(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_incomplete_until_all_required_selected() {
        let schema = price_table_item_schema();
        let partial = select(&[("name", "품목"), ("unit", "단위"), ("unitPrice", "금액")]);
        let outcome = build_mapping(&headers(), &schema, &partial);
        assert!(!outcome.is_complete);
        assert_eq!(outcome.missing_required, vec!["mediaType"]);

        let mut full = partial;
        full.insert("mediaType".to_string(), "매체".to_string());
        let outcome = build_mapping(&headers(), &schema, &full);
        assert!(outcome.is_complete);
        assert!(outcome.missing_required.is_empty());
    }

    #[test]
    fn test_empty_string_is_placeholder() {
        let schema = price_table_item_schema();
        let selections = select(&[
            ("name", "품목"),
            ("unit", ""),
            ("unitPrice", "금액"),
            ("mediaType", "매체"),
        ]);
        let outcome = build_mapping(&headers(), &schema, &selections);
        assert!(!outcome.is_complete);
        assert_eq!(outcome.missing_required, vec!["unit"]);
        assert!(!outcome.mapping.contains("unit"));
    }

    #[test]
    fn test_mapping_resolves_column_index() {
        let schema = price_table_item_schema();
        let selections = select(&[
            ("name", "품목"),
            ("unit", "단위"),
            ("unitPrice", "금액"),
            ("mediaType", "매체"),
        ]);
        let outcome = build_mapping(&headers(), &schema, &selections);
        let price = outcome.mapping.get("unitPrice").unwrap();
        assert_eq!(price.column, "금액");
        assert_eq!(price.index, 2);
    }

    #[test]
    fn test_duplicate_column_reported_but_both_kept() {
        let schema = price_table_item_schema();
        let selections = select(&[
            ("name", "품목"),
            ("unit", "단위"),
            ("unitPrice", "금액"),
            ("mediaType", "매체"),
            ("note", "품목"),
        ]);
        let outcome = build_mapping(&headers(), &schema, &selections);
        assert_eq!(outcome.duplicate_columns, vec!["품목"]);
        // 两个字段都保留对该列的读取
        assert_eq!(outcome.mapping.get("name").unwrap().index, 0);
        assert_eq!(outcome.mapping.get("note").unwrap().index, 0);
        // 完整性判定不受冲突影响
        assert!(outcome.is_complete);
    }

    #[test]
    fn test_unknown_column_excluded_from_mapping() {
        let schema = price_table_item_schema();
        let selections = select(&[
            ("name", "존재하지 않는 열"),
            ("unit", "단위"),
            ("unitPrice", "금액"),
            ("mediaType", "매체"),
        ]);
        let outcome = build_mapping(&headers(), &schema, &selections);
        assert_eq!(outcome.unknown_columns, vec!["존재하지 않는 열"]);
        assert!(!outcome.mapping.contains("name"));
        assert!(!outcome.is_complete);
        assert_eq!(outcome.missing_required, vec!["name"]);
    }

    #[test]
    fn test_pure_transform_no_retained_state() {
        let schema = price_table_item_schema();
        let selections = select(&[
            ("name", "품목"),
            ("unit", "단위"),
            ("unitPrice", "금액"),
            ("mediaType", "매체"),
        ]);
        let first = build_mapping(&headers(), &schema, &selections);
        let second = build_mapping(&headers(), &schema, &selections);
        assert_eq!(first, second);
    }
}
