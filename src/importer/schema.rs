// ==========================================
// 견적 콘솔 - 导入目标 Schema
// ==========================================
// 每个导入目标定义一组静态目标字段
// key 使用 REST 载荷字段名，label 为화면 라벨
// ==========================================

use crate::domain::types::FieldType;
use serde::{Deserialize, Serialize};

/// 导入目标字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub field_type: FieldType,
}

impl SchemaField {
    pub fn required(key: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            required: true,
            field_type,
        }
    }

    pub fn optional(key: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            required: false,
            field_type,
        }
    }
}

/// 단가표 항목 导入 Schema
///
/// 必填: name(품목명) / unit(단위) / unitPrice(단가) / mediaType(매체 유형)
/// 可选: description(설명) / note(비고) / category(카테고리)
pub fn price_table_item_schema() -> Vec<SchemaField> {
    vec![
        SchemaField::required("name", "품목명", FieldType::Text),
        SchemaField::required("unit", "단위", FieldType::Text),
        SchemaField::required("unitPrice", "단가", FieldType::Number),
        SchemaField::required("mediaType", "매체 유형", FieldType::Text),
        SchemaField::optional("description", "설명", FieldType::Text),
        SchemaField::optional("note", "비고", FieldType::Text),
        SchemaField::optional("category", "카테고리", FieldType::Text),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table_schema_required_fields() {
        let schema = price_table_item_schema();
        let required: Vec<&str> = schema
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key.as_str())
            .collect();
        assert_eq!(required, vec!["name", "unit", "unitPrice", "mediaType"]);
    }

    #[test]
    fn test_unit_price_is_numeric() {
        let schema = price_table_item_schema();
        let price = schema.iter().find(|f| f.key == "unitPrice").unwrap();
        assert_eq!(price.field_type, FieldType::Number);
    }
}
