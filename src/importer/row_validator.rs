// ==========================================
// 견적 콘솔 - 行校验器
// ==========================================
// 职责: 映射应用 + 类型强制转换 + 单元格级错误收集
// 红线: 错误是收集的数据，不是抛出的异常；
//       全部行都返回（错误行仅作标记，不过滤）
// ==========================================

use crate::domain::types::{FieldType, ValidationKind};
use crate::i18n::t_with_args;
use crate::importer::field_mapper::ColumnMapping;
use crate::importer::schema::SchemaField;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ==========================================
// 单元格值 (Cell Value)
// ==========================================
// Invalid 保留原始文本——显式"无效"标记，
// 绝不落成悄悄的错误默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
    Invalid(String),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// JSON 表示（预览/差异对比用）
    ///
    /// 整数值不带小数点序列化，与源载荷一致。
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                    Value::Number(Number::from(*n as i64))
                } else {
                    Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null)
                }
            }
            CellValue::Missing | CellValue::Invalid(_) => Value::Null,
        }
    }
}

// ==========================================
// 映射后记录 (Mapped Record)
// ==========================================
/// 一行数据在映射 + 类型转换之后的形态（schema 声明序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedRecord {
    fields: Vec<(String, CellValue)>,
}

impl MappedRecord {
    pub fn get(&self, field_key: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == field_key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, CellValue)> {
        self.fields.iter()
    }

    /// 记录的 JSON 对象表示
    ///
    /// Missing 字段省略，Invalid 字段以 null 出现。
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.fields {
            if matches!(value, CellValue::Missing) {
                continue;
            }
            map.insert(key.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

// ==========================================
// 校验错误 (Validation Error)
// ==========================================
/// 单元格级校验错误
///
/// row 为 0 基行号（不含表头行），column 为目标字段 key。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub row: usize,
    pub column: String,
    pub kind: ValidationKind,
    pub message: String,
}

/// validate_rows 的产物
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub records: Vec<MappedRecord>,
    pub errors: Vec<ValidationError>,
}

impl ValidationOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 对行集应用映射并逐单元格校验
///
/// 错误顺序稳定: 行号升序，行内按 schema 声明序。
/// 比表头短的行按空单元格补齐，多余单元格忽略。
pub fn validate_rows(
    rows: &[Vec<String>],
    mapping: &ColumnMapping,
    schema: &[SchemaField],
) -> ValidationOutcome {
    let mut records = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        let mut fields = Vec::with_capacity(schema.len());

        for field in schema {
            let raw = mapping
                .get(&field.key)
                .and_then(|col| row.get(col.index))
                .map(|cell| cell.trim())
                .unwrap_or("");

            let value = if raw.is_empty() {
                if field.required {
                    errors.push(ValidationError {
                        row: row_index,
                        column: field.key.clone(),
                        kind: ValidationKind::MissingRequired,
                        message: t_with_args("import.field_required", &[("field", &field.label)]),
                    });
                }
                CellValue::Missing
            } else {
                match field.field_type {
                    FieldType::Text => CellValue::Text(raw.to_string()),
                    FieldType::Number => match raw.parse::<f64>() {
                        Ok(n) => CellValue::Number(n),
                        Err(_) => {
                            errors.push(ValidationError {
                                row: row_index,
                                column: field.key.clone(),
                                kind: ValidationKind::TypeMismatch,
                                message: t_with_args("import.not_a_number", &[("value", raw)]),
                            });
                            CellValue::Invalid(raw.to_string())
                        }
                    },
                }
            };

            fields.push((field.key.clone(), value));
        }

        records.push(MappedRecord { fields });
    }

    ValidationOutcome { records, errors }
}
