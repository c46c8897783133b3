// ==========================================
// 견적 콘솔 - 단가표 实体
// ==========================================
// 单价表条目是电子表格导入的落地目标
// ==========================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 단가표 (Price Table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    pub id: String,
    pub name: String,
    pub version: String,
    pub effective_date: NaiveDate,
    #[serde(default)]
    pub items: Vec<PriceTableItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 단가표 항목 (Price Table Item)
///
/// 导入模板的必填字段: name / unit / unit_price / media_type，
/// 可选字段: description / note / category。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTableItem {
    pub id: String,
    /// 품목명
    pub name: String,
    /// 단위
    pub unit: String,
    /// 단가
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// 카테고리（导入时可为空）
    #[serde(default)]
    pub category: String,
    /// 매체 유형
    pub media_type: String,
}
