// ==========================================
// 견적 콘솔 - 견적서 实体
// ==========================================
// 金额口径: 行合计 = 数量 × 单价 - 行折扣
//           总额   = Σ行合计 - 整单折扣
// ==========================================

use crate::domain::types::QuotationStatus;
use crate::domain::version::UserRef;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 견적 항목 (Quotation Item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationItem {
    pub id: String,
    /// 매체 유형
    pub media_type: String,
    /// 단가
    pub unit_price: f64,
    /// 수량
    pub quantity: f64,
    /// 행 단위 할인액
    #[serde(default)]
    pub discount: f64,
    /// 행 합계（由 line_total 维护）
    pub total_price: f64,
}

impl QuotationItem {
    /// 行合计
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price - self.discount
    }
}

/// 견적서 (Quotation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    pub id: String,
    /// 견적서 번호
    pub quote_number: String,
    /// 작성일
    pub date: NaiveDate,
    /// 유효기간
    pub valid_until: NaiveDate,
    /// 고객사
    pub customer: String,
    /// 프로젝트 설명
    #[serde(default)]
    pub project_description: String,
    pub status: QuotationStatus,
    pub author: UserRef,
    /// 整单折扣额
    #[serde(default)]
    pub discount_amount: f64,
    /// 총액（由 recalc_total 维护）
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<QuotationItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quotation {
    /// 重算每行合计与整单总额
    pub fn recalc_total(&mut self) {
        let mut sum = 0.0;
        for item in &mut self.items {
            item.total_price = item.line_total();
            sum += item.total_price;
        }
        self.total_amount = sum - self.discount_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(unit_price: f64, quantity: f64, discount: f64) -> QuotationItem {
        QuotationItem {
            id: "item-1".to_string(),
            media_type: "온라인 배너".to_string(),
            unit_price,
            quantity,
            discount,
            total_price: 0.0,
        }
    }

    fn quotation(items: Vec<QuotationItem>, discount_amount: f64) -> Quotation {
        Quotation {
            id: "q-1".to_string(),
            quote_number: "Q-2024-001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            valid_until: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            customer: "한빛제약".to_string(),
            project_description: String::new(),
            status: QuotationStatus::Pending,
            author: UserRef {
                id: "u-1".to_string(),
                name: "김지수".to_string(),
            },
            discount_amount,
            total_amount: 0.0,
            items,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_line_total_with_discount() {
        let it = item(5000.0, 3.0, 500.0);
        assert_eq!(it.line_total(), 14_500.0);
    }

    #[test]
    fn test_recalc_total_sums_lines_minus_order_discount() {
        let mut q = quotation(vec![item(5000.0, 2.0, 0.0), item(1000.0, 10.0, 1000.0)], 500.0);
        q.recalc_total();
        // 10000 + 9000 - 500
        assert_eq!(q.total_amount, 18_500.0);
        assert_eq!(q.items[0].total_price, 10_000.0);
        assert_eq!(q.items[1].total_price, 9_000.0);
    }

    #[test]
    fn test_recalc_total_empty_items() {
        let mut q = quotation(vec![], 0.0);
        q.recalc_total();
        assert_eq!(q.total_amount, 0.0);
    }
}
