// ==========================================
// 견적 콘솔 - 단가표 导出
// ==========================================
// 职责: 条目序列 → CSV 文本（表头为화면 라벨）
// 浏览器下载动作由外部表现层负责
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::price_table::PriceTableItem;

/// 导出列（与导入 Schema 的声明序一致）
const EXPORT_HEADERS: [&str; 7] = ["품목명", "단위", "단가", "매체 유형", "설명", "비고", "카테고리"];

/// 整数价格不带小数点输出
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

/// 단가표 항목 → CSV 文本
pub fn export_items_csv(items: &[PriceTableItem]) -> ApiResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| ApiError::Export(e.to_string()))?;

    for item in items {
        let price = format_price(item.unit_price);
        writer
            .write_record([
                item.name.as_str(),
                item.unit.as_str(),
                price.as_str(),
                item.media_type.as_str(),
                item.description.as_deref().unwrap_or(""),
                item.note.as_deref().unwrap_or(""),
                item.category.as_str(),
            ])
            .map_err(|e| ApiError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApiError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ApiError::Export(e.to_string()))
}
