// ==========================================
// 견적 콘솔 - 변경 내역 表示层
// ==========================================
// 字段路径/值的展示美化，叠加在差异引擎之上
// 差异引擎本身不依赖本模块
// ==========================================

use serde_json::Value;

/// 字段段名 → 화면 표시용 라벨
fn field_label(part: &str) -> Option<&'static str> {
    let label = match part {
        "quoteNumber" => "견적서 번호",
        "date" => "작성일",
        "validUntil" => "유효기간",
        "customer" => "고객사",
        "projectDescription" => "프로젝트 설명",
        "status" => "상태",
        "items" => "견적 항목",
        "totalAmount" => "총액",
        "name" => "이름",
        "unitPrice" => "단가",
        "quantity" => "수량",
        "discount" => "할인율",
        _ => return None,
    };
    Some(label)
}

/// 点分路径 → 展示名（逐段映射，以 " > " 连接）
///
/// 未登记的段保持原样。
pub fn format_field_name(field: &str) -> String {
    field
        .split('.')
        .map(|part| field_label(part).unwrap_or(part))
        .collect::<Vec<_>>()
        .join(" > ")
}

/// 变更值 → 展示文本
///
/// null → "-"，数组 → "[N개 항목]"，对象 → 紧凑 JSON，
/// 布尔 → 예/아니오，其余按字面输出。
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Array(items) => format!("[{}개 항목]", items.len()),
        Value::Object(_) => value.to_string(),
        Value::Bool(true) => "예".to_string(),
        Value::Bool(false) => "아니오".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
    }
}
