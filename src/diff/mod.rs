// ==========================================
// 견적 콘솔 - 差异层
// ==========================================
// 职责: 结构差异计算 + 展示美化
// ==========================================

pub mod engine;
pub mod present;

pub use engine::{diff, ChangeRecord};
pub use present::{format_field_name, format_value};
