// ==========================================
// 견적 콘솔 - 领域层
// ==========================================
// 职责: 实体定义与闭合枚举，不含业务编排
// ==========================================

pub mod company;
pub mod price_table;
pub mod quotation;
pub mod types;
pub mod version;

// 重导出核心类型
pub use company::{Company, MediaType, Product};
pub use price_table::{PriceTable, PriceTableItem};
pub use quotation::{Quotation, QuotationItem};
pub use types::{
    Action, DuplicatePolicy, FieldType, ImportStep, QuotationStatus, Resource, Role,
    ValidationKind, VersionType,
};
pub use version::{UserRef, Version, VersionDiff};
