// ==========================================
// 견적 콘솔 - API 层
// ==========================================
// 职责: 把纯组件接到协作方接缝上的薄门面
// 权限门控只发生在这里（实际尝试动作处）
// ==========================================

pub mod error;
pub mod export;
pub mod import_api;
pub mod version_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use export::export_items_csv;
pub use import_api::{
    record_to_item, ImportApi, ImportOutcome, InMemoryPriceTableStore, PriceTableStore, RowError,
};
pub use version_api::{compare_snapshots, VersionLog};
