// ==========================================
// 견적/단가표 관리 콘솔 - 核心库
// ==========================================
// 职责: 见积/单价表管理后台的核心业务逻辑
//   - 电子表格导入（字段映射 + 行校验 + 向导会话）
//   - 结构差异引擎（버전 이력 对比 / 预览高亮）
//   - 基于角色的权限门控
// REST 后端/持久化/UI 渲染均为外部协作方
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 权限层 - 角色判定
pub mod auth;

// 差异层 - 结构对比
pub mod diff;

// 导入层 - 电子表格导入管道
pub mod importer;

// 配置层 - 导入策略
pub mod config;

// API 层 - 门面编排
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    Action, DuplicatePolicy, FieldType, ImportStep, QuotationStatus, Resource, Role,
    ValidationKind, VersionType,
};

// 领域实体
pub use domain::{
    Company, MediaType, PriceTable, PriceTableItem, Product, Quotation, QuotationItem, UserRef,
    Version, VersionDiff,
};

// 权限门
pub use auth::{can, has_permission};

// 差异引擎
pub use diff::{diff, ChangeRecord};

// 导入管道
pub use importer::{
    build_mapping, price_table_item_schema, validate_rows, CellValue, ColumnMapping, ImportError,
    ImportPreview, ImportResult, ImportSession, MappedRecord, MappingOutcome, SchemaField,
    SheetData, ValidationError, ValidationOutcome,
};

// 配置
pub use config::ImportConfig;

// API
pub use api::{ApiError, ApiResult, ImportApi, ImportOutcome, VersionLog};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "견적 관리 콘솔";
