// ==========================================
// 견적 콘솔 - 导入层
// ==========================================
// 职责: 电子表格导入管道
// 管道: 解码 → 字段映射 → 行校验 → 确认
// ==========================================

// 模块声明
pub mod decoder;
pub mod error;
pub mod field_mapper;
pub mod row_validator;
pub mod schema;
pub mod session;

// 重导出核心类型
pub use decoder::{CsvDecoder, ExcelDecoder, FileDecoder, SheetData, UniversalDecoder};
pub use error::{ImportError, ImportResult};
pub use field_mapper::{build_mapping, ColumnMapping, MappedColumn, MappingOutcome};
pub use row_validator::{
    validate_rows, CellValue, MappedRecord, ValidationError, ValidationOutcome,
};
pub use schema::{price_table_item_schema, SchemaField};
pub use session::{ImportPreview, ImportSession};
