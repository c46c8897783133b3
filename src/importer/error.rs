// ==========================================
// 견적 콘솔 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 单元格级校验问题不在此列——它们作为
// ValidationError 数据收集，不作为 Err 抛出
// ==========================================

use crate::domain::types::ImportStep;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 向导步骤错误 =====
    #[error("必填字段未映射: {missing:?}")]
    MappingIncomplete { missing: Vec<String> },

    #[error("多个字段映射到同一源列: {columns:?}")]
    DuplicateMapping { columns: Vec<String> },

    #[error("存在 {error_count} 条校验错误，批次被阻断")]
    ValidationBlocked { error_count: usize },

    #[error("向导步骤不匹配: 期望 {expected:?}，当前 {actual:?}")]
    StepMismatch {
        expected: ImportStep,
        actual: ImportStep,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
