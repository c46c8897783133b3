// ==========================================
// 견적 콘솔 - API层错误类型
// ==========================================
// 职责: 把下层错误转换为调用方可解释的错误
// 注意: 权限拒绝只在实际尝试动作的门面处成为错误；
//       纯查询权限走 auth::has_permission 的布尔返回
// ==========================================

use crate::domain::types::{Action, Resource};
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("权限不足: 角色 {role} 不允许 {action} {resource}")]
    PermissionDenied {
        role: String,
        action: Action,
        resource: Resource,
    },

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("导出失败: {0}")]
    Export(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
