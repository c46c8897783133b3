// ==========================================
// 견적 콘솔 - 권한 계층
// ==========================================
// 职责: 基于角色的允许/拒绝判定（无副作用）
// 会话/令牌由外部身份协作方负责
// ==========================================

pub mod permission;

pub use permission::{can, has_permission, role_permissions};
