// ==========================================
// 견적 콘솔 - 领域类型定义
// ==========================================
// 闭合枚举全集: 角色/动作/资源/状态
// 序列化格式与 REST 载荷保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 用户角色 (User Role)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与会话载荷一致)
// 未登录/无角色在调用侧表达为 Option<Role> 的 None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,          // 관리자
    ProjectManager, // 프로젝트 매니저
    MedicalWriter,  // 메디컬 라이터
}

impl Role {
    /// 遍历用的角色全集
    pub const ALL: [Role; 3] = [Role::Admin, Role::ProjectManager, Role::MedicalWriter];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::ProjectManager => write!(f, "PROJECT_MANAGER"),
            Role::MedicalWriter => write!(f, "MEDICAL_WRITER"),
        }
    }
}

// ==========================================
// 权限动作 (Permission Action)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Read => write!(f, "read"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

// ==========================================
// 权限资源 (Permission Resource)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Quotation,
    PriceTable,
    Company,
    Product,
    User,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Quotation,
        Resource::PriceTable,
        Resource::Company,
        Resource::Product,
        Resource::User,
    ];
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Quotation => write!(f, "quotation"),
            Resource::PriceTable => write!(f, "price_table"),
            Resource::Company => write!(f, "company"),
            Resource::Product => write!(f, "product"),
            Resource::User => write!(f, "user"),
        }
    }
}

// ==========================================
// 见积状态 (Quotation Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    Pending,  // 검토 대기
    Approved, // 승인
    Rejected, // 반려
}

impl fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuotationStatus::Pending => write!(f, "PENDING"),
            QuotationStatus::Approved => write!(f, "APPROVED"),
            QuotationStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

// ==========================================
// 版本资源类型 (Version Resource Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionType {
    Quotation,
    PriceTable,
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionType::Quotation => write!(f, "quotation"),
            VersionType::PriceTable => write!(f, "price_table"),
        }
    }
}

// ==========================================
// 导入字段类型 (Import Field Type)
// ==========================================
// 行校验器据此决定是否做数值强制转换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
}

// ==========================================
// 校验错误类别 (Validation Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    MissingRequired, // 必填字段缺失
    TypeMismatch,    // 数值强制转换失败
}

// ==========================================
// 重复列策略 (Duplicate Column Policy)
// ==========================================
// 两个目标字段选择同一源列时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// 阻断进入预览步骤（默认）
    #[default]
    Reject,
    /// 允许两个字段读取同一列
    Allow,
}

// ==========================================
// 导入向导步骤 (Import Wizard Step)
// ==========================================
// 对应三步向导: 파일 선택 → 필드 매핑 → 미리보기
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStep {
    SelectFile,
    MapFields,
    Preview,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_wire_format() {
        let json = serde_json::to_string(&Role::ProjectManager).unwrap();
        assert_eq!(json, "\"PROJECT_MANAGER\"");
        let back: Role = serde_json::from_str("\"MEDICAL_WRITER\"").unwrap();
        assert_eq!(back, Role::MedicalWriter);
    }

    #[test]
    fn test_resource_snake_case() {
        let json = serde_json::to_string(&Resource::PriceTable).unwrap();
        assert_eq!(json, "\"price_table\"");
        assert_eq!(Resource::PriceTable.to_string(), "price_table");
    }

    #[test]
    fn test_duplicate_policy_default_is_reject() {
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Reject);
    }
}
