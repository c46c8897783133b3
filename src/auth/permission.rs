// ==========================================
// 견적 콘솔 - 권한 게이트 (Permission Gate)
// ==========================================
// 静态 角色 → 权限集 表，纯函数判定
// 红线: 未知/缺失角色一律拒绝（deny-by-default）
// ==========================================

use crate::domain::types::{Action, Resource, Role};
use Action::{Create, Delete, Read, Update};
use Resource::{Company, PriceTable, Product, Quotation, User};

// 관리자: 全资源全动作
const ADMIN_PERMISSIONS: &[(Action, Resource)] = &[
    (Create, Quotation),
    (Read, Quotation),
    (Update, Quotation),
    (Delete, Quotation),
    (Create, PriceTable),
    (Read, PriceTable),
    (Update, PriceTable),
    (Delete, PriceTable),
    (Create, Company),
    (Read, Company),
    (Update, Company),
    (Delete, Company),
    (Create, Product),
    (Read, Product),
    (Update, Product),
    (Delete, Product),
    (Create, User),
    (Read, User),
    (Update, User),
    (Delete, User),
];

// 프로젝트 매니저: 견적서 全动作 + 其余只读
const PROJECT_MANAGER_PERMISSIONS: &[(Action, Resource)] = &[
    (Create, Quotation),
    (Read, Quotation),
    (Update, Quotation),
    (Delete, Quotation),
    (Read, PriceTable),
    (Read, Company),
    (Read, Product),
];

// 메디컬 라이터: 공유 견적서 읽기/수정 + 其余只读
const MEDICAL_WRITER_PERMISSIONS: &[(Action, Resource)] = &[
    (Read, Quotation),
    (Update, Quotation),
    (Read, PriceTable),
    (Read, Company),
    (Read, Product),
];

/// 角色的静态权限表
pub fn role_permissions(role: Role) -> &'static [(Action, Resource)] {
    match role {
        Role::Admin => ADMIN_PERMISSIONS,
        Role::ProjectManager => PROJECT_MANAGER_PERMISSIONS,
        Role::MedicalWriter => MEDICAL_WRITER_PERMISSIONS,
    }
}

/// 权限判定
///
/// 返回 true 当且仅当角色的权限表包含 (action, resource) 条目。
/// `None`（未登录/无角色）对任何权限均返回 false；
/// 未登录用户的跳转由调用方在查询本函数之前处理。
pub fn has_permission(role: Option<Role>, action: Action, resource: Resource) -> bool {
    match role {
        Some(role) => role_permissions(role)
            .iter()
            .any(|&(a, r)| a == action && r == resource),
        None => false,
    }
}

// ==========================================
// 便捷偏应用: can::create / read / update / delete
// ==========================================
pub mod can {
    use super::has_permission;
    use crate::domain::types::{Action, Resource, Role};

    pub fn create(role: Option<Role>, resource: Resource) -> bool {
        has_permission(role, Action::Create, resource)
    }

    pub fn read(role: Option<Role>, resource: Resource) -> bool {
        has_permission(role, Action::Read, resource)
    }

    pub fn update(role: Option<Role>, resource: Resource) -> bool {
        has_permission(role, Action::Update, resource)
    }

    pub fn delete(role: Option<Role>, resource: Resource) -> bool {
        has_permission(role, Action::Delete, resource)
    }
}
