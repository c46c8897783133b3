// ==========================================
// 견적 콘솔 - 버전 이력 实体
// ==========================================
// 变更列表由结构差异引擎在写入时计算
// ==========================================

use crate::diff::ChangeRecord;
use crate::domain::types::VersionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户引用（作成者表示用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

/// 버전 (Version)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: String,
    /// "v1", "v2", … 资源内递增
    pub version_number: String,
    pub resource_type: VersionType,
    pub resource_id: String,
    pub changes: Vec<ChangeRecord>,
    pub created_by: UserRef,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// 两个版本的对比结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDiff {
    pub version_a: Version,
    pub version_b: Version,
    pub changes: Vec<ChangeRecord>,
}
