// ==========================================
// 견적 콘솔 - 버전 이력 API
// ==========================================
// 职责: 快照登记（写入时即计算变更列表）+ 两版本对比
// 变更列表与按需对比走同一差异引擎，结果一致
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::diff::{diff, ChangeRecord};
use crate::domain::types::VersionType;
use crate::domain::version::{UserRef, Version, VersionDiff};
use chrono::Utc;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

struct StoredVersion {
    version: Version,
    snapshot: Value,
}

/// 버전 이력 협력자（内存实现）
///
/// 每次 record 相对上一快照计算变更；首个版本相对空对象，
/// 全部字段表现为 缺席 → 存在 的变更。
#[derive(Default)]
pub struct VersionLog {
    entries: Vec<StoredVersion>,
}

impl VersionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个新快照，返回生成的版本
    pub fn record(
        &mut self,
        resource_type: VersionType,
        resource_id: &str,
        snapshot: Value,
        created_by: UserRef,
        comment: Option<String>,
    ) -> Version {
        let previous = self
            .entries_for(resource_type, resource_id)
            .last()
            .map(|stored| stored.snapshot.clone())
            .unwrap_or_else(|| Value::Object(Default::default()));

        let changes = diff(&previous, &snapshot);
        let version_no = self.entries_for(resource_type, resource_id).count() + 1;

        info!(
            %resource_type,
            resource_id,
            version_no,
            change_count = changes.len(),
            "버전 기록"
        );

        let version = Version {
            id: Uuid::new_v4().to_string(),
            version_number: format!("v{}", version_no),
            resource_type,
            resource_id: resource_id.to_string(),
            changes,
            created_by,
            created_at: Utc::now(),
            comment,
        };
        self.entries.push(StoredVersion {
            version: version.clone(),
            snapshot,
        });
        version
    }

    /// 资源的版本历史（新版本在前）
    pub fn history(&self, resource_type: VersionType, resource_id: &str) -> Vec<&Version> {
        let mut versions: Vec<&Version> = self
            .entries_for(resource_type, resource_id)
            .map(|stored| &stored.version)
            .collect();
        versions.reverse();
        versions
    }

    /// 资源的最新版本
    pub fn latest(&self, resource_type: VersionType, resource_id: &str) -> Option<&Version> {
        self.entries_for(resource_type, resource_id)
            .last()
            .map(|stored| &stored.version)
    }

    /// 对比两个历史版本（按存储快照重新求差）
    pub fn compare(&self, version_id_a: &str, version_id_b: &str) -> ApiResult<VersionDiff> {
        let a = self.find(version_id_a)?;
        let b = self.find(version_id_b)?;
        let changes = diff(&a.snapshot, &b.snapshot);
        Ok(VersionDiff {
            version_a: a.version.clone(),
            version_b: b.version.clone(),
            changes,
        })
    }

    fn find(&self, version_id: &str) -> ApiResult<&StoredVersion> {
        self.entries
            .iter()
            .find(|stored| stored.version.id == version_id)
            .ok_or_else(|| ApiError::NotFound(format!("version: {}", version_id)))
    }

    fn entries_for<'a, 'b>(
        &'a self,
        resource_type: VersionType,
        resource_id: &'b str,
    ) -> impl Iterator<Item = &'a StoredVersion> + use<'a, 'b> {
        self.entries.iter().filter(move |stored| {
            stored.version.resource_type == resource_type
                && stored.version.resource_id == resource_id
        })
    }
}

/// 任意两个快照的即席对比（不经过历史存储）
pub fn compare_snapshots(before: &Value, after: &Value) -> Vec<ChangeRecord> {
    diff(before, after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn author() -> UserRef {
        UserRef {
            id: "u-1".to_string(),
            name: "김지수".to_string(),
        }
    }

    #[test]
    fn test_first_version_changes_from_empty() {
        let mut log = VersionLog::new();
        let version = log.record(
            VersionType::Quotation,
            "q-1",
            json!({"quoteNumber": "Q-1", "totalAmount": 10000}),
            author(),
            None,
        );
        assert_eq!(version.version_number, "v1");
        assert_eq!(version.changes.len(), 2);
        assert_eq!(version.changes[0].field, "quoteNumber");
        assert_eq!(version.changes[0].old_value, Value::Null);
    }

    #[test]
    fn test_eager_changes_match_on_demand_rediff() {
        let mut log = VersionLog::new();
        let v1_snapshot = json!({"totalAmount": 10000, "status": "PENDING"});
        let v2_snapshot = json!({"totalAmount": 12000, "status": "PENDING"});
        let id_a = log
            .record(VersionType::Quotation, "q-1", v1_snapshot.clone(), author(), None)
            .id
            .clone();
        let id_b = log
            .record(VersionType::Quotation, "q-1", v2_snapshot.clone(), author(), None)
            .id
            .clone();

        let recorded = log.latest(VersionType::Quotation, "q-1").unwrap().changes.clone();
        let compared = log.compare(&id_a, &id_b).unwrap().changes;
        assert_eq!(recorded, compared);
        assert_eq!(compared, compare_snapshots(&v1_snapshot, &v2_snapshot));
        assert_eq!(compared.len(), 1);
        assert_eq!(compared[0].field, "totalAmount");
    }

    #[test]
    fn test_history_newest_first_per_resource() {
        let mut log = VersionLog::new();
        log.record(VersionType::Quotation, "q-1", json!({"a": 1}), author(), None);
        log.record(VersionType::Quotation, "q-1", json!({"a": 2}), author(), Some("수정".to_string()));
        log.record(VersionType::PriceTable, "pt-1", json!({"b": 1}), author(), None);

        let history = log.history(VersionType::Quotation, "q-1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].version_number, "v2");
        assert_eq!(history[1].version_number, "v1");
        // 不同资源各自编号
        assert_eq!(
            log.latest(VersionType::PriceTable, "pt-1").unwrap().version_number,
            "v1"
        );
    }

    #[test]
    fn test_compare_unknown_version_not_found() {
        let log = VersionLog::new();
        let err = log.compare("missing-a", "missing-b").unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_items_array_changes_as_whole() {
        let mut log = VersionLog::new();
        let v1 = json!({"items": [{"name": "배너", "unitPrice": 5000}]});
        let v2 = json!({"items": [{"name": "배너", "unitPrice": 6000}]});
        let id_a = log.record(VersionType::Quotation, "q-1", v1, author(), None).id.clone();
        let id_b = log.record(VersionType::Quotation, "q-1", v2, author(), None).id.clone();
        let changes = log.compare(&id_a, &id_b).unwrap().changes;
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "items");
    }
}
