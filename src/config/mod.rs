// ==========================================
// 견적 콘솔 - 配置层
// ==========================================
// 职责: 导入策略配置（带默认值）
// ==========================================

use crate::domain::types::DuplicatePolicy;
use serde::{Deserialize, Serialize};

/// 预览步骤默认展示的行数
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// 导入策略配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    /// 多个字段映射到同一源列时的处理策略
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    /// 预览步骤截断的行数（校验始终覆盖全部行）
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_preview_rows() -> usize {
    DEFAULT_PREVIEW_ROWS
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImportConfig::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ImportConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ImportConfig::default());
    }
}
