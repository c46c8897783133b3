// ==========================================
// 견적 콘솔 - 结构差异引擎
// ==========================================
// 递归对比两个嵌套记录，产出字段级变更列表
// 值表示: serde_json::Value（闭合标签变体，启用 preserve_order）
// 消费方: 导入预览高亮 / 버전 이력 对比
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 单条字段级变更
///
/// field 为点分路径（如 "items.0" 不会出现——数组整体比较），
/// 嵌套对象只产出叶子级变更。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub field: String,
    pub old_value: Value,
    pub new_value: Value,
}

// ==========================================
// 运行时种类 (Value Kind)
// ==========================================
// 种类不同 → 产出单条变更，不再递归
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

fn kind(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

/// 对比两个记录，返回有序的变更列表
///
/// 键序: before 的键按插入序在前，after 独有的键按其插入序在后。
/// 两侧都是对象时逐键递归；根不是对象时在空路径直接比较（全函数）。
/// 对相同输入，输出序列确定且可重复。
pub fn diff(before: &Value, after: &Value) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    match (before, after) {
        (Value::Object(a), Value::Object(b)) => diff_objects(a, b, "", &mut changes),
        _ => compare_at(before, after, "", &mut changes),
    }
    changes
}

fn diff_objects(before: &Map<String, Value>, after: &Map<String, Value>, path: &str, out: &mut Vec<ChangeRecord>) {
    // 键并集: before 的键优先，after 独有的键追加
    let mut keys: Vec<&String> = before.keys().collect();
    for key in after.keys() {
        if !before.contains_key(key) {
            keys.push(key);
        }
    }

    let null = Value::Null;
    for key in keys {
        let current = join_path(path, key);
        // 单侧缺失的键按 null（缺席值）参与比较
        let v1 = before.get(key).unwrap_or(&null);
        let v2 = after.get(key).unwrap_or(&null);
        compare_at(v1, v2, &current, out);
    }
}

fn compare_at(v1: &Value, v2: &Value, path: &str, out: &mut Vec<ChangeRecord>) {
    // 种类不一致: 整体记为一条变更，不递归
    if kind(v1) != kind(v2) {
        out.push(change(path, v1, v2));
        return;
    }

    match (v1, v2) {
        // 嵌套对象: 递归，父键本身不产出记录
        (Value::Object(a), Value::Object(b)) => diff_objects(a, b, path, out),
        // 数组: 深度全等比较，任何差异记为整体一条
        (Value::Array(_), Value::Array(_)) => {
            if v1 != v2 {
                out.push(change(path, v1, v2));
            }
        }
        // 标量: 严格相等
        _ => {
            if v1 != v2 {
                out.push(change(path, v1, v2));
            }
        }
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn change(path: &str, old: &Value, new: &Value) -> ChangeRecord {
    ChangeRecord {
        field: path.to_string(),
        old_value: old.clone(),
        new_value: new.clone(),
    }
}
