//! Student Context - 学生记录

use serde::{Deserialize, Serialize};

/// 学生 ID（由调用方指定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 学生记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub age: i64,
}

/// 学生部分更新
///
/// 缺省或为 null 的字段保持原值不变
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

impl Student {
    /// 合并部分更新
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Student {
        Student {
            name: "Bob".to_string(),
            age: 20,
        }
    }

    #[test]
    fn test_apply_name_only_keeps_age() {
        let mut student = bob();
        student.apply(StudentPatch {
            name: Some("Bob2".to_string()),
            age: None,
        });
        assert_eq!(student.name, "Bob2");
        assert_eq!(student.age, 20);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut student = bob();
        let patch = StudentPatch::default();
        assert!(patch.is_empty());
        student.apply(patch);
        assert_eq!(student, bob());
    }

    #[test]
    fn test_patch_deserializes_missing_and_null_as_none() {
        let patch: StudentPatch = serde_json::from_str(r#"{"name": "Bob2"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("Bob2"));
        assert!(patch.age.is_none());

        let patch: StudentPatch = serde_json::from_str(r#"{"age": null}"#).unwrap();
        assert!(patch.is_empty());
    }
}
