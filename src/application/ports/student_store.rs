//! Student Store Port - 学生存储

use crate::domain::{Student, StudentId, StudentPatch};

use super::StoreError;

/// Student Store Port
///
/// 学生 ID 由调用方指定，重复插入返回 `StoreError::AlreadyExists`
pub trait StudentStorePort: Send + Sync {
    /// 插入学生，ID 已存在时不修改存储
    fn insert(&self, id: StudentId, student: Student) -> Result<(), StoreError>;

    /// 获取学生
    fn get(&self, id: StudentId) -> Option<Student>;

    /// 合并部分更新，返回更新后的记录
    fn update(&self, id: StudentId, patch: StudentPatch) -> Result<Student, StoreError>;

    /// 删除学生，返回被删除的记录
    fn remove(&self, id: StudentId) -> Result<Student, StoreError>;

    /// 学生数量
    fn len(&self) -> usize;
}
