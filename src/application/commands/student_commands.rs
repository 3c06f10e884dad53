//! Student Commands

use crate::domain::{Student, StudentId, StudentPatch};

/// 创建学生命令
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub student_id: StudentId,
    pub student: Student,
}

/// 部分更新学生命令
#[derive(Debug, Clone)]
pub struct UpdateStudent {
    pub student_id: StudentId,
    pub patch: StudentPatch,
}

/// 删除学生命令
#[derive(Debug, Clone)]
pub struct DeleteStudent {
    pub student_id: StudentId,
}
