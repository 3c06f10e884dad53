//! In-Memory Student Store Implementation

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{StoreError, StudentStorePort};
use crate::domain::{Student, StudentId, StudentPatch};

const RESOURCE: &str = "Student";

/// 内存学生存储
pub struct InMemoryStudentStore {
    students: DashMap<StudentId, Student>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStorePort for InMemoryStudentStore {
    fn insert(&self, id: StudentId, student: Student) -> Result<(), StoreError> {
        match self.students.entry(id) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists {
                resource_type: RESOURCE,
                id: id.value(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(student);
                tracing::debug!(student_id = %id, "Student inserted");
                Ok(())
            }
        }
    }

    fn get(&self, id: StudentId) -> Option<Student> {
        self.students.get(&id).map(|s| s.clone())
    }

    fn update(&self, id: StudentId, patch: StudentPatch) -> Result<Student, StoreError> {
        let mut student = self
            .students
            .get_mut(&id)
            .ok_or(StoreError::NotFound {
                resource_type: RESOURCE,
                id: id.value(),
            })?;
        student.apply(patch);
        tracing::debug!(student_id = %id, "Student patched");
        Ok(student.clone())
    }

    fn remove(&self, id: StudentId) -> Result<Student, StoreError> {
        self.students
            .remove(&id)
            .map(|(_, student)| student)
            .ok_or(StoreError::NotFound {
                resource_type: RESOURCE,
                id: id.value(),
            })
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}
