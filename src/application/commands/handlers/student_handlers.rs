//! Student Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateStudent, DeleteStudent, UpdateStudent};
use crate::application::error::ApplicationError;
use crate::application::ports::StudentStorePort;
use crate::domain::Student;

// ============================================================================
// CreateStudent
// ============================================================================

/// CreateStudent Handler
pub struct CreateStudentHandler {
    student_store: Arc<dyn StudentStorePort>,
}

impl CreateStudentHandler {
    pub fn new(student_store: Arc<dyn StudentStorePort>) -> Self {
        Self { student_store }
    }

    pub async fn handle(&self, command: CreateStudent) -> Result<Student, ApplicationError> {
        let student_id = command.student_id;

        self.student_store
            .insert(student_id, command.student.clone())?;

        tracing::info!(
            student_id = %student_id,
            name = %command.student.name,
            "Student created"
        );

        Ok(command.student)
    }
}

// ============================================================================
// UpdateStudent
// ============================================================================

/// UpdateStudent Handler
pub struct UpdateStudentHandler {
    student_store: Arc<dyn StudentStorePort>,
}

impl UpdateStudentHandler {
    pub fn new(student_store: Arc<dyn StudentStorePort>) -> Self {
        Self { student_store }
    }

    pub async fn handle(&self, command: UpdateStudent) -> Result<Student, ApplicationError> {
        let student_id = command.student_id;
        let student = self.student_store.update(student_id, command.patch)?;

        tracing::info!(student_id = %student_id, "Student updated");

        Ok(student)
    }
}

// ============================================================================
// DeleteStudent
// ============================================================================

/// DeleteStudent Handler
pub struct DeleteStudentHandler {
    student_store: Arc<dyn StudentStorePort>,
}

impl DeleteStudentHandler {
    pub fn new(student_store: Arc<dyn StudentStorePort>) -> Self {
        Self { student_store }
    }

    pub async fn handle(&self, command: DeleteStudent) -> Result<(), ApplicationError> {
        let student_id = command.student_id;
        let student = self.student_store.remove(student_id)?;

        tracing::info!(
            student_id = %student_id,
            name = %student.name,
            "Student deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StudentId, StudentPatch};
    use crate::infrastructure::memory::InMemoryStudentStore;

    fn alice() -> Student {
        Student {
            name: "Alice".to_string(),
            age: 21,
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_student_is_rejected() {
        let store = Arc::new(InMemoryStudentStore::new());
        let handler = CreateStudentHandler::new(store.clone());
        let student_id = StudentId::new(1);

        handler
            .handle(CreateStudent {
                student_id,
                student: alice(),
            })
            .await
            .unwrap();

        let result = handler
            .handle(CreateStudent {
                student_id,
                student: Student {
                    name: "Mallory".to_string(),
                    age: 99,
                },
            })
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::AlreadyExists { id: 1, .. })
        ));
        assert_eq!(store.get(student_id), Some(alice()));
    }

    #[tokio::test]
    async fn test_update_missing_student_is_not_found() {
        let store = Arc::new(InMemoryStudentStore::new());
        let handler = UpdateStudentHandler::new(store);

        let result = handler
            .handle(UpdateStudent {
                student_id: StudentId::new(5),
                patch: StudentPatch::default(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { id: 5, .. })));
    }

    #[tokio::test]
    async fn test_delete_student() {
        let store = Arc::new(InMemoryStudentStore::new());
        store.insert(StudentId::new(3), alice()).unwrap();
        let handler = DeleteStudentHandler::new(store.clone());

        handler
            .handle(DeleteStudent {
                student_id: StudentId::new(3),
            })
            .await
            .unwrap();
        assert_eq!(store.len(), 0);

        let result = handler
            .handle(DeleteStudent {
                student_id: StudentId::new(3),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
