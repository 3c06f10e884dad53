//! Student HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{CreateStudent, DeleteStudent, UpdateStudent};
use crate::domain::{Student, StudentId, StudentPatch};
use crate::infrastructure::http::dto::MessageResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn student_id(path: Result<Path<i64>, PathRejection>) -> Result<StudentId, ApiError> {
    let Path(raw) = path.map_err(|e| ApiError::invalid_path("student_id", e))?;
    Ok(StudentId::new(raw))
}

/// 创建学生（ID 已存在时返回消息，不修改存储）
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let student_id = student_id(path)?;
    let Json(student) = payload?;

    let student = state
        .create_student_handler
        .handle(CreateStudent {
            student_id,
            student,
        })
        .await?;

    Ok(Json(student))
}

/// 部分更新学生
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentPatch>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let student_id = student_id(path)?;
    let Json(patch) = payload?;

    let student = state
        .update_student_handler
        .handle(UpdateStudent { student_id, patch })
        .await?;

    Ok(Json(student))
}

/// 删除学生
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let student_id = student_id(path)?;

    state
        .delete_student_handler
        .handle(DeleteStudent { student_id })
        .await?;

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
