use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::TeacherData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::teacher::models::TeacherId;
use crate::teacher::ports::TeacherServicePort;

pub async fn get_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<ApiSuccess<TeacherData>, ApiError> {
    let teacher_id = TeacherId::from_string(&teacher_id)?;

    state
        .teacher_service
        .get_teacher(teacher_id)
        .await
        .map_err(ApiError::from)
        .map(|ref teacher| ApiSuccess::new(StatusCode::OK, teacher.into()))
}
