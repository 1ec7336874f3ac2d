use axum::extract::State;
use axum::http::StatusCode;

use super::TeacherData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::teacher::ports::TeacherServicePort;

pub async fn list_teachers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TeacherData>>, ApiError> {
    state
        .teacher_service
        .find_all()
        .await
        .map_err(ApiError::from)
        .map(|teachers| {
            ApiSuccess::new(
                StatusCode::OK,
                teachers.iter().map(TeacherData::from).collect(),
            )
        })
}
