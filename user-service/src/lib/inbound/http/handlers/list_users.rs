use axum::extract::State;
use axum::http::StatusCode;

use super::get_profile::ProfileResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users<US: UserServicePort>(
    State(state): State<AppState<US>>,
) -> Result<ApiSuccess<Vec<ProfileResponseData>>, ApiError> {
    state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                users.iter().map(ProfileResponseData::from).collect(),
            )
        })
}
