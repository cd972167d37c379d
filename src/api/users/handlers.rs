use crate::api::extract::{ApiJson, ApiPath};
use crate::api::models::*;
use crate::storage::{NewUser, User};
use axum::{Json, extract::State, http::StatusCode};
use tracing::info;

#[utoipa::path(
    get,
    path = "/api/utilisateurs",
    responses((status = 200, description = "All users", body = [User])),
    tag = "Utilisateurs"
)]
pub async fn list_users_handler(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.read().await.list().to_vec())
}

#[utoipa::path(
    get,
    path = "/api/utilisateurs/{id}",
    params(
        ("id" = u64, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "Unknown user", body = ErrorResponse),
    ),
    tag = "Utilisateurs"
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<User>, AppError> {
    let users = state.users.read().await;
    let user = users.get(id).cloned().ok_or_else(|| user_not_found(id))?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/utilisateurs",
    request_body = UserCreate,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing field", body = ErrorResponse),
    ),
    tag = "Utilisateurs"
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<UserCreate>,
) -> (StatusCode, Json<User>) {
    let user = state.users.write().await.create(NewUser {
        nom: request.nom,
        email: request.email,
    });

    info!(user_id = user.id, "User created");

    (StatusCode::CREATED, Json(user))
}

#[utoipa::path(
    put,
    path = "/api/utilisateurs/{id}",
    params(
        ("id" = u64, Path, description = "User id"),
    ),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "Unknown user", body = ErrorResponse),
    ),
    tag = "Utilisateurs"
)]
pub async fn update_user_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<UserUpdate>,
) -> Result<Json<User>, AppError> {
    let user = state
        .users
        .write()
        .await
        .update(id, request.into())
        .ok_or_else(|| user_not_found(id))?;

    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/utilisateurs/{id}",
    params(
        ("id" = u64, Path, description = "User id"),
    ),
    responses((status = 200, description = "Deleted, or already absent", body = MessageResponse)),
    tag = "Utilisateurs"
)]
pub async fn delete_user_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Json<MessageResponse> {
    state.users.write().await.delete(id);

    info!(user_id = id, "User deleted");

    Json(MessageResponse {
        message: "Utilisateur supprimé".to_string(),
    })
}
