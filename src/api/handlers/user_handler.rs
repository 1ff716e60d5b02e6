//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::extractors::{first_validation_message, ApiJson, ValidatedJson};
use crate::api::AppState;
use crate::config::{is_valid_email, MIN_AGE};
use crate::domain::{User, UserDraft};
use crate::errors::{AppError, AppResult};

/// User create/update request.
///
/// All fields are optional at the deserialization layer so that missing
/// values surface as validation messages rather than decode failures.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    /// Display name, unique case-insensitively
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Age in years, 18 or older
    #[schema(example = 30, minimum = 18)]
    pub age: Option<i32>,
    /// Email address
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

impl Validate for UserPayload {
    // Checks run in a fixed order and stop at the first failure, so the
    // reported message always names the first offending field.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let username_ok = self
            .username
            .as_deref()
            .map(str::trim)
            .is_some_and(|u| !u.is_empty());
        if !username_ok {
            return Err(single_error(
                "username",
                "Username is required and must be a non-empty string",
            ));
        }

        if !self.age.is_some_and(|age| age >= MIN_AGE) {
            return Err(single_error(
                "age",
                "Age is required and must be at least 18",
            ));
        }

        let email_ok = self
            .email
            .as_deref()
            .map(str::trim)
            .is_some_and(is_valid_email);
        if !email_ok {
            return Err(single_error(
                "email",
                "Valid email is required (format: name@domain.com)",
            ));
        }

        Ok(())
    }
}

impl UserPayload {
    /// Convert into trimmed store fields. Only call after `validate` passed.
    fn into_draft(self) -> UserDraft {
        UserDraft {
            username: self.username.unwrap_or_default().trim().to_string(),
            age: self.age.unwrap_or_default(),
            email: self.email.unwrap_or_default().trim().to_string(),
        }
    }
}

/// Build a single-entry error set carrying the given message
fn single_error(field: &'static str, message: &'static str) -> ValidationErrors {
    let mut error = ValidationError::new(field);
    error.message = Some(message.into());
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact age to filter by
    pub age: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/username/:username", get(get_user_by_username))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.store.create(payload.into_draft()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List users, sorted by username
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("age" = Option<String>, Query, description = "Return only users of exactly this age")
    ),
    responses(
        (status = 200, description = "Users in case-insensitive username order", body = Vec<User>),
        (status = 400, description = "Age filter is not a number")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<User>>> {
    let age = parse_age_filter(query.age.as_deref())?;
    let users = state.store.list(age).await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = state.store.get_by_id(id).await?;
    Ok(Json(user))
}

/// Get user by username (case-insensitive)
#[utoipa::path(
    get,
    path = "/users/username/{username}",
    tag = "Users",
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.store.get_by_username(&username).await?;
    Ok(Json(user))
}

/// Replace a user's fields
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid id or validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> AppResult<Json<User>> {
    // An unparsable id takes precedence over field validation
    let id = parse_user_id(&id)?;

    payload
        .validate()
        .map_err(|e| AppError::validation(first_validation_message(&e)))?;

    let user = state.store.update(id, payload.into_draft()).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_user_id(&id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Parse a path id, rejecting anything that is not a whole integer
fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::bad_request("Invalid user ID"))
}

/// Parse the age query filter; absent or empty means no filter
fn parse_age_filter(raw: Option<&str>) -> AppResult<Option<i32>> {
    match raw {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| AppError::bad_request("Age filter must be a number")),
    }
}
