use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ErrorResponse, ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AccountResult;
use crate::models::{Account, CreateAccount, UpdateAccount};
use crate::repository::AccountRepository;
use crate::service::AccountService;

pub const TAG: &str = "Accounts";

/// OpenAPI documentation for the Accounts API
#[derive(OpenApi)]
#[openapi(
    paths(list_accounts, create_account, get_account, update_account, delete_account),
    components(
        schemas(Account, CreateAccount, UpdateAccount),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Account management endpoints")
    )
)]
pub struct ApiDoc;

/// Account routes, meant to be nested under `/accounts`
pub fn router<R: AccountRepository + 'static>(service: AccountService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .with_state(shared_service)
}

/// List all accounts
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<Account>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_accounts<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
) -> AccountResult<Json<Vec<Account>>> {
    let accounts = service.get_accounts().await?;
    Ok(Json(accounts))
}

/// Create an account
///
/// Names and email are trimmed and the email lower-cased before storing.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateAccount,
    responses(
        (status = 201, description = "Account created", body = Account),
        (status = 400, description = "Invalid input or email already in use", body = ErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_account<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateAccount>,
) -> AccountResult<impl IntoResponse> {
    let account = service.create_account(input).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Account ID (UUID)")
    ),
    responses(
        (status = 200, description = "Account found", body = Account),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_account<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
    Path(id): Path<String>,
) -> AccountResult<Json<Account>> {
    let account = service.get_account_by_id(&id).await?;
    Ok(Json(account))
}

/// Update an account
///
/// Only fields sent as strings are changed.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Account ID (UUID)")
    ),
    request_body = UpdateAccount,
    responses(
        (status = 200, description = "Account updated", body = Account),
        (status = 400, description = "Invalid input or email already in use", body = ErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_account<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateAccount>,
) -> AccountResult<Json<Account>> {
    let account = service.update_account(&id, input).await?;
    Ok(Json(account))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "Account ID (UUID)")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_account<R: AccountRepository>(
    State(service): State<Arc<AccountService<R>>>,
    Path(id): Path<String>,
) -> AccountResult<StatusCode> {
    service.delete_account(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
