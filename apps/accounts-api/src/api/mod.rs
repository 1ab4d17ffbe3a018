use axum::Router;
use domain_accounts::{AccountService, PgAccountRepository};
use sea_orm::DatabaseConnection;

pub mod health;

pub use health::{ready_router, root_router};

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(db: &DatabaseConnection) -> Router {
    let accounts = AccountService::new(PgAccountRepository::new(db.clone()));

    Router::new().nest("/accounts", domain_accounts::handlers::router(accounts))
}
