//! HTTP surface: axum router over the record clients.
//!
//! - `routes.rs`: one handler per endpoint
//! - `errors.rs`: client errors mapped to status codes and `{"detail": ...}` bodies

use axum::routing::get;
use axum::Router;

use crate::app_system::RecordSystem;
use crate::clients::{ItemClient, OrderClient, UserClient};

pub mod errors;
pub mod routes;

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub user_client: UserClient,
    pub item_client: ItemClient,
    pub order_client: OrderClient,
}

impl From<&RecordSystem> for AppState {
    fn from(system: &RecordSystem) -> Self {
        Self {
            user_client: system.user_client.clone(),
            item_client: system.item_client.clone(),
            order_client: system.order_client.clone(),
        }
    }
}

/// Build the full HTTP router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/users", get(routes::list_users).post(routes::create_user))
        .route("/items", get(routes::list_items).post(routes::create_item))
        .route("/items/{id}", get(routes::get_item))
        .route("/orders", get(routes::list_orders).post(routes::create_order))
        .with_state(state)
}
