use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use super::errors::ApiError;
use super::AppState;
use crate::domain::{Item, ItemCreate, Order, OrderCreate, User, UserCreate};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserCreate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.user_client.create_user(body).await?))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.user_client.list_users().await?))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<ItemCreate>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.item_client.create_item(body).await?))
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.item_client.list_items().await?))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.item_client.get_item(id).await?))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<OrderCreate>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.order_client.create_order(body).await?))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.order_client.list_orders().await?))
}
