//! Order item CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{
    CreateOrderItem, OrderItemInput, OrderItemService, PatchOrderItem, ProductService,
    ReplaceOrderItem, ResolvedOrderItem,
};
use serde::Serialize;
use store::{OrderItemId, Store};

use super::parse_id;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: Store> {
    pub order_items: OrderItemService<S>,
    pub products: ProductService<S>,
}

impl<S: Store> AppState<S> {
    /// Builds services for both resources over one store.
    pub fn new(store: S) -> Self {
        Self {
            order_items: OrderItemService::new(store.clone()),
            products: ProductService::new(store),
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /orderitem — list all order items with products resolved.
#[tracing::instrument(skip(state))]
pub async fn list<S: Store>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<ResolvedOrderItem>>, ApiError> {
    Ok(Json(state.order_items.list().await?))
}

/// POST /orderitem — create an order item.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<OrderItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ResolvedOrderItem>), ApiError> {
    let Json(input) = payload?;
    let cmd = CreateOrderItem::from_input(&input)?;

    let item = state.order_items.create(cmd).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /orderitem/{id} — load one order item.
#[tracing::instrument(skip(state))]
pub async fn get<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<ResolvedOrderItem>, ApiError> {
    let id = parse_order_item_id(&id)?;
    Ok(Json(state.order_items.get(id).await?))
}

/// PUT /orderitem/{id} — replace every field of an order item.
#[tracing::instrument(skip(state, payload))]
pub async fn replace<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<OrderItemInput>, JsonRejection>,
) -> Result<Json<ResolvedOrderItem>, ApiError> {
    let id = parse_order_item_id(&id)?;
    let Json(input) = payload?;
    let cmd = ReplaceOrderItem::from_input(id, &input)?;

    Ok(Json(state.order_items.replace(cmd).await?))
}

/// PATCH /orderitem/{id} — overwrite the supplied fields of an order item.
#[tracing::instrument(skip(state, payload))]
pub async fn patch<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<OrderItemInput>, JsonRejection>,
) -> Result<Json<ResolvedOrderItem>, ApiError> {
    let id = parse_order_item_id(&id)?;
    let Json(input) = payload?;
    let cmd = PatchOrderItem::from_input(id, &input)?;

    Ok(Json(state.order_items.patch(cmd).await?))
}

/// DELETE /orderitem/{id} — delete an order item.
#[tracing::instrument(skip(state))]
pub async fn delete<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_order_item_id(&id)?;
    state.order_items.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "OrderItem deleted successfully",
    }))
}

fn parse_order_item_id(id: &str) -> Result<OrderItemId, ApiError> {
    Ok(parse_id("order item", id)?)
}
