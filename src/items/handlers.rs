use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::CurrentUser,
    authz::{authorize_item, Operation},
    error::ApiError,
    items::dto::{CreateItemRequest, ItemResponse, Pagination, UpdateItemRequest},
    items::repo::Item,
    state::AppState,
};

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/user/me", get(list_my_items))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Json(payload): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    // Owner is always the caller; the body cannot name someone else
    let item = Item::create(
        &state.db,
        identity.id,
        &payload.title,
        payload.description.as_deref(),
    )
    .await?;

    info!(item_id = %item.id, owner_id = %item.owner_id, "item created");
    Ok((StatusCode::CREATED, Json(item.into())))
}

#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = Item::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Item"))?;
    Ok(Json(item.into()))
}

#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = Item::list(&state.db, p.skip, p.limit).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn list_my_items(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = Item::list_by_owner(&state.db, identity.id, p.skip, p.limit).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state, payload))]
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    // Existence before ownership: probing an unknown id yields 404, not 403
    let item = Item::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Item"))?;
    authorize_item(&identity, Operation::Update, &item)?;

    let item = Item::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.is_active,
    )
    .await?
    .ok_or(ApiError::NotFound("Item"))?;

    info!(item_id = %item.id, "item updated");
    Ok(Json(item.into()))
}

#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let item = Item::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Item"))?;
    authorize_item(&identity, Operation::Delete, &item)?;

    if !Item::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("Item"));
    }

    info!(item_id = %id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
