use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::common::AppState;
use crate::entity::{products, storage_items};
use crate::error::{AppError, AppResult};
use crate::routes::json::JsonDocument;
use crate::validation::{self, SchemaError};

use super::types::{InventoryEntry, ProductDocument, StorageDocument};

const HANDLE_TAKEN: &str = "Handle already exists";

/// Keep the inventory's own wording for the type errors it used to report.
fn inventory_error(err: AppError) -> AppError {
    if let AppError::Validation(SchemaError::WrongType { field, .. }) = &err {
        match *field {
            "weight" | "price" => {
                return AppError::BadRequest("Weight and price must be numbers".to_string());
            }
            "qty" => return AppError::BadRequest("Qty must be an integer".to_string()),
            _ => {}
        }
    }
    err
}

/// Add a product
#[utoipa::path(
    post,
    path = "/products/add/",
    request_body = ProductDocument,
    responses(
        (status = 201, description = "Product added"),
        (status = 400, description = "Missing field, or weight/price not numbers"),
        (status = 409, description = "Handle already exists"),
        (status = 415, description = "Body is not JSON"),
    ),
    tag = "inventory"
)]
pub async fn add_product(
    State(state): State<AppState>,
    document: JsonDocument,
) -> AppResult<(StatusCode, &'static str)> {
    let input: ProductDocument = document
        .parse(&validation::PRODUCT)
        .map_err(inventory_error)?;

    let existing = products::Entity::find()
        .filter(products::Column::Handle.eq(input.handle.as_str()))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(HANDLE_TAKEN.to_string()));
    }

    let product = products::ActiveModel {
        handle: Set(input.handle),
        weight: Set(input.weight),
        price: Set(input.price),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| AppError::from_write(e, |_| HANDLE_TAKEN.to_string()))?;

    tracing::info!(product_id = product.id, handle = %product.handle, "Product added");

    Ok((StatusCode::CREATED, "Success"))
}

/// Put a quantity of a product into storage
#[utoipa::path(
    post,
    path = "/storage/{handle}/add/",
    params(
        ("handle" = String, Path, description = "Product handle"),
    ),
    request_body = StorageDocument,
    responses(
        (status = 201, description = "Storage row added"),
        (status = 400, description = "Missing field, or qty not an integer"),
        (status = 404, description = "Product not found"),
        (status = 415, description = "Body is not JSON"),
    ),
    tag = "inventory"
)]
pub async fn add_to_storage(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, &'static str)> {
    // The product is resolved before the body is looked at.
    let product = products::Entity::find()
        .filter(products::Column::Handle.eq(handle.as_str()))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let input: StorageDocument = JsonDocument::decode(&headers, &body)?
        .parse(&validation::STORAGE_ITEM)
        .map_err(inventory_error)?;

    let item = storage_items::ActiveModel {
        qty: Set(input.qty),
        product_id: Set(Some(product.id)),
        location: Set(input.location),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    tracing::info!(
        handle = %product.handle,
        location = %item.location,
        qty = item.qty,
        "Stock added"
    );

    Ok((StatusCode::CREATED, "Success"))
}

/// List every product with the storage locations holding it
#[utoipa::path(
    get,
    path = "/storage/",
    responses(
        (status = 200, description = "Inventory retrieved successfully", body = Vec<InventoryEntry>),
    ),
    tag = "inventory"
)]
pub async fn get_inventory(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryEntry>>> {
    let rows = products::Entity::find()
        .find_with_related(storage_items::Entity)
        .order_by_asc(products::Column::Id)
        .order_by_asc(storage_items::Column::Id)
        .all(&state.db)
        .await?;

    let response = rows
        .into_iter()
        .map(|(p, items)| InventoryEntry {
            handle: p.handle,
            weight: p.weight,
            price: p.price,
            inventory: items.into_iter().map(|i| (i.location, i.qty)).collect(),
        })
        .collect();

    Ok(Json(response))
}
