use axum::extract::{Path, Query};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize, IntoParams)]
pub struct HelloQuery {
    pub name: Option<String>,
}

/// Greet the name given in the path
#[utoipa::path(
    get,
    path = "/hello/{name}/",
    params(("name" = String, Path)),
    responses((status = 200, description = "Greeting", body = String)),
    tag = "greeting"
)]
pub async fn greet(Path(name): Path<String>) -> String {
    format!("Hello {name}")
}

/// Greet the name given as a query parameter
#[utoipa::path(
    get,
    path = "/hello/",
    params(HelloQuery),
    responses(
        (status = 200, description = "Greeting", body = String),
        (status = 400, description = "Missing query parameter: name"),
    ),
    tag = "greeting"
)]
pub async fn greet_from_query(Query(query): Query<HelloQuery>) -> AppResult<String> {
    let name = query.name.ok_or(AppError::MissingParameter("name"))?;
    Ok(format!("Hello {name}"))
}
