pub mod books;
pub mod calculator;
pub mod converters;
pub mod health;
pub mod hello;
pub mod inventory;
pub mod json;
pub mod locations;
pub mod measurements;
mod rate_limit;
pub mod sensors;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use rate_limit::ClientIpKeyExtractor;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        sensors::list_sensors,
        sensors::create_sensor,
        sensors::get_sensor,
        sensors::update_sensor,
        sensors::delete_sensor,
        measurements::list_measurements,
        measurements::create_measurement,
        measurements::get_measurement,
        measurements::delete_measurement,
        locations::create_location,
        locations::get_location,
        inventory::add_product,
        inventory::add_to_storage,
        inventory::get_inventory,
        books::list_books,
        books::create_book,
        books::get_book,
        books::delete_book,
        calculator::index,
        calculator::add,
        calculator::subtract,
        calculator::multiply,
        calculator::divide,
        calculator::trig,
        hello::greet,
        hello::greet_from_query,
    ),
    components(
        schemas(
            sensors::SensorDocument,
            sensors::SensorResponse,
            sensors::SensorListResponse,
            locations::LocationDocument,
            locations::LocationResponse,
            locations::LocationSummary,
            locations::LocationView,
            measurements::MeasurementDocument,
            measurements::MeasurementResponse,
            measurements::MeasurementSummary,
            measurements::MeasurementListResponse,
            inventory::ProductDocument,
            inventory::StorageDocument,
            inventory::InventoryEntry,
            books::BookForm,
            crate::services::books::Book,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "sensors", description = "Sensor catalog"),
        (name = "measurements", description = "Measurements recorded by a sensor"),
        (name = "locations", description = "Places sensors are installed at"),
        (name = "inventory", description = "Products and storage"),
        (name = "books", description = "In-memory book list"),
        (name = "calculator", description = "Arithmetic and trigonometry"),
        (name = "greeting", description = "Hello endpoints"),
    ),
    info(
        title = "Sensorhub API",
        description = "Sensor and measurement catalog with a few small companion apps",
        version = "0.1.0"
    )
)]
struct ApiDoc;

/// The sensor catalog, mounted under `/api`.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sensors/",
            get(sensors::list_sensors).post(sensors::create_sensor),
        )
        .route(
            "/sensors/{sensor}/",
            get(sensors::get_sensor)
                .put(sensors::update_sensor)
                .delete(sensors::delete_sensor),
        )
        .route(
            "/sensors/{sensor}/measurements/",
            get(measurements::list_measurements).post(measurements::create_measurement),
        )
        .route(
            "/sensors/{sensor}/measurements/{measurement}/",
            get(measurements::get_measurement).delete(measurements::delete_measurement),
        )
        .route("/locations/", post(locations::create_location))
        .route("/locations/{location}/", get(locations::get_location))
}

fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/products/add/", post(inventory::add_product))
        .route("/storage/{handle}/add/", post(inventory::add_to_storage))
        .route("/storage/", get(inventory::get_inventory))
}

fn example_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(calculator::index))
        .route("/add/{a}/{b}", get(calculator::add))
        .route("/sub/{a}/{b}", get(calculator::subtract))
        .route("/mul/{a}/{b}", get(calculator::multiply))
        .route("/div/{a}/{b}", get(calculator::divide))
        .route("/trig/{func}/", get(calculator::trig))
        .route("/hello/", get(hello::greet_from_query))
        .route("/hello/{name}/", get(hello::greet))
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/{id}",
            get(books::get_book).delete(books::delete_book),
        )
}

pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    let api_routes = if config.disable_rate_limiting {
        tracing::warn!("Rate limiting DISABLED");
        catalog_routes()
    } else {
        tracing::info!(
            rate = %format!("{}/s burst {}", config.rate_limit_per_second, config.rate_limit_burst),
            "Rate limiting configured"
        );

        let limiter = GovernorConfigBuilder::default()
            .key_extractor(ClientIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .expect("Failed to create rate limiter");

        catalog_routes().layer(GovernorLayer {
            config: Arc::new(limiter),
        })
    };

    // Health check routes (NO rate limiting)
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .nest("/api", api_routes)
        .merge(inventory_routes())
        .merge(example_routes())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .merge(health_routes)
        .merge(docs_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
