mod pokemon;

use std::{error::Error, sync::Arc};

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    serve, Router,
};
use pokedex::{
    catalog::{CatalogSource, HttpCatalog},
    config::Settings,
    controller::Controller,
    headers::htmx_headers,
    signals::shutdown_signal,
    utils::configure_tracing,
};
use pokemon::{index, pokemon_detail, pokemon_list, pokemon_search};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings: Settings = Settings::from_env()?;

    // Configure logging
    configure_tracing(&settings.log_level);

    let catalog: HttpCatalog =
        HttpCatalog::new(settings.catalog_url.clone(), settings.fetch_timeout)?;
    let controller: Arc<Controller<HttpCatalog>> = Arc::new(Controller::new(catalog));

    // The list is fetched once up front so the first page already has it.
    let initial: Arc<Controller<HttpCatalog>> = Arc::clone(&controller);
    tokio::spawn(async move {
        initial.load_list("").await;
    });

    // Build application and listen to incoming requests.
    let allowed_origin: HeaderValue = HeaderValue::from_str(&settings.allowed_origin)?;
    let app: Router = build_app(controller, allowed_origin);
    let listener: TcpListener = TcpListener::bind(&settings.host).await?;
    info!("Listening on {}", settings.host);

    // Run the app.
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the application.
fn build_app<S>(controller: Arc<Controller<S>>, allowed_origin: HeaderValue) -> Router
where
    S: CatalogSource + 'static,
{
    Router::new()
        .route("/", get(index::<S>))
        .route("/pokemon/list", get(pokemon_list::<S>))
        .route("/pokemon/search", get(pokemon_search::<S>))
        .route("/pokemon/detail", get(pokemon_detail::<S>))
        .with_state(controller)
        .layer(
            // Axum recommends to use tower::ServiceBuilder to apply multiple middleware at once, instead of repeatadly calling layer.
            // https://docs.rs/axum/latest/axum/middleware/index.html#applying-multiple-middleware
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_methods([Method::GET])
                    .allow_origin(allowed_origin)
                    .allow_headers(htmx_headers()),
            ),
        )
}
