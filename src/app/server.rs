use crate::adapters::http::HttpUpstream;
use crate::config::seed::load_seed;
use crate::core::resolver::CharacterResolver;
use crate::core::schema::{build_schema, StarWarsSchema};
use crate::core::store::CharacterStore;
use crate::domain::ports::{ConfigProvider, UpstreamProvider};
use crate::utils::error::{GraphError, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::Html;
use axum::routing::{get, post_service};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Seeds the store and wires the resolver over the given upstream.
pub fn build_with_upstream<C: ConfigProvider + ?Sized>(
    config: &C,
    upstream: Arc<dyn UpstreamProvider>,
) -> Result<StarWarsSchema> {
    let store = Arc::new(CharacterStore::new(load_seed(config.seed_file())?));
    let resolver = CharacterResolver::new(store, upstream, config.concurrent_requests());
    Ok(build_schema(resolver))
}

pub fn build_from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<StarWarsSchema> {
    let upstream = HttpUpstream::from_config(config)?;
    build_with_upstream(config, Arc::new(upstream))
}

/// Router serving the schema at `graphql_path`.
///
/// POST executes GraphQL requests (JSON bodies). GET serves GraphiQL when
/// enabled. Cross-origin requests are allowed from anywhere.
pub fn app(schema: StarWarsSchema, graphql_path: &str, graphiql: bool) -> Router {
    let route = if graphiql {
        let endpoint = graphql_path.to_string();
        get(move || {
            let endpoint = endpoint.clone();
            async move { Html(GraphiQLSource::build().endpoint(&endpoint).finish()) }
        })
        .post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };

    Router::new()
        .route(graphql_path, route)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve<C: ConfigProvider + ?Sized>(config: &C, schema: StarWarsSchema) -> Result<()> {
    let addr = format!("{}:{}", config.host(), config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GraphError::ServerError {
            message: format!("Failed to bind {}: {}", addr, e),
        })?;

    tracing::info!(
        "Listening on http://{}{}",
        listener.local_addr()?,
        config.graphql_path()
    );

    axum::serve(
        listener,
        app(schema, config.graphql_path(), config.graphiql_enabled()),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
