use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, Method},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Config;
use crate::error::GenerateError;
use crate::provider::types::{GenerationRequest, Recipe};
use crate::provider::{self, RecipeGenerator};

/// Shared handler state: the generator selected at startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn RecipeGenerator>,
}

/// Success envelope of the generation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeEnvelope {
    pub recipe: Recipe,
}

/// Error envelope of the generation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/generate-recipe", post(generate_recipe))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState {
        generator: provider::from_config(config),
    };
    let app = router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("recipe generation service running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutting down");
    Ok(())
}

/// POST /api/generate-recipe. Validates presence of `ingredients`, delegates
/// to the configured provider, and wraps the outcome in an envelope. Failure
/// of one request never affects subsequent ones.
async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<RecipeEnvelope>, GenerateError> {
    if request.ingredients.trim().is_empty() {
        return Err(GenerateError::MissingIngredients);
    }

    info!(provider = state.generator.name(), "generating recipe");
    let recipe = state.generator.generate(&request).await?;
    Ok(Json(RecipeEnvelope { recipe }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
