use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, State},
    routing::post,
};
use http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::generator::{EmailRequest, ReplyGenerator};

type SharedState = Arc<AppState>;

pub struct AppState {
    generator: ReplyGenerator,
}

impl AppState {
    pub fn new(generator: ReplyGenerator) -> Self {
        Self { generator }
    }
}

// Returns the generated reply as a plain text body. Upstream failures
// map to a 500 with a generic message; the cause goes to the log.
async fn generate_reply(
    State(state): State<SharedState>,
    Json(payload): Json<EmailRequest>,
) -> Result<String, (StatusCode, String)> {
    match state.generator.generate(&payload).await {
        Ok(reply) => Ok(reply),
        Err(err) => {
            tracing::error!("Reply generation failed: {:#}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate email reply".to_string(),
            ))
        }
    }
}

pub fn app(app_state: AppState) -> Router {
    let shared_state = SharedState::new(app_state);
    // The endpoint is called cross-origin from a browser frontend
    let cors = CorsLayer::permissive();

    Router::new()
        // Generate a reply for an email
        .route("/api/email/generate", post(generate_reply))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::clone(&shared_state))
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format! {
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                }
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let generator = ReplyGenerator::new(reqwest::Client::new(), config);
    let app = app(AppState::new(generator));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .unwrap();

    tracing::debug!(
        "Server started. Listening on {}",
        listener.local_addr().unwrap()
    );

    axum::serve(listener, app).await.unwrap();
}
