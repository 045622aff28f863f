use crate::{api, SharedState};
use axum::{http::StatusCode, response::IntoResponse, routing::any, Router};
use sqlx::AnyPool;
use std::net::TcpListener;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The main application object
pub struct App {
    shared_state: SharedState,
}

impl App {
    /// Create a new application object around an already connected database pool
    pub fn new(db: AnyPool) -> Self {
        Self {
            shared_state: SharedState { db },
        }
    }

    /// Both endpoints answer every HTTP method
    pub fn router(&self) -> Router {
        Router::<_>::new()
            .route("/current-time", any(api::time_srv::current_time))
            .route("/logs", any(api::logs::logs))
            .with_state(self.shared_state.clone())
            .fallback(unknown_route)
            .layer(
                TraceLayer::new_for_http()
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
    }

    /// Start a server and serve the application
    ///
    /// # Arguments
    /// * `address` - The address to bind to
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if binding or serving failed
    pub async fn serve(self, address: &str) -> Result<(), std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(address)?;

        tracing::info!("Listening on: http://{}", address);

        axum_server::from_tcp(listener)
            .serve(router.into_make_service())
            .await?;

        Ok(())
    }
}

async fn unknown_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found\n")
}
