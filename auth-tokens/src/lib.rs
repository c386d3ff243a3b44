use std::future::{Future, IntoFuture};
use std::{error::Error, pin::Pin};

use app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use routes::{ping, refresh_token, sign_in, sign_out, sign_up, user_profile};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use welds::connections::any::AnyClient;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod migrations;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/refresh-token", post(refresh_token))
        .route("/user-profile", get(user_profile))
        .route("/sign-out", post(sign_out));

    Router::new()
        .route("/ping", get(ping))
        .nest("/api/v1", api)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    /// Bind `address` and prepare the server. Port 0 picks an ephemeral port, and
    /// `address` then reports the one actually bound.
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);
        let listener = TcpListener::bind(address).await?;
        let local = listener.local_addr()?;

        let http_future = axum::serve(listener, router).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{local}"),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}

pub async fn get_db_pool(url: &str) -> Result<AnyClient, welds::connections::Error> {
    welds::connections::connect(url).await
}
