mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Initialize identity provider client (non-fatal: token sign-in disabled
    // if config missing; guest sessions still work).
    let identity = match services::identity::IdentityClient::from_env() {
        Ok(client) => {
            tracing::info!("identity provider client initialized");
            Some(Arc::new(client) as Arc<dyn services::identity::IdentityVerifier>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "identity provider not configured — guest sign-in only");
            None
        }
    };

    let state = state::AppState::new(pool, identity);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "atrium listening");
    axum::serve(listener, app).await.expect("server failed");
}
