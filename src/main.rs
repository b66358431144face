use causehub::{create_app, db};
use dotenvy::dotenv;
use std::env;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env (if present) so DATABASE_URL / PORT from file are visible
    let _ = dotenv();

    let conn = match db::connect().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::error!(?err, "failed to connect to database");
            std::process::exit(1);
        }
    };
    if let Err(err) = db::init_db(&conn).await {
        tracing::error!(?err, "failed to initialise database");
        std::process::exit(1);
    }

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(9000);

    let app = create_app(conn);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap();
    tracing::info!("Server running on http://localhost:{}", port);
    axum::serve(listener, app).await.unwrap();
}
