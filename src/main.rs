use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use masjid_api::{
    config::Config,
    models::user::CreateUserRequest,
    routes,
    store::{seed, ContentStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store = ContentStore::in_memory();
    if config.seed_content {
        seed::seed(&store).await?;
    } else {
        info!("SEED_CONTENT disabled, starting with empty collections");
    }

    match (&config.admin_username, &config.admin_password) {
        (Some(username), Some(password)) => {
            let admin = store
                .users
                .create(&CreateUserRequest {
                    username: username.clone(),
                    password: password.clone(),
                })
                .await?;
            info!(id = admin.id, "Administrator account {} created", admin.username);
        }
        (Some(_), None) | (None, Some(_)) => {
            warn!("ADMIN_USERNAME and ADMIN_PASSWORD must both be set; no administrator created");
        }
        (None, None) => {}
    }

    let addr = config.bind_addr();
    let app = routes::router(AppState::new(store, config));

    info!("Masjid API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
