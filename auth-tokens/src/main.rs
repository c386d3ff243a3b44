use std::error::Error;
use std::sync::Arc;

use auth_tokens::app_state::AppState;
use auth_tokens::migrations;
use auth_tokens::services::{
    Argon2Hasher, AuthService, RedisRevocationStore, RedisService, SqlRefreshStore, SqlUserStore,
    TokenService,
};
use auth_tokens::utils::{Clock, Config, SystemClock};
use auth_tokens::{get_db_pool, Application};

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = run().await {
        log::error!("auth-tokens failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Arc::new(Config::from_env()?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let db_client = get_db_pool(config.database_url()).await?;
    migrations::up(&db_client).await?;
    log::info!("database migrations applied");

    let redis = RedisService::connect(config.redis_host(), config.redis_database()).await?;

    let user_store = Arc::new(SqlUserStore::new(db_client.clone()));
    let token_service = TokenService::new(
        &config,
        clock.clone(),
        Arc::new(SqlRefreshStore::new(db_client)),
        Arc::new(RedisRevocationStore::new(redis)),
        user_store.clone(),
    );
    let auth_service = AuthService::new(
        &config,
        clock,
        user_store,
        Arc::new(Argon2Hasher),
        token_service,
    );

    let app_state = AppState::new(Arc::new(auth_service), config.clone());
    let app = Application::build(app_state, config.app_address()).await?;
    app.run().await?;
    Ok(())
}
