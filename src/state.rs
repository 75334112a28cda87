use sqlx::PgPool;

use lectern_config::{CorsConfig, JwtConfig};
use lectern_db::init_db_pool;

use crate::middleware::access::AccessControl;
use crate::router::access_policy;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub access: AccessControl,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;

    sqlx::migrate!()
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    let jwt_config = JwtConfig::from_env();
    let access = AccessControl::new(access_policy(), jwt_config.clone());

    AppState {
        db,
        jwt_config,
        cors_config: CorsConfig::from_env(),
        access,
    }
}
