use color_eyre::eyre::Result;
use dotenv::dotenv;
use salonbook_api::{ApiState, config::ApiConfig};
use salonbook_db::{create_pool, schema::initialize_database};
use salonbook_mailer::{build_mailer, config::MailerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    salonbook_api::init_tracing(config.log_level)?;

    let mailer_config = MailerConfig::from_env()?;
    let mailer = build_mailer(&mailer_config)?;

    let db_pool = create_pool(&config.database_url).await?;
    initialize_database(&db_pool).await?;

    let state = Arc::new(ApiState::postgres(
        db_pool,
        mailer,
        mailer_config.salon(),
        config.serialize_slot_writes,
    ));

    salonbook_api::start_server(config, state).await?;

    Ok(())
}
