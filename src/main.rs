use std::sync::Arc;

use anyhow::Context;
use chrono::{Datelike, Local};
use serde_json::{Map, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use forgetmenots::account::accountmanagementservice::AccountManagementService;
use forgetmenots::account::credentialmanager::CredentialManager;
use forgetmenots::account::localidentityprovider::LocalIdentityProvider;
use forgetmenots::api::router::{create_router, AppState};
use forgetmenots::configuration::Settings;
use forgetmenots::engine::holidayengine::HolidayEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let prime_years = settings.cache.prime_years(Local::now().year());
    let engine =
        HolidayEngine::bundled(prime_years).context("failed to load bundled holiday data")?;
    info!(countries = engine.get_supported_countries().len(), "holiday engine ready");

    let credentials =
        CredentialManager::new(&settings.credentials.path, &settings.credentials.environment_key)
            .unwrap_or_else(|e| {
                warn!(error = %e, "no identity credentials; tokens will not survive a restart");
                CredentialManager::from_raw(Map::<String, Value>::new())
            });
    let identity_provider = Arc::new(LocalIdentityProvider::new(&credentials));
    let accounts = AccountManagementService::new(identity_provider);

    let app = create_router(AppState::new(Arc::new(engine), Arc::new(accounts)));

    let listener = tokio::net::TcpListener::bind(settings.server.address.as_str())
        .await
        .with_context(|| format!("failed to bind {}", settings.server.address))?;
    info!(address = %settings.server.address, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
