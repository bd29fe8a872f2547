use anyhow::Context;
use bookstore_app::modules;
use bookstore_kernel::settings::Settings;
use bookstore_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;
    bookstore_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url,
        "bookstore bootstrap starting"
    );

    let pool = bookstore_db::create_pool(&settings.database)
        .await
        .context("failed to open the database pool")?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &pool);

    let ctx = InitCtx {
        settings: &settings,
        pool: &pool,
    };
    registry
        .run_migrations(&ctx)
        .await
        .context("failed to run migrations")?;
    registry
        .init_modules(&ctx)
        .await
        .context("failed to initialize modules")?;

    bookstore_http::start_server(&registry, &settings).await
}
