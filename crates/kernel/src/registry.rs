use anyhow::Context;
use std::sync::Arc;

use crate::module::{InitCtx, Module};

/// Module registry holding every resource module in registration order.
/// Registration order is also migration and mount order, so modules whose
/// tables reference another module's tables must be registered after it.
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module with the registry
    pub fn register(&mut self, module: Arc<dyn Module>) {
        self.modules.push(module);
    }

    /// Get all registered modules
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&Arc<dyn Module>> {
        self.modules.iter().find(|module| module.name() == name)
    }

    /// Apply every pending module migration in registration order.
    /// Applied migrations are tracked in `schema_migrations`, keyed by
    /// `{module_name}/{migration_id}`, so re-running is a no-op.
    pub async fn run_migrations(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        sqlx::query("CREATE TABLE IF NOT EXISTS schema_migrations (id TEXT PRIMARY KEY)")
            .execute(ctx.pool)
            .await
            .context("failed to create the schema_migrations table")?;

        for module in &self.modules {
            for migration in module.migrations() {
                let key = format!("{}/{}", module.name(), migration.id);

                let applied: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations WHERE id = ?")
                        .bind(&key)
                        .fetch_one(ctx.pool)
                        .await?;
                if applied > 0 {
                    continue;
                }

                sqlx::query(migration.up)
                    .execute(ctx.pool)
                    .await
                    .with_context(|| format!("failed to apply migration '{key}'"))?;
                sqlx::query("INSERT INTO schema_migrations (id) VALUES (?)")
                    .bind(&key)
                    .execute(ctx.pool)
                    .await?;

                tracing::info!(
                    module = module.name(),
                    migration = migration.id,
                    "migration applied"
                );
            }
        }

        Ok(())
    }

    /// Run every module's init hook in registration order
    pub async fn init_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
