pub mod books;
pub mod sellers;

pub(crate) mod validation;

use bookstore_kernel::ModuleRegistry;
use sqlx::SqlitePool;

/// Register every resource module. Sellers come first so the books
/// migration can reference the sellers table.
pub fn register_all(registry: &mut ModuleRegistry, pool: &SqlitePool) {
    registry.register(sellers::create_module(pool.clone()));
    registry.register(books::create_module(pool.clone()));
}
