//! Database layer: pool, migrations, and the PostgreSQL credential store.

mod pool;
mod postgres;

pub use pool::{create_pool, run_migrations, DbPool};
pub use postgres::PgStore;
