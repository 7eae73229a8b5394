use sea_orm_migration::prelude::*;

// Stock sea-orm-migration CLI (`up`, `down`, `status`, `fresh`, ...) over the
// hospital schema. Reads DATABASE_URL.
#[async_std::main]
async fn main() {
    cli::run_cli(migrations::Migrator).await;
}
