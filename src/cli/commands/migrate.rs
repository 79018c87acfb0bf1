use crate::config;
use crate::database::PostgresStore;

pub async fn handle() -> anyhow::Result<()> {
    let store = PostgresStore::connect(&config::config().database).await?;
    store.migrate().await?;
    store.close().await;
    println!("Schema is up to date");
    Ok(())
}
