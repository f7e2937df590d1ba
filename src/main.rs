// fetch syndicated tweet metadata for a list of ids and archive it as JSON

#[macro_use]
mod wrapper;
pub use wrapper::*;

use dotenv::dotenv;

mod domain;
mod infra;
mod initializer;
mod repository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    dotenv().ok();

    let ids_path = std::env::var("IDS_PATH").unwrap_or_else(|_| "server/ids.json".to_string());
    let archive_path = std::env::var("DB_PATH").unwrap_or_else(|_| "server/db.json".to_string());
    let failed_path =
        std::env::var("FAILED_IDS_PATH").unwrap_or_else(|_| "server/failed_ids.json".to_string());
    let concurrency = std::env::var("FETCH_CONCURRENCY")
        .ok()
        .and_then(|it| it.parse().ok())
        .unwrap_or(32);

    let app = initializer::new(initializer::Config {
        ids_path: ids_path.into(),
        archive_path: archive_path.into(),
        failed_path: failed_path.into(),
        concurrency,
    })
    .await;

    let report = app
        .services
        .batch
        .run()
        .await
        .map_err(|err| err.into_inner())?;

    log::info!(
        "archived {} tweets, {} ids failed",
        report.archive.len(),
        report.failed.len()
    );

    Ok(())
}
