mod cli;
mod demo;
mod file_store;
mod infra;
mod routes;
mod server;

use rg16::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
