//! ID Generator Form Service Entry Point
//!
//! Loads configuration, installs logging and metrics, and starts the HTTP server.

use idgen_form::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
