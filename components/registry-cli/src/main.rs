mod cli;
mod data;
mod helpers;
mod instrumentation;
mod proto;
mod registry;
mod sources;
mod storage;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    instrumentation::tracing::init_tracing();
    instrumentation::tracing::init_panic_handler();

    // Main entrypoint simply delegates control to CLI layer.
    // The CLI parses user commands and then calls into the appropriate logic
    cli::cli::run().await
}
