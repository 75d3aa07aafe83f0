//! Roundtable Server Binary
//!
//! Standalone entry point - delegates to lib.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = roundtable_core::load_config(&cwd)?;

    roundtable_server::run_server(config).await
}
