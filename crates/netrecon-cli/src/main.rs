//! netrecon - passive network reconnaissance from the command line.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    netrecon_cli::run().await
}
