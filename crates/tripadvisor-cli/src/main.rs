//! tripcli - Tripadvisor Content API from the command line

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tripadvisor_cli::run().await
}
