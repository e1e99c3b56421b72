use std::error::Error;

use vaxfinder::vaxfinder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    vaxfinder::run().await?;
    Ok(())
}
