mod constants;
mod generator;
mod thumbnail;

use anyhow::{Context, Result};
use constants::SOURCE_FILE;
use generator::AssetGenerator;
use std::path::Path;

fn main() -> Result<()> {
    let source = Path::new(SOURCE_FILE);

    // The only explicitly handled failure: everything past this point
    // propagates as a fatal error.
    if !source.exists() {
        let resolved = std::path::absolute(source)
            .context("Failed to resolve source image path")?;
        println!("Source image not found: {}", resolved.display());
        std::process::exit(1);
    }

    let out_dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let mut generator = AssetGenerator::open(source, &out_dir)?;
    generator.generate_all()?;

    println!();
    println!("Generated files:");
    for path in generator.generated_paths() {
        println!("{}", path.display());
    }

    Ok(())
}
