use anyhow::{Context, Result};
use parallelchat_icons::{GeneratorConfig, generate, iconset_instructions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let root = std::env::current_dir().context("cannot determine project root")?;
    let config = GeneratorConfig::with_root(root);

    let report = generate(&config).context("icon generation failed")?;

    println!("\nAll icons generated successfully! ({} files)", report.len());
    println!("\n{}", iconset_instructions(&config.build_dir()));
    Ok(())
}
