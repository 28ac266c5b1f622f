use anyhow::Context;
use appicon::{config, generate_icons, logger};

fn main() -> anyhow::Result<()> {
    logger::init();

    let out_dir = config::output_dir();
    let files = generate_icons(&out_dir)
        .with_context(|| format!("failed to generate icons in {}", out_dir.display()))?;

    for path in files.paths() {
        println!("Generated {}", path.display());
    }
    Ok(())
}
