use std::path::PathBuf;
use std::process;

use clap::Parser;

use iconforge::{output, render_icon, IconSpec, DEFAULT_SIZES};

/// Generate PWA icon PNGs into an existing output directory.
#[derive(Parser, Debug)]
#[command(name = "iconforge", version)]
struct Cli {
    /// Directory the icons are written into (must already exist)
    #[arg(long, default_value = "public")]
    out_dir: PathBuf,

    /// Icon size in pixels; repeat for multiple sizes
    #[arg(long = "size", default_values_t = DEFAULT_SIZES)]
    sizes: Vec<u32>,
}

fn run(cli: &Cli) -> iconforge::Result<()> {
    let spec = IconSpec::default();

    // Report absolute paths; joining an already-absolute --out-dir is a no-op.
    let out_dir = std::env::current_dir()
        .map(|cwd| cwd.join(&cli.out_dir))
        .unwrap_or_else(|_| cli.out_dir.clone());

    println!("Generating PWA icons...");
    for &size in &cli.sizes {
        let icon = render_icon(&spec, size)?;
        let path = output::icon_path(&out_dir, size);
        output::write_bytes(&path, &icon.png_data)?;
        println!("✓ Generated {}", path.display());
    }
    println!("Done! Icons saved to {}", out_dir.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("iconforge: {e}");
        process::exit(1);
    }
}
