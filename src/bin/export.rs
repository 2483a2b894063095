use anyhow::{Context, Result};
use favicon_kit::config::load_config;
use favicon_kit::IconSet;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let out_dir = match env::args_os().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => {
            eprintln!("usage: favicon-export <output-dir>");
            std::process::exit(2);
        }
    };

    let config = load_config()?;
    let options = config.options()?;
    let set = IconSet::build(&options, &config.base_path).context("Failed to generate favicons")?;

    for path in set.write_to_dir(&out_dir)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}
