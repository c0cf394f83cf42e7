//! Build script for the Mixcloud show uploader CLI.
//!
//! Copies the configuration template into the user's local data directory so
//! a ready-to-edit example sits next to where the application expects its
//! `config.json`:
//!
//! - Linux: `~/.local/share/mixupcli/config.example.json`
//! - macOS: `~/Library/Application Support/mixupcli/config.example.json`
//! - Windows: `%LOCALAPPDATA%/mixupcli/config.example.json`
//!
//! A missing template produces a cargo warning instead of failing the build;
//! directory or copy failures are real errors.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::{env, fs, path::PathBuf};

    // Re-run if the template changes
    println!("cargo:rerun-if-changed=config.example.json");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("config.example.json");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("mixupcli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("config.example.json"), contents)?;
    } else {
        println!(
            "cargo:warning=config.example.json not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
