//! Build script for the Spot Tracker CLI.
//!
//! Copies the credentials template to the user's local data directory so the
//! expected `keys.env` location has a ready-made example next to it.

use std::{env, fs, path::PathBuf};

/// Copies `keys.env.example` from the crate root into the local data directory.
///
/// # Destination Location
///
/// - Linux: `~/.local/share/spotcli/keys.env.example`
/// - macOS: `~/Library/Application Support/spotcli/keys.env.example`
/// - Windows: `%LOCALAPPDATA%/spotcli/keys.env.example`
///
/// A missing template only produces a cargo warning; directory creation and
/// copy failures fail the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=keys.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("keys.env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotcli");
    fs::create_dir_all(&out_dir)?;

    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("keys.env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=keys.env.example not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
