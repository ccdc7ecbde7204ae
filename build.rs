//! Build script for the vibematch relay and CLI.
//!
//! Copies the configuration template into the user's local data directory
//! during compilation so a freshly built binary finds a ready-to-edit
//! `.env.example` in the place the application loads configuration from.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// # Build Process
///
/// 1. **Dependency Tracking**: Re-runs when the template changes
/// 2. **Path Resolution**: Source is the crate root, destination the
///    platform data directory (`~/.local/share/vibematch` on Linux,
///    `~/Library/Application Support/vibematch` on macOS,
///    `%LOCALAPPDATA%/vibematch` on Windows)
/// 3. **Directory Creation**: Ensures the destination exists
/// 4. **File Copying**: Writes the template next to where the application
///    expects its `.env`
///
/// # Error Handling Strategy
///
/// A missing template only issues a cargo warning so clean checkouts still
/// build; directory creation and copy failures are surfaced as build
/// errors.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("vibematch");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
