use std::path::PathBuf;

use anyhow::{bail, Result};

use folio_core::{EngineConfig, PageModel};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(EngineConfig::page_path);
    if path.exists() {
        bail!("{} already exists, refusing to overwrite it", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, PageModel::sample().to_toml()?)?;

    println!("Wrote sample page to {}", path.display());
    println!("Edit it, then start the viewer with: folio run");
    Ok(())
}
