//! Config Command
//!
//! Manage warroom configuration.
//!
//! Usage:
//!   warroom config show [-f json]
//!   warroom config path
//!   warroom config edit
//!   warroom config init [--force]

use std::path::Path;

use crate::cli::{DumpEditor, Output};
use crate::config::{ConfigLoader, EditorConfig};
use crate::types::{Result, WarRoomError};

/// Show merged effective configuration
pub fn show(format: &str) -> Result<()> {
    let config = ConfigLoader::load()?;
    println!("{}", ConfigLoader::render_config(&config, format == "json")?);
    Ok(())
}

/// Show configuration paths and whether each file exists
pub fn path() -> Result<()> {
    let marker = |p: &Path| if p.exists() { "✓" } else { "✗" };

    println!("Configuration paths:");
    println!();
    match ConfigLoader::global_config_path() {
        Some(global) => println!("  Global:  {} {}", marker(&global), global.display()),
        None => println!("  Global:  (not available)"),
    }
    let project = ConfigLoader::project_config_path();
    println!("  Project: {} {}", marker(&project), project.display());
    Ok(())
}

/// Edit the global configuration file
pub fn edit() -> Result<()> {
    let path = ConfigLoader::global_config_path().ok_or_else(|| {
        WarRoomError::Config("Cannot determine global config path".to_string())
    })?;

    if !path.exists() {
        println!("Config file does not exist: {}", path.display());
        println!("Run: warroom config init");
        return Ok(());
    }

    // The file being edited may not load
    let command = ConfigLoader::load()
        .ok()
        .and_then(|config| config.editor.command);
    DumpEditor::from_config(&EditorConfig {
        command,
        scratch_file: path.clone(),
    })
    .open()?;

    Output::new().success(&format!("Config saved: {}", path.display()));
    Ok(())
}

/// Initialize global configuration
pub fn init(force: bool) -> Result<()> {
    let path = ConfigLoader::init_global(force)?;
    Output::new().success("Initialized global configuration");
    println!("  Config: {}", path.display());
    Ok(())
}
