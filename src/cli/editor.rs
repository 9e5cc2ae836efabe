//! Alert Dump Collection
//!
//! Gets the raw alert text from the operator, either from an existing file /
//! stdin or by opening a scratch file in an editor and waiting for a save.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::types::{Result, WarRoomError};

/// Read a dump file into lines
pub fn read_dump_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read a dump from any reader (stdin for `--dump -`)
pub fn read_dump<R: BufRead>(reader: R) -> Result<Vec<String>> {
    Ok(reader.lines().collect::<std::io::Result<Vec<_>>>()?)
}

/// Scratch-file editing session
#[derive(Debug, Clone)]
pub struct DumpEditor {
    command: Option<String>,
    file: PathBuf,
}

impl DumpEditor {
    pub fn new(command: Option<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            command,
            file: file.into(),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        let command = config
            .command
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|c| !c.trim().is_empty());
        Self::new(command, &config.scratch_file)
    }

    /// Editors to try in order
    fn candidates(&self) -> Vec<String> {
        match &self.command {
            Some(command) => vec![command.clone()],
            None if cfg!(target_os = "macos") => vec!["open".to_string(), "gvim".to_string()],
            None => vec!["gvim".to_string(), "vi".to_string()],
        }
    }

    /// Walk the operator through pasting the alert, then read it back
    pub fn collect<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Vec<String>> {
        writeln!(
            output,
            "Creating file; paste in PagerDuty details and then save. Press enter to continue."
        )?;
        output.flush()?;
        wait_for_enter(input)?;

        if let Some(parent) = self.file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::File::create(&self.file)?;
        debug!("Created scratch file: {}", self.file.display());

        self.open()?;

        writeln!(output, "Press Enter when done saving.")?;
        output.flush()?;
        wait_for_enter(input)?;

        read_dump_file(&self.file)
    }

    /// Open the file with the first editor that starts and exits cleanly
    pub fn open(&self) -> Result<()> {
        let mut last_error = String::from("no editor configured");

        for candidate in self.candidates() {
            let mut parts = candidate.split_whitespace();
            let Some(program) = parts.next() else {
                continue;
            };

            match Command::new(program).args(parts).arg(&self.file).status() {
                Ok(status) if status.success() => return Ok(()),
                Ok(status) => {
                    last_error = format!("{} exited with {}", program, status);
                }
                Err(e) => {
                    last_error = format!("failed to launch {}: {}", program, e);
                }
            }
            warn!("Unable to open scratch file with {}: {}", program, last_error);
        }

        Err(WarRoomError::Editor(format!(
            "Unable to open {}: {}",
            self.file.display(),
            last_error
        )))
    }
}

fn wait_for_enter<R: BufRead>(input: &mut R) -> Result<()> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(WarRoomError::input("Input closed while waiting for Enter"));
    }
    Ok(())
}
