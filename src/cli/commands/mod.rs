pub mod config;
pub mod post;
pub mod render;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::editor::{DumpEditor, read_dump, read_dump_file};
use super::prompt::prompt_incident_link;
use crate::config::EditorConfig;
use crate::types::{Result, WarRoomError};

/// Where the alert dump comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpSource {
    /// Open the scratch file in an editor
    Editor,
    /// Read standard input (`--dump -`)
    Stdin,
    File(PathBuf),
}

impl DumpSource {
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => DumpSource::Editor,
            Some(p) if p == Path::new("-") => DumpSource::Stdin,
            Some(p) => DumpSource::File(p.to_path_buf()),
        }
    }
}

/// Incident link plus raw alert lines, collected from the operator
#[derive(Debug, Clone)]
pub struct AlertInput {
    pub incident_link: String,
    pub lines: Vec<String>,
}

impl AlertInput {
    /// Gather whatever was not supplied on the command line
    pub fn gather(
        incident_link: Option<String>,
        source: DumpSource,
        editor: &EditorConfig,
    ) -> Result<Self> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        Self::gather_with(incident_link, source, editor, &mut input, &mut output)
    }

    pub fn gather_with<R: BufRead, W: Write>(
        incident_link: Option<String>,
        source: DumpSource,
        editor: &EditorConfig,
        input: &mut R,
        output: &mut W,
    ) -> Result<Self> {
        if source == DumpSource::Stdin && incident_link.is_none() {
            return Err(WarRoomError::input(
                "--incident-link is required when the dump is read from stdin",
            ));
        }

        let incident_link = match incident_link {
            Some(link) => link,
            None => prompt_incident_link(input, output)?,
        };

        let lines = match source {
            DumpSource::Editor => DumpEditor::from_config(editor).collect(input, output)?,
            DumpSource::Stdin => read_dump(input)?,
            DumpSource::File(path) => read_dump_file(&path)?,
        };

        Ok(Self {
            incident_link,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_dump_source_from_arg() {
        assert_eq!(DumpSource::from_arg(None), DumpSource::Editor);
        assert_eq!(DumpSource::from_arg(Some(Path::new("-"))), DumpSource::Stdin);
        assert_eq!(
            DumpSource::from_arg(Some(Path::new("alert.txt"))),
            DumpSource::File(PathBuf::from("alert.txt"))
        );
    }

    #[test]
    fn test_gather_reads_stdin_dump() {
        let mut input = Cursor::new("- summary = disk full\n");
        let gathered = AlertInput::gather_with(
            Some("https://example.com/i/1".to_string()),
            DumpSource::Stdin,
            &EditorConfig::default(),
            &mut input,
            &mut Vec::new(),
        )
        .unwrap();

        assert_eq!(gathered.incident_link, "https://example.com/i/1");
        assert_eq!(gathered.lines, vec!["- summary = disk full"]);
    }

    #[test]
    fn test_gather_prompts_for_missing_link() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("alert.txt");
        std::fs::write(&path, "foo\nbar\n").unwrap();

        let mut input = Cursor::new("bad\nhttps://example.com/i/2\n");
        let gathered = AlertInput::gather_with(
            None,
            DumpSource::File(path),
            &EditorConfig::default(),
            &mut input,
            &mut Vec::new(),
        )
        .unwrap();

        assert_eq!(gathered.incident_link, "https://example.com/i/2");
        assert_eq!(gathered.lines, vec!["foo", "bar"]);
    }

    #[test]
    fn test_stdin_dump_requires_link_flag() {
        let err = AlertInput::gather_with(
            None,
            DumpSource::Stdin,
            &EditorConfig::default(),
            &mut Cursor::new(""),
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, WarRoomError::Input(_)));
    }
}
