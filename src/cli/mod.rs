//! Operator-facing command line layer
//!
//! Everything that talks to a human: prompts, the scratch-file editor,
//! console output and the subcommands wiring them to the pipeline.

pub mod commands;
pub mod editor;
pub mod prompt;
pub mod ui;

pub use editor::{DumpEditor, read_dump, read_dump_file};
pub use prompt::{parse_incident_link, prompt_incident_link};
pub use ui::Output;
