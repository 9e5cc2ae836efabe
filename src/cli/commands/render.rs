//! Render Command
//!
//! Print the announcement for an alert dump without delivering it.
//!
//! Usage:
//!   warroom render [--incident-link URL] [--dump FILE|-] [--format slack|plain]

use std::path::PathBuf;

use super::{AlertInput, DumpSource};
use crate::config::ConfigLoader;
use crate::incident::IncidentPipeline;
use crate::render::MessageFormat;
use crate::types::Result;

pub fn run(
    incident_link: Option<String>,
    dump: Option<PathBuf>,
    format: MessageFormat,
) -> Result<()> {
    let config = ConfigLoader::load()?;
    let input = AlertInput::gather(
        incident_link,
        DumpSource::from_arg(dump.as_deref()),
        &config.editor,
    )?;

    let record = IncidentPipeline::from_config(&config).run(&input.lines, &input.incident_link);

    println!("{}", format.render(&record)?);
    Ok(())
}
