//! Incident Extraction Pipeline
//!
//! Turns a pasted alert dump into a classified [`IncidentRecord`]:
//!
//! - `extractor`: label-driven field extraction and summary fallback
//! - `classifier`: service category inference and link table
//! - `explorer`: per-category secondary field selection
//! - `pipeline`: the three steps wired together
//!
//! [`IncidentRecord`]: crate::types::IncidentRecord

mod classifier;
mod explorer;
mod extractor;
mod pipeline;

pub use classifier::{ServiceCategoryTable, ServiceClassifier};
pub use explorer::ExplorerDetailResolver;
pub use extractor::{AlertDetailExtractor, FIELD_RULES, FieldRule, sanitize_summary};
pub use pipeline::IncidentPipeline;
