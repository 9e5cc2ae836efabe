pub mod error;
pub mod incident;
pub mod utils;

pub use error::{Result, ResultExt, WarRoomError};
pub use incident::{ExplorerDetail, IncidentRecord, ServiceCategory, SummarySource};
pub use utils::is_url;
