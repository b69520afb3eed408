pub mod api;
pub mod config;
pub mod formatters;
pub mod handoff;
pub mod interactive;
pub mod logging;
pub mod selection;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use api::{CommonsClient, HttpError, PhotoDetail, PhotoSource, PhotoSummary, SearchPage};
pub use config::{ConfigArgs, ConfigError, PickerConfig};
pub use handoff::{HandoffPayload, HostChannel, HostRequest, HostStatus, Offering, StdioChannel};
pub use interactive::{InteractivePicker, PickerOutcome};
pub use selection::{SelectionError, SelectionFlow};
pub use session::{SearchCoordinator, SearchSession};
