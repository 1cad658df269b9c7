//! Core domain logic for the Pune Architectural Archive.
//! This crate is the single source of truth for record, navigation and
//! view-model invariants; the UI shell only renders what it returns.

pub mod assets;
pub mod config;
pub mod content;
pub mod filter;
pub mod geo;
pub mod logging;
pub mod model;
pub mod nav;
pub mod service;
pub mod store;
pub mod view;

pub use assets::{FsImageSource, ImageError, ImageSource};
pub use config::{ArchiveConfig, ConfigError, MapSettings};
pub use filter::{count_by_decade, filter_by_decade};
pub use geo::{classify_location, parse_location, LocationIssue};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{Decade, Record, UnknownDecade};
pub use model::section::{Section, UnknownSection};
pub use nav::{NavAction, NavButton, NavControls, NavigationState};
pub use service::ArchiveService;
pub use store::{load_records_from_reader, DataLoadError, LoadResult, RecordStore};
pub use view::{ImageSlot, MapView, PageView, SectionPage};

/// Minimal health-check API for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
