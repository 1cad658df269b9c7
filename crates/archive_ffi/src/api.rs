//! FFI use-case API for the Flutter archive shell.
//!
//! # Responsibility
//! - Expose section navigation, decade filtering and page rendering to Dart.
//! - Hold the single browsing session for the process.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported inside response envelopes, never thrown.
//! - A failed `archive_open` leaves any previously opened session untouched.

use archive_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner,
    ArchiveConfig, ArchiveService, Decade, FsImageSource, ImageSource, NavAction, Record,
    RecordStore, Section,
};
use log::{error, info};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

const ARCHIVE_NOT_OPEN: &str = "archive is not open; call archive_open first";

static SESSION: Mutex<Option<ArchiveService<FsImageSource>>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   selects [`default_log_level`].
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = match level.trim() {
        "" => default_log_level_inner(),
        explicit => explicit,
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Level used when the shell passes a blank level to [`init_logging`].
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Result of opening the archive table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOpenResponse {
    pub ok: bool,
    /// Loaded record count (0 on failure).
    pub record_count: u32,
    pub message: String,
}

/// Result of one navigation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavResponse {
    pub ok: bool,
    /// Current section label after the call (empty when not open).
    pub section: String,
    /// Whether the call moved the selection.
    pub changed: bool,
    pub message: String,
}

/// One record projected for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordItem {
    pub decade: String,
    pub title: String,
    pub architect: Option<String>,
    pub year_built: Option<i32>,
    pub style: Option<String>,
    pub description: Option<String>,
    pub image_path: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordListResponse {
    pub ok: bool,
    pub items: Vec<RecordItem>,
    pub message: String,
}

/// Current page serialized as JSON for the shell renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub ok: bool,
    pub json: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResponse {
    pub ok: bool,
    pub bytes: Vec<u8>,
    pub message: String,
}

/// Loads the record table and starts a fresh session at Home.
///
/// # FFI contract
/// - Sync call; reads the table file once.
/// - Empty `data_path` selects the default relative table location.
/// - `image_root` (optional) is the base for relative image paths.
#[flutter_rust_bridge::frb(sync)]
pub fn archive_open(data_path: String, image_root: Option<String>) -> ArchiveOpenResponse {
    let mut config = ArchiveConfig::from_env();
    let trimmed = data_path.trim();
    if !trimmed.is_empty() {
        config.data_path = PathBuf::from(trimmed);
    }
    config.image_root = image_root
        .map(|root| root.trim().to_string())
        .filter(|root| !root.is_empty())
        .map(PathBuf::from);

    if let Err(err) = config.validate() {
        return open_failure(format!("archive_open failed: {err}"));
    }

    let records = match RecordStore::new(&config.data_path).load() {
        Ok(records) => records,
        Err(err) => {
            error!("event=archive_open module=ffi status=error error={err}");
            return open_failure(format!("archive_open failed: {err}"));
        }
    };

    let images = config
        .image_root
        .clone()
        .map(FsImageSource::with_root)
        .unwrap_or_default();
    let record_count = u32::try_from(records.len()).unwrap_or(u32::MAX);
    *lock_session() = Some(ArchiveService::new(records, images, config.map));
    info!("event=archive_open module=ffi status=ok records={record_count}");

    ArchiveOpenResponse {
        ok: true,
        record_count,
        message: format!("Loaded {record_count} record(s)."),
    }
}

/// Ordered section labels for the sidebar selector.
#[flutter_rust_bridge::frb(sync)]
pub fn archive_sections() -> Vec<String> {
    Section::ALL
        .iter()
        .map(|section| section.label().to_string())
        .collect()
}

/// Reports the selected section without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn current_section() -> NavResponse {
    with_session(|service| {
        Ok(NavResponse {
            ok: true,
            section: service.current_section().label().to_string(),
            changed: false,
            message: String::new(),
        })
    })
    .unwrap_or_else(nav_failure)
}

/// Direct menu selection by section label.
#[flutter_rust_bridge::frb(sync)]
pub fn select_section(label: String) -> NavResponse {
    match label.parse::<Section>() {
        Ok(section) => navigate(NavAction::Select(section)),
        Err(err) => nav_failure(format!("select_section failed: {err}")),
    }
}

/// Previous decade; inert at Home and the first decade.
#[flutter_rust_bridge::frb(sync)]
pub fn previous_section() -> NavResponse {
    navigate(NavAction::Previous)
}

/// Next decade; inert at the last decade and About.
#[flutter_rust_bridge::frb(sync)]
pub fn next_section() -> NavResponse {
    navigate(NavAction::Next)
}

#[flutter_rust_bridge::frb(sync)]
pub fn go_home() -> NavResponse {
    navigate(NavAction::Home)
}

/// Records of one decade in source order.
#[flutter_rust_bridge::frb(sync)]
pub fn decade_records(decade: String) -> RecordListResponse {
    let decade = match decade.parse::<Decade>() {
        Ok(decade) => decade,
        Err(err) => {
            return RecordListResponse {
                ok: false,
                items: Vec::new(),
                message: format!("decade_records failed: {err}"),
            }
        }
    };

    match with_session(|service| Ok(service.filter(decade))) {
        Ok(records) => RecordListResponse {
            ok: true,
            message: if records.is_empty() {
                "No records.".to_string()
            } else {
                format!("Found {} record(s).", records.len())
            },
            items: records.into_iter().map(to_record_item).collect(),
        },
        Err(message) => RecordListResponse {
            ok: false,
            items: Vec::new(),
            message,
        },
    }
}

/// Renders the current section (sidebar, page body, controls) as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn current_page() -> PageResponse {
    let rendered = with_session(|service| {
        serde_json::to_string(&service.render())
            .map_err(|err| format!("current_page failed: {err}"))
    });
    match rendered {
        Ok(json) => PageResponse {
            ok: true,
            json,
            message: String::new(),
        },
        Err(message) => PageResponse {
            ok: false,
            json: String::new(),
            message,
        },
    }
}

/// Loads raw image bytes for a record `image_path`.
///
/// Uses the session image root when open, the working directory otherwise.
/// Absolute paths and `..` segments are refused.
#[flutter_rust_bridge::frb(sync)]
pub fn load_image(image_path: String) -> ImageResponse {
    let root = lock_session()
        .as_ref()
        .map(|service| service.images().clone())
        .unwrap_or_default();
    match root.load(image_path.trim()) {
        Ok(bytes) => ImageResponse {
            ok: true,
            bytes,
            message: String::new(),
        },
        Err(err) => ImageResponse {
            ok: false,
            bytes: Vec::new(),
            message: err.to_string(),
        },
    }
}

fn navigate(action: NavAction) -> NavResponse {
    let mut guard = lock_session();
    let Some(service) = guard.as_mut() else {
        return nav_failure(ARCHIVE_NOT_OPEN.to_string());
    };
    let changed = service.apply(action);
    NavResponse {
        ok: true,
        section: service.current_section().label().to_string(),
        changed,
        message: String::new(),
    }
}

fn with_session<T>(
    f: impl FnOnce(&ArchiveService<FsImageSource>) -> Result<T, String>,
) -> Result<T, String> {
    let guard = lock_session();
    let service = guard.as_ref().ok_or_else(|| ARCHIVE_NOT_OPEN.to_string())?;
    f(service)
}

fn lock_session() -> MutexGuard<'static, Option<ArchiveService<FsImageSource>>> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn open_failure(message: String) -> ArchiveOpenResponse {
    ArchiveOpenResponse {
        ok: false,
        record_count: 0,
        message,
    }
}

fn nav_failure(message: String) -> NavResponse {
    NavResponse {
        ok: false,
        section: String::new(),
        changed: false,
        message,
    }
}

fn to_record_item(record: Record) -> RecordItem {
    RecordItem {
        decade: record.decade.as_str().to_string(),
        title: record.title,
        architect: record.architect,
        year_built: record.year_built,
        style: record.style,
        description: record.description,
        image_path: record.image_path,
        location: record.location,
    }
}
