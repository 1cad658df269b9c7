//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `archive_core` linkage and the default record table.
//! - Print deterministic per-decade counts for quick local sanity checks.

use archive_core::{count_by_decade, ArchiveConfig, RecordStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("archive_core ping={}", archive_core::ping());
    println!("archive_core version={}", archive_core::core_version());

    let config = ArchiveConfig::from_env();
    if let Err(err) = config.validate() {
        eprintln!("archive_core config error: {err}");
        return ExitCode::FAILURE;
    }

    // A table that cannot be loaded is fatal at startup.
    let store = RecordStore::new(&config.data_path);
    let records = match store.load() {
        Ok(records) => records,
        Err(err) => {
            eprintln!("archive_core load error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "archive_core records={} path={}",
        records.len(),
        store.path().display()
    );
    for (decade, count) in count_by_decade(&records) {
        println!("archive_core decade={decade} records={count}");
    }
    ExitCode::SUCCESS
}
