//! Render-ready view models for the UI shell.
//!
//! # Responsibility
//! - Project decade-filtered records into gallery, detail and map models.
//! - Compose whole pages (Home, decade, About) plus sidebar and controls.
//!
//! # Invariants
//! - View models are plain serializable data; no rendering happens here.
//! - A missing image or malformed location degrades one item only.
//!
//! # See also
//! - crate::service::ArchiveService for the stateful entry point.

pub mod gallery;
pub mod map;
pub mod page;
pub mod projects;

use serde::Serialize;

/// Image reference after an availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ImageSlot {
    /// Image exists; the shell loads it from `image_path`.
    Ready { image_path: String },
    /// Placeholder text shown instead of the image.
    Missing { message: String },
}

impl ImageSlot {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

pub use gallery::{build_gallery, GalleryTile, GalleryView, GALLERY_COLUMNS};
pub use map::{build_map_view, MapPoint, MapScene, MapView, MapViewState, SkippedLocation};
pub use page::{
    render_section, AboutPage, DecadePage, HomePage, OverviewView, PageView, SectionPage, Sidebar,
};
pub use projects::{build_projects, ProjectDetail, ProjectsView};
