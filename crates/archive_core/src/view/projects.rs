//! Featured project detail panels.

use crate::assets::ImageSource;
use crate::content::pages::PROJECTS_INTRO;
use crate::model::record::Record;
use crate::view::ImageSlot;
use serde::Serialize;

pub const UNKNOWN_ARCHITECT: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No additional details available.";
pub const DETAIL_IMAGE_MISSING: &str = "Image not available.";

/// Expandable detail panel for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub title: String,
    pub image: ImageSlot,
    /// Architect name, or `Unknown`.
    pub architect: String,
    pub year_built: Option<i32>,
    pub style: Option<String>,
    /// Description, or the no-details fallback.
    pub description: String,
}

impl ProjectDetail {
    pub fn from_record<S: ImageSource + ?Sized>(record: &Record, images: &S) -> Self {
        let image = if images.exists(&record.image_path) {
            ImageSlot::Ready {
                image_path: record.image_path.clone(),
            }
        } else {
            ImageSlot::Missing {
                message: DETAIL_IMAGE_MISSING.to_string(),
            }
        };

        Self {
            title: record.title.clone(),
            image,
            architect: record
                .architect
                .clone()
                .unwrap_or_else(|| UNKNOWN_ARCHITECT.to_string()),
            year_built: record.year_built,
            style: record.style.clone(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsView {
    pub heading: &'static str,
    pub intro: &'static str,
    pub items: Vec<ProjectDetail>,
}

pub fn build_projects<'a, I, S>(records: I, images: &S) -> ProjectsView
where
    I: IntoIterator<Item = &'a Record>,
    S: ImageSource + ?Sized,
{
    ProjectsView {
        heading: "Featured Projects",
        intro: PROJECTS_INTRO,
        items: records
            .into_iter()
            .map(|record| ProjectDetail::from_record(record, images))
            .collect(),
    }
}
