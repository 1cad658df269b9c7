//! Decade image gallery.

use crate::assets::ImageSource;
use crate::content::pages::GALLERY_INTRO;
use crate::model::record::Record;
use crate::view::ImageSlot;
use serde::Serialize;

/// Number of gallery columns; tiles fill them round-robin.
pub const GALLERY_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryTile {
    pub title: String,
    /// Zero-based column, `position % GALLERY_COLUMNS`.
    pub column: usize,
    pub image: ImageSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub heading: &'static str,
    pub intro: &'static str,
    pub columns: usize,
    pub tiles: Vec<GalleryTile>,
}

/// Builds one tile per record in source order.
///
/// Missing images become a warning tile and still consume a column slot.
pub fn build_gallery<'a, I, S>(records: I, images: &S) -> GalleryView
where
    I: IntoIterator<Item = &'a Record>,
    S: ImageSource + ?Sized,
{
    let tiles = records
        .into_iter()
        .enumerate()
        .map(|(position, record)| GalleryTile {
            title: record.title.clone(),
            column: position % GALLERY_COLUMNS,
            image: if images.exists(&record.image_path) {
                ImageSlot::Ready {
                    image_path: record.image_path.clone(),
                }
            } else {
                ImageSlot::Missing {
                    message: format!("Image not found for {}", record.title),
                }
            },
        })
        .collect();

    GalleryView {
        heading: "Visual Gallery",
        intro: GALLERY_INTRO,
        columns: GALLERY_COLUMNS,
        tiles,
    }
}
