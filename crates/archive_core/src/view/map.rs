//! Map scene handed to the 3D mapping collaborator.
//!
//! # Invariants
//! - `MapScene::points` never contains a row without a parsed coordinate.
//! - Every plotted coordinate is finite, so the initial view is finite too.
//! - Rows dropped from the map are listed in `skipped`, never raised.

use crate::config::MapSettings;
use crate::content::pages::MAP_INTRO;
use crate::geo::{classify_location, LocationIssue};
use crate::model::record::Record;
use crate::view::projects::UNKNOWN_ARCHITECT;
use log::debug;
use serde::Serialize;

pub const LOCATION_UNAVAILABLE: &str = "Location data is not available for this decade.";
pub const NO_VALID_LOCATIONS: &str = "No valid location data available to display on the map.";

const COLUMN_HEIGHT: u32 = 50;
const COLUMN_RADIUS: u32 = 50;
const COLUMN_FILL_RGBA: [u8; 4] = [200, 30, 0, 160];
const TEXT_SIZE: u32 = 14;
const TEXT_RGB: [u8; 3] = [50, 50, 50];
const INITIAL_ZOOM: f64 = 13.0;
const INITIAL_PITCH: f64 = 45.0;

/// One plotted record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub title: String,
    pub architect: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub height: u32,
    /// Hover text: title, then `Architect: <name|Unknown>`.
    pub tooltip: String,
}

/// Record left off the map and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLocation {
    pub title: String,
    pub issue: LocationIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

/// Extruded column per point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLayer {
    pub radius: u32,
    pub elevation_scale: u32,
    pub fill_color: [u8; 4],
    pub pickable: bool,
    pub auto_highlight: bool,
}

/// Title label per point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLayer {
    pub size: u32,
    pub color: [u8; 3],
    pub alignment_baseline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub style: String,
    pub api_key: Option<String>,
    pub initial_view: MapViewState,
    pub column_layer: ColumnLayer,
    pub text_layer: TextLayer,
    pub points: Vec<MapPoint>,
}

/// Map tab state for one decade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MapView {
    /// No record in the decade carries location text.
    Unavailable { message: &'static str },
    /// Location text exists but none of it parsed.
    NoValidLocations {
        message: &'static str,
        skipped: Vec<SkippedLocation>,
    },
    Ready {
        intro: &'static str,
        scene: MapScene,
        skipped: Vec<SkippedLocation>,
    },
}

impl MapView {
    /// Plotted points, empty unless `Ready`.
    pub fn points(&self) -> &[MapPoint] {
        match self {
            Self::Ready { scene, .. } => &scene.points,
            Self::Unavailable { .. } | Self::NoValidLocations { .. } => &[],
        }
    }
}

fn finite_pair((lat, lon): (f64, f64)) -> Result<(f64, f64), LocationIssue> {
    if lat.is_finite() && lon.is_finite() {
        Ok((lat, lon))
    } else {
        Err(LocationIssue::NotFinite)
    }
}

/// Builds the map tab from decade-filtered records.
pub fn build_map_view<'a, I>(records: I, settings: &MapSettings) -> MapView
where
    I: IntoIterator<Item = &'a Record>,
{
    let records = records.into_iter().collect::<Vec<_>>();
    if records.iter().all(|record| record.location.is_none()) {
        return MapView::Unavailable {
            message: LOCATION_UNAVAILABLE,
        };
    }

    let mut points = Vec::new();
    let mut skipped = Vec::new();
    for record in records {
        match classify_location(record.location.as_deref()).and_then(finite_pair) {
            Ok((lat, lon)) => points.push(MapPoint {
                title: record.title.clone(),
                architect: record.architect.clone(),
                lat,
                lon,
                height: COLUMN_HEIGHT,
                tooltip: format!(
                    "{}\nArchitect: {}",
                    record.title,
                    record.architect.as_deref().unwrap_or(UNKNOWN_ARCHITECT)
                ),
            }),
            Err(issue) => {
                debug!(
                    "event=map_location_skipped module=view status=degraded decade={} issue={}",
                    record.decade, issue
                );
                skipped.push(SkippedLocation {
                    title: record.title.clone(),
                    issue,
                });
            }
        }
    }

    if points.is_empty() {
        return MapView::NoValidLocations {
            message: NO_VALID_LOCATIONS,
            skipped,
        };
    }

    let count = points.len() as f64;
    let latitude = points.iter().map(|point| point.lat).sum::<f64>() / count;
    let longitude = points.iter().map(|point| point.lon).sum::<f64>() / count;

    MapView::Ready {
        intro: MAP_INTRO,
        scene: MapScene {
            style: settings.style.clone(),
            api_key: settings.api_key.clone(),
            initial_view: MapViewState {
                latitude,
                longitude,
                zoom: INITIAL_ZOOM,
                pitch: INITIAL_PITCH,
                bearing: 0.0,
            },
            column_layer: ColumnLayer {
                radius: COLUMN_RADIUS,
                elevation_scale: 1,
                fill_color: COLUMN_FILL_RGBA,
                pickable: true,
                auto_highlight: true,
            },
            text_layer: TextLayer {
                size: TEXT_SIZE,
                color: TEXT_RGB,
                alignment_baseline: "bottom",
            },
            points,
        },
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::{build_map_view, MapView, LOCATION_UNAVAILABLE};
    use crate::config::MapSettings;
    use crate::model::record::{Decade, Record};

    #[test]
    fn empty_decade_reports_unavailable() {
        let view = build_map_view(std::iter::empty(), &MapSettings::default());
        assert_eq!(
            view,
            MapView::Unavailable {
                message: LOCATION_UNAVAILABLE
            }
        );
    }

    #[test]
    fn midpoint_is_mean_of_points() {
        let mut first = Record::new(Decade::Sixties, "NCL", "img/ncl.jpg");
        first.location = Some("18.0,73.0".to_string());
        let mut second = Record::new(Decade::Sixties, "FTII", "img/ftii.jpg");
        second.location = Some("19.0,74.0".to_string());

        let view = build_map_view([&first, &second], &MapSettings::default());
        let MapView::Ready { scene, .. } = view else {
            panic!("expected ready map");
        };
        assert!((scene.initial_view.latitude - 18.5).abs() < 1e-9);
        assert!((scene.initial_view.longitude - 73.5).abs() < 1e-9);
        assert_eq!(scene.initial_view.zoom, 13.0);
        assert_eq!(scene.initial_view.pitch, 45.0);
    }
}
