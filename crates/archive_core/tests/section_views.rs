use archive_core::view::map::{LOCATION_UNAVAILABLE, NO_VALID_LOCATIONS};
use archive_core::view::projects::{DETAIL_IMAGE_MISSING, NO_DESCRIPTION, UNKNOWN_ARCHITECT};
use archive_core::{
    ArchiveService, Decade, FsImageSource, ImageError, ImageSlot, ImageSource, LocationIssue,
    MapSettings, MapView, NavAction, NavigationState, Record, Section, SectionPage,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// In-memory image source keyed by path.
struct KnownImages(BTreeSet<&'static str>);

impl ImageSource for KnownImages {
    fn exists(&self, image_path: &str) -> bool {
        self.0.contains(image_path)
    }

    fn load(&self, image_path: &str) -> Result<Vec<u8>, ImageError> {
        if self.exists(image_path) {
            Ok(vec![1, 2, 3])
        } else {
            Err(ImageError::NotFound(image_path.into()))
        }
    }
}

fn sample_records() -> Arc<[Record]> {
    let mut council = Record::new(Decade::Forties, "Council Hall", "images/council.jpg");
    council.architect = Some("Public Works Department".to_string());
    council.year_built = Some(1945);
    council.style = Some("Colonial".to_string());
    council.description = Some("Seat of the divisional council.".to_string());
    council.location = Some("18.5308,73.8747".to_string());

    let mut library = Record::new(Decade::Forties, "College Library", "images/missing.jpg");
    library.location = Some("north of the river".to_string());

    let mut tower = Record::new(Decade::Forties, "Water Tower", "images/tower.jpg");
    tower.location = Some("18.52,73.86".to_string());

    let mut hostel = Record::new(Decade::Forties, "Hostel Block", "images/hostel.jpg");
    hostel.location = None;

    let mut institute = Record::new(Decade::Sixties, "Research Institute", "images/ncl.jpg");
    institute.location = Some("abc,def".to_string());

    let plain = Record::new(Decade::Seventies, "Housing Co-op", "images/coop.jpg");

    Arc::from(vec![council, library, tower, hostel, institute, plain])
}

fn service() -> ArchiveService<KnownImages> {
    let images = KnownImages(BTreeSet::from([
        "images/council.jpg",
        "images/tower.jpg",
        "images/hostel.jpg",
        "assets/logo.png",
    ]));
    ArchiveService::new(sample_records(), images, MapSettings::default())
}

fn decade_page(service: &ArchiveService<KnownImages>) -> archive_core::view::DecadePage {
    match service.render().page {
        SectionPage::Decade(page) => page,
        other => panic!("expected decade page, got {other:?}"),
    }
}

#[test]
fn home_page_is_initial_view() {
    let service = service();
    let view = service.render();

    assert_eq!(view.section, Section::Home);
    assert_eq!(view.sidebar.selected, Section::Home);
    assert_eq!(view.sidebar.options, Section::ALL.to_vec());
    let SectionPage::Home(home) = view.page else {
        panic!("expected home page");
    };
    assert!(home.logo.is_ready());
    assert!(view.controls.previous.is_none());
    assert!(view.controls.next.is_some());
}

#[test]
fn gallery_degrades_missing_images_per_tile() {
    let mut service = service();
    service.select(Section::Decade(Decade::Forties));
    let page = decade_page(&service);

    assert_eq!(page.title, "Pune in the 1940s");
    assert_eq!(page.overview.heading, "Overview of the 1940s");
    assert_eq!(page.record_count, 4);
    assert_eq!(page.notice, None);

    let tiles = &page.gallery.tiles;
    assert_eq!(tiles.len(), 4);
    assert_eq!(
        tiles.iter().map(|tile| tile.column).collect::<Vec<_>>(),
        vec![0, 1, 2, 0]
    );
    assert!(tiles[0].image.is_ready());
    assert_eq!(
        tiles[1].image,
        ImageSlot::Missing {
            message: "Image not found for College Library".to_string()
        }
    );
    assert!(tiles[2].image.is_ready());
}

#[test]
fn project_details_apply_fallbacks() {
    let mut service = service();
    service.select(Section::Decade(Decade::Forties));
    let page = decade_page(&service);

    let council = &page.projects.items[0];
    assert_eq!(council.architect, "Public Works Department");
    assert_eq!(council.year_built, Some(1945));
    assert_eq!(council.style.as_deref(), Some("Colonial"));

    let library = &page.projects.items[1];
    assert_eq!(library.architect, UNKNOWN_ARCHITECT);
    assert_eq!(library.description, NO_DESCRIPTION);
    assert_eq!(library.year_built, None);
    assert_eq!(
        library.image,
        ImageSlot::Missing {
            message: DETAIL_IMAGE_MISSING.to_string()
        }
    );
}

#[test]
fn map_plots_parsed_rows_and_lists_skipped_ones() {
    let mut service = service();
    service.select(Section::Decade(Decade::Forties));
    let page = decade_page(&service);

    let MapView::Ready { scene, skipped, .. } = &page.map else {
        panic!("expected ready map, got {:?}", page.map);
    };
    assert_eq!(
        scene
            .points
            .iter()
            .map(|point| point.title.as_str())
            .collect::<Vec<_>>(),
        vec!["Council Hall", "Water Tower"]
    );
    assert_eq!(
        scene.points[0].tooltip,
        "Council Hall\nArchitect: Public Works Department"
    );
    assert_eq!(scene.points[1].tooltip, "Water Tower\nArchitect: Unknown");
    assert_eq!(scene.points[0].height, 50);
    assert_eq!(scene.style, "mapbox://styles/mapbox/light-v9");

    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].title, "College Library");
    assert_eq!(skipped[0].issue, LocationIssue::TokenCount(1));
    assert_eq!(skipped[1].issue, LocationIssue::Missing);
}

#[test]
fn map_states_for_malformed_and_absent_locations() {
    let mut service = service();

    service.select(Section::Decade(Decade::Sixties));
    let sixties = decade_page(&service);
    match sixties.map {
        MapView::NoValidLocations { message, skipped } => {
            assert_eq!(message, NO_VALID_LOCATIONS);
            assert_eq!(skipped.len(), 1);
        }
        other => panic!("unexpected map view: {other:?}"),
    }

    service.select(Section::Decade(Decade::Seventies));
    let seventies = decade_page(&service);
    assert_eq!(
        seventies.map,
        MapView::Unavailable {
            message: LOCATION_UNAVAILABLE
        }
    );
    assert!(seventies.map.points().is_empty());
}

#[test]
fn empty_decade_shows_notice() {
    let mut service = service();
    service.select(Section::Decade(Decade::Fifties));
    let page = decade_page(&service);

    assert_eq!(page.record_count, 0);
    assert!(page.notice.is_some());
    assert!(page.gallery.tiles.is_empty());
    assert!(page.projects.items.is_empty());
    assert!(matches!(page.map, MapView::Unavailable { .. }));
    assert_eq!(page.overview.highlights.len(), 3);
}

#[test]
fn service_navigation_drives_rendered_section() {
    let mut service = service();
    assert!(service.apply(NavAction::Next));
    assert_eq!(service.current_section(), Section::Decade(Decade::Forties));
    assert_eq!(service.previous(), None);
    assert_eq!(service.next(), Some(Section::Decade(Decade::Fifties)));

    service.select(Section::About);
    let view = service.render();
    assert!(matches!(view.page, SectionPage::About(_)));
    assert!(view.controls.next.is_none());

    service.home();
    assert_eq!(service.render().section, Section::Home);
    assert_eq!(service.filter(Decade::Forties).len(), 4);
}

#[test]
fn page_view_serializes_with_stable_tags() {
    let mut service = service();
    service.select(Section::Decade(Decade::Forties));
    let json = serde_json::to_value(service.render()).unwrap();

    assert_eq!(json["section"], "1940s");
    assert_eq!(json["page"]["page"], "decade");
    assert_eq!(json["page"]["decade"], "1940s");
    assert_eq!(json["page"]["map"]["state"], "ready");
    assert_eq!(json["page"]["gallery"]["tiles"][1]["image"]["state"], "missing");
    assert_eq!(json["controls"]["previous"], serde_json::Value::Null);
    assert_eq!(json["controls"]["next"]["target"], "1950s");
}

#[test]
fn filesystem_source_drives_gallery_availability() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/council.jpg"), b"jpg").unwrap();

    let mut service = ArchiveService::new(
        sample_records(),
        FsImageSource::with_root(dir.path()),
        MapSettings::default(),
    );
    service.select(Section::Decade(Decade::Forties));
    let SectionPage::Decade(page) = service.render().page else {
        panic!("expected decade page");
    };

    let ready = page
        .gallery
        .tiles
        .iter()
        .filter(|tile| tile.image.is_ready())
        .count();
    assert_eq!(ready, 1);
}

#[test]
fn infinite_coordinates_are_skipped_and_midpoint_stays_finite() {
    let mut station = Record::new(Decade::Fifties, "Railway Station", "images/station.jpg");
    station.location = Some("18.53,73.87".to_string());
    let mut north = Record::new(Decade::Fifties, "North Gate", "images/north.jpg");
    north.location = Some("inf,73.8".to_string());
    let mut south = Record::new(Decade::Fifties, "South Gate", "images/south.jpg");
    south.location = Some("-inf,73.8".to_string());

    let view = archive_core::view::build_map_view(
        [&station, &north, &south],
        &MapSettings::default(),
    );
    let MapView::Ready { scene, skipped, .. } = &view else {
        panic!("expected ready map, got {view:?}");
    };
    assert_eq!(scene.points.len(), 1);
    assert_eq!(scene.points[0].title, "Railway Station");
    assert!((scene.initial_view.latitude - 18.53).abs() < 1e-9);
    assert!((scene.initial_view.longitude - 73.87).abs() < 1e-9);
    assert_eq!(
        skipped
            .iter()
            .map(|entry| (entry.title.as_str(), &entry.issue))
            .collect::<Vec<_>>(),
        vec![
            ("North Gate", &LocationIssue::NotFinite),
            ("South Gate", &LocationIssue::NotFinite),
        ]
    );

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["scene"]["initial_view"]["latitude"], 18.53);
    assert_eq!(json["skipped"][0]["issue"]["kind"], "not_finite");
}

#[test]
fn infinite_pair_still_parses_without_map_context() {
    assert_eq!(
        archive_core::parse_location(Some("inf,73.8")),
        Some((f64::INFINITY, 73.8))
    );
}

#[test]
fn session_resumes_from_saved_navigation_state() {
    let mut first = service();
    first.select(Section::Decade(Decade::Seventies));
    let saved = *first.navigation();
    assert_eq!(saved.current(), Section::Decade(Decade::Seventies));

    let images = KnownImages(BTreeSet::from(["images/coop.jpg"]));
    let mut resumed = ArchiveService::with_state(
        Arc::from(first.records().to_vec()),
        images,
        MapSettings::default(),
        saved,
    );
    assert_eq!(resumed.records(), first.records());
    assert_eq!(resumed.current_section(), Section::Decade(Decade::Seventies));
    assert_eq!(decade_page(&resumed).gallery.tiles.len(), 1);

    assert_eq!(resumed.next(), Some(Section::Decade(Decade::EightiesNineties)));
    assert_eq!(first.current_section(), Section::Decade(Decade::Seventies));
    assert_eq!(
        *resumed.navigation(),
        NavigationState::at(Section::Decade(Decade::EightiesNineties))
    );
}
