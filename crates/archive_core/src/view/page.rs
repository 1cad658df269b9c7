//! Whole-page composition for each section.

use crate::assets::ImageSource;
use crate::config::MapSettings;
use crate::content::pages;
use crate::content::{decade_highlights, decade_overview};
use crate::filter::iter_decade;
use crate::model::record::{Decade, Record};
use crate::model::section::Section;
use crate::nav::NavControls;
use crate::view::gallery::{build_gallery, GalleryView};
use crate::view::map::{build_map_view, MapView};
use crate::view::projects::{build_projects, ProjectsView};
use crate::view::ImageSlot;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub logo: ImageSlot,
    pub logo_caption: &'static str,
    pub paragraphs: &'static [&'static str],
    pub features: &'static [&'static str],
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub title: &'static str,
    pub intro: &'static str,
    pub goals: &'static [&'static str],
    pub methodology: &'static [&'static str],
    pub contributors: &'static [&'static str],
    pub contact_email: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewView {
    pub heading: String,
    pub text: &'static str,
    pub highlights: &'static [&'static str],
}

/// Decade page with its four tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecadePage {
    pub decade: Decade,
    pub title: String,
    pub record_count: usize,
    /// Informational notice when the decade has no records.
    pub notice: Option<&'static str>,
    pub overview: OverviewView,
    pub gallery: GalleryView,
    pub projects: ProjectsView,
    pub map: MapView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum SectionPage {
    Home(HomePage),
    Decade(DecadePage),
    About(AboutPage),
}

/// Sidebar selector model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub title: &'static str,
    pub intro: &'static str,
    pub select_label: &'static str,
    pub options: Vec<Section>,
    pub selected: Section,
    pub footer: &'static str,
}

impl Sidebar {
    pub fn for_section(selected: Section) -> Self {
        Self {
            title: pages::SIDEBAR_TITLE,
            intro: pages::SIDEBAR_INTRO,
            select_label: pages::SIDEBAR_SELECT_LABEL,
            options: Section::ALL.to_vec(),
            selected,
            footer: pages::SIDEBAR_FOOTER,
        }
    }
}

/// Everything the shell needs to draw one interaction frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub section: Section,
    pub sidebar: Sidebar,
    pub page: SectionPage,
    pub controls: NavControls,
}

/// Composes the page body for `section`.
pub fn render_section<S: ImageSource + ?Sized>(
    section: Section,
    records: &[Record],
    images: &S,
    map: &MapSettings,
) -> SectionPage {
    match section {
        Section::Home => SectionPage::Home(home_page(images)),
        Section::About => SectionPage::About(about_page()),
        Section::Decade(decade) => SectionPage::Decade(decade_page(decade, records, images, map)),
    }
}

fn home_page<S: ImageSource + ?Sized>(images: &S) -> HomePage {
    let logo = if images.exists(pages::HOME_LOGO_PATH) {
        ImageSlot::Ready {
            image_path: pages::HOME_LOGO_PATH.to_string(),
        }
    } else {
        ImageSlot::Missing {
            message: format!("Image not found for {}", pages::HOME_LOGO_CAPTION),
        }
    };

    HomePage {
        title: pages::HOME_TITLE,
        logo,
        logo_caption: pages::HOME_LOGO_CAPTION,
        paragraphs: pages::HOME_PARAGRAPHS,
        features: pages::HOME_FEATURES,
        hint: pages::HOME_HINT,
    }
}

fn about_page() -> AboutPage {
    AboutPage {
        title: pages::ABOUT_TITLE,
        intro: pages::ABOUT_INTRO,
        goals: pages::ABOUT_GOALS,
        methodology: pages::ABOUT_METHODOLOGY,
        contributors: pages::ABOUT_CONTRIBUTORS,
        contact_email: pages::ABOUT_CONTACT,
    }
}

fn decade_page<S: ImageSource + ?Sized>(
    decade: Decade,
    records: &[Record],
    images: &S,
    map: &MapSettings,
) -> DecadePage {
    let scoped = iter_decade(records, decade).collect::<Vec<_>>();

    DecadePage {
        decade,
        title: format!("Pune in the {decade}"),
        record_count: scoped.len(),
        notice: scoped.is_empty().then_some(pages::EMPTY_SECTION_NOTICE),
        overview: OverviewView {
            heading: format!("Overview of the {decade}"),
            text: decade_overview(decade),
            highlights: decade_highlights(decade),
        },
        gallery: build_gallery(scoped.iter().copied(), images),
        projects: build_projects(scoped.iter().copied(), images),
        map: build_map_view(scoped.iter().copied(), map),
    }
}
