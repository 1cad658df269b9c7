//! Archive browsing session.
//!
//! # Responsibility
//! - Own one navigation state and the shared read-only record table.
//! - Re-derive the full page for the current section on every interaction.
//!
//! # Invariants
//! - Records are never mutated through the service.
//! - Navigation changes only through `select/previous/next/home/apply`.

use crate::assets::ImageSource;
use crate::config::MapSettings;
use crate::filter::filter_by_decade;
use crate::model::record::{Decade, Record};
use crate::model::section::Section;
use crate::nav::{NavAction, NavControls, NavigationState};
use crate::view::page::{render_section, PageView, Sidebar};
use std::sync::Arc;

/// Session facade over records, navigation and images.
pub struct ArchiveService<S: ImageSource> {
    records: Arc<[Record]>,
    nav: NavigationState,
    images: S,
    map: MapSettings,
}

impl<S: ImageSource> ArchiveService<S> {
    /// Creates a session starting at Home.
    pub fn new(records: Arc<[Record]>, images: S, map: MapSettings) -> Self {
        Self::with_state(records, images, map, NavigationState::new())
    }

    /// Creates a session resuming from an existing navigation state.
    pub fn with_state(
        records: Arc<[Record]>,
        images: S,
        map: MapSettings,
        nav: NavigationState,
    ) -> Self {
        Self {
            records,
            nav,
            images,
            map,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn images(&self) -> &S {
        &self.images
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn current_section(&self) -> Section {
        self.nav.current()
    }

    pub fn select(&mut self, section: Section) {
        self.nav.select(section);
    }

    pub fn previous(&mut self) -> Option<Section> {
        self.nav.previous()
    }

    pub fn next(&mut self) -> Option<Section> {
        self.nav.next()
    }

    pub fn home(&mut self) {
        self.nav.home();
    }

    /// Applies one shell action; returns whether the section changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        self.nav.apply(action)
    }

    /// Records of `decade` in source order.
    pub fn filter(&self, decade: Decade) -> Vec<Record> {
        filter_by_decade(&self.records, decade)
    }

    pub fn controls(&self) -> NavControls {
        NavControls::for_state(&self.nav)
    }

    /// Full view for the current section.
    pub fn render(&self) -> PageView {
        let section = self.nav.current();
        PageView {
            section,
            sidebar: Sidebar::for_section(section),
            page: render_section(section, &self.records, &self.images, &self.map),
            controls: self.controls(),
        }
    }
}
