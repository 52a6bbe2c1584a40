use tracing::{Level, debug, instrument};

use crate::{
    document::{HostDocument, ScrollBehavior},
    nav::{NavLink, nav_links},
    section::Section,
    theme::{DARK_MARKER_CLASS, Theme},
};

// PageSnapshot
//
// immutable copy of the page state handed to child views.  views never mutate it;
// they call back into the controller instead
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub theme: Theme,
    pub active: Section,
}

impl PageSnapshot {
    pub fn nav_links(&self) -> Vec<NavLink> {
        nav_links(self.active)
    }
}

// PageController
//
// sole owner of the theme and the active section.  the two fields are independent;
// neither operation resets the other.
//
// the theme marker on the document root is an effect of the theme value: it runs once
// in new() and again after every theme change, and since it sets rather than flips
// the class, running it more often than needed is harmless
#[derive(Debug)]
pub struct PageController<D: HostDocument> {
    theme: Theme,
    active: Section,
    document: D,
}

impl<D: HostDocument> PageController<D> {
    pub fn new(document: D) -> Self {
        let mut controller = PageController {
            theme: Theme::default(),
            active: Section::default(),
            document,
        };

        controller.sync_theme();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            theme: self.theme,
            active: self.active,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.sync_theme();
        debug!({ theme = ?self.theme }, "theme changed");
    }

    fn sync_theme(&mut self) {
        self.document
            .set_root_class(DARK_MARKER_CLASS, self.theme.has_marker());
    }

    // the active section is updated first and unconditionally; a missing anchor only
    // means there is nothing to scroll to
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn navigate_to(&mut self, section: Section) {
        self.active = section;

        self.document
            .scroll_into_view(section.id(), ScrollBehavior::Smooth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;

    fn controller() -> PageController<MemoryDocument> {
        PageController::new(MemoryDocument::with_sections())
    }

    #[test]
    fn starts_light_on_home() {
        let page = controller();

        assert_eq!(page.theme(), Theme::Light);
        assert_eq!(page.active_section(), Section::Home);
        assert!(!page.document().has_root_class(DARK_MARKER_CLASS));
        assert!(page.document().scrolls().is_empty());
    }

    #[test]
    fn init_clears_stale_marker() {
        let mut doc = MemoryDocument::with_sections();
        doc.set_root_class(DARK_MARKER_CLASS, true);

        let page = PageController::new(doc);

        assert!(!page.document().has_root_class(DARK_MARKER_CLASS));
    }

    #[test]
    fn marker_tracks_every_toggle() {
        let mut page = controller();

        for _ in 0..7 {
            page.toggle_theme();
            assert_eq!(
                page.document().has_root_class(DARK_MARKER_CLASS),
                page.theme() == Theme::Dark
            );
        }
        assert_eq!(page.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut page = controller();
        let before = page.snapshot();

        page.toggle_theme();
        page.toggle_theme();

        assert_eq!(page.snapshot(), before);
        assert!(!page.document().has_root_class(DARK_MARKER_CLASS));
    }

    #[test]
    fn navigate_scrolls_smoothly() {
        let mut page = controller();

        page.navigate_to(Section::About);

        let scroll = page.document().last_scroll().unwrap();
        assert_eq!(page.active_section(), Section::About);
        assert_eq!(scroll.anchor, "about");
        assert_eq!(scroll.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn missing_anchor_still_updates_active() {
        let mut page = controller();
        page.document_mut().remove_anchor("portfolio");

        page.navigate_to(Section::Portfolio);

        assert_eq!(page.active_section(), Section::Portfolio);
        assert!(page.document().scrolls().is_empty());
    }

    #[test]
    fn same_section_twice_is_accepted() {
        let mut page = controller();

        page.navigate_to(Section::Home);
        page.navigate_to(Section::Home);

        assert_eq!(page.active_section(), Section::Home);
        assert_eq!(page.document().scrolls().len(), 2);
    }

    #[test]
    fn snapshot_nav_links_follow_active() {
        let mut page = controller();
        page.navigate_to(Section::Contact);

        let emphasized: Vec<Section> = page
            .snapshot()
            .nav_links()
            .into_iter()
            .filter(|link| link.emphasized)
            .map(|link| link.section)
            .collect();

        assert_eq!(emphasized, vec![Section::Contact]);
    }
}
