use std::collections::BTreeSet;

use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

// HostDocument
//
// the two things the controller needs from whatever surface it renders into: a
// class list on the root element, and a way to bring a named anchor into view
pub trait HostDocument {
    // adding a present class or removing an absent one is a no-op
    fn set_root_class(&mut self, class: &str, present: bool);

    // returns false if no element carries this id, in which case nothing scrolls
    fn scroll_into_view(&mut self, anchor: &str, behavior: ScrollBehavior) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor: String,
    pub behavior: ScrollBehavior,
}

// MemoryDocument
//
// headless stand-in for the browser document.  it records the root class set and
// every scroll that reached an existing anchor
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    root_classes: BTreeSet<String>,
    anchors: BTreeSet<String>,
    scrolls: Vec<ScrollRequest>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    // a document with one anchor per page section, as the rendered page has
    pub fn with_sections() -> Self {
        Self::with_anchors(Section::ALL.iter().map(|s| s.id()))
    }

    pub fn with_anchors<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryDocument {
            anchors: anchors.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    pub fn root_classes(&self) -> impl Iterator<Item = &str> {
        self.root_classes.iter().map(String::as_str)
    }

    pub fn remove_anchor(&mut self, anchor: &str) {
        self.anchors.remove(anchor);
    }

    pub fn scrolls(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    pub fn last_scroll(&self) -> Option<&ScrollRequest> {
        self.scrolls.last()
    }
}

impl HostDocument for MemoryDocument {
    fn set_root_class(&mut self, class: &str, present: bool) {
        if present {
            self.root_classes.insert(class.to_owned());
        } else {
            self.root_classes.remove(class);
        }
    }

    fn scroll_into_view(&mut self, anchor: &str, behavior: ScrollBehavior) -> bool {
        if !self.anchors.contains(anchor) {
            return false;
        }

        self.scrolls.push(ScrollRequest {
            anchor: anchor.to_owned(),
            behavior,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_class_updates_are_idempotent() {
        let mut doc = MemoryDocument::new();

        doc.set_root_class("dark", true);
        doc.set_root_class("dark", true);
        assert_eq!(doc.root_classes().collect::<Vec<_>>(), vec!["dark"]);

        doc.set_root_class("dark", false);
        doc.set_root_class("dark", false);
        assert!(!doc.has_root_class("dark"));
    }

    #[test]
    fn scroll_requires_anchor() {
        let mut doc = MemoryDocument::with_anchors(["home"]);

        assert!(doc.scroll_into_view("home", ScrollBehavior::Smooth));
        assert!(!doc.scroll_into_view("elsewhere", ScrollBehavior::Smooth));
        assert_eq!(doc.scrolls().len(), 1);
        assert_eq!(doc.last_scroll().unwrap().anchor, "home");
    }

    #[test]
    fn with_sections_has_every_anchor() {
        let mut doc = MemoryDocument::with_sections();

        for section in Section::ALL {
            assert!(doc.scroll_into_view(section.id(), ScrollBehavior::Instant));
        }
    }
}
