use gloo_console::error as console_error;
use web_sys::{Document, ScrollBehavior as WebScrollBehavior, ScrollIntoViewOptions};

use page::document::{HostDocument, ScrollBehavior};

// WebDocument
//
// the browser document behind the page controller.  outside a browser window there
// is no document, and every operation quietly does nothing
pub struct WebDocument {
    document: Option<Document>,
}

impl WebDocument {
    pub fn new() -> Self {
        WebDocument {
            document: web_sys::window().and_then(|window| window.document()),
        }
    }
}

impl Default for WebDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDocument for WebDocument {
    fn set_root_class(&mut self, class: &str, present: bool) {
        let root = match self.document.as_ref().and_then(|doc| doc.document_element()) {
            Some(val) => val,
            None => return,
        };

        let classes = root.class_list();

        // DomTokenList add/remove are already idempotent
        let result = if present {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };

        result.unwrap_or_else(|err| {
            console_error!(format!("Failed to update root class {class}: {err:?}"))
        })
    }

    fn scroll_into_view(&mut self, anchor: &str, behavior: ScrollBehavior) -> bool {
        let element = match self.document.as_ref().and_then(|doc| doc.get_element_by_id(anchor)) {
            Some(val) => val,
            None => return false,
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => WebScrollBehavior::Smooth,
            ScrollBehavior::Instant => WebScrollBehavior::Instant,
        });

        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
