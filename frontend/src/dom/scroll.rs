use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::controllers::navbar::{fragment, same_page_target};
use crate::dom::media::document;

/// Smoothly brings the element with `id` to the top of the viewport.
/// Returns false when there is no such element.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Scrolls to the fragment of the current location, for pages whose
/// sections only exist after they render.
pub fn scroll_to_location_hash() {
    let hash = web_sys::window().and_then(|w| w.location().hash().ok());
    if let Some(id) = hash.as_deref().and_then(fragment) {
        scroll_to_id(id);
    }
}

/// Document-wide click handler turning same-page fragment links into a
/// smooth scroll. Detaches when dropped.
pub struct AnchorScroll {
    document: web_sys::Document,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl AnchorScroll {
    pub fn attach() -> Option<Self> {
        let document = document()?;
        let callback = Closure::wrap(Box::new(|e: MouseEvent| {
            let Some(link) = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a[href]").ok().flatten())
            else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let path = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            // a missing target falls through to the default jump
            if let Some(id) = same_page_target(&href, &path) {
                if scroll_to_id(id) {
                    e.prevent_default();
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        let _ = document.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        Some(AnchorScroll { document, callback })
    }
}

impl Drop for AnchorScroll {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}
