use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlMediaElement};

use crate::controllers::media::{LazyConfig, LazySource};
use crate::dom::media::{force_muted, play, query_all, set_style};
use crate::dom::observer::{Visibility, VisibilityObserver};

/// Element that receives the `src`. Videos may keep the deferred source on
/// a `<source data-src>` child instead of on themselves.
fn source_holder(element: &Element) -> Element {
    if element.has_attribute("data-src") {
        return element.clone();
    }
    element
        .query_selector("source[data-src]")
        .ok()
        .flatten()
        .unwrap_or_else(|| element.clone())
}

fn load(element: &Element, src: &str, config: &LazyConfig) {
    let holder = source_holder(element);
    let _ = holder.set_attribute("src", src);

    if let Some(media) = element.dyn_ref::<HtmlMediaElement>() {
        if media.has_attribute("muted") {
            force_muted(media);
        }
        media.load();
        if config.autoplay {
            play(media, "Lazy video autoplay prevented");
        }
    }

    if config.fade_in {
        let target = element.clone();
        let fade_in = Closure::once_into_js(move || set_style(&target, "opacity", "1"));
        // the closure is spent after one call, so the browser must drop it too
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            fade_in.unchecked_ref(),
            &options,
        );
    }
}

/// Defers the sources of every element matching `config.selector` until it
/// comes within `config.root_margin` of the viewport.
#[hook]
pub fn use_lazy_media(config: LazyConfig) {
    use_effect_with_deps(move |config| {
        let config = *config;
        let elements = query_all(config.selector);
        let mut observer_handle = None;

        if !elements.is_empty() {
            let sources: Vec<LazySource> = elements
                .iter()
                .map(|el| LazySource::new(source_holder(el).get_attribute("data-src")))
                .collect();
            let sources = Rc::new(RefCell::new(sources));
            let targets = elements.clone();

            observer_handle = VisibilityObserver::new(0.0, config.root_margin, move |target, visibility, observer| {
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    return;
                };
                let src = sources.borrow_mut()[index].on_intersect(visibility == Visibility::Visible);
                if let Some(src) = src {
                    load(&target, &src, &config);
                }
                if sources.borrow()[index].is_loaded() {
                    observer.unobserve(&target);
                }
            });

            if let Some(observer) = &observer_handle {
                for element in &elements {
                    observer.observe(element);
                }
            }
        }

        move || drop(observer_handle)
    }, config);
}
