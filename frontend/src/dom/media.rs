use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, EventTarget, HtmlElement, HtmlMediaElement};

use crate::controllers::media::{mount_playback, MountPlayback};

/// Starts playback. Autoplay rejections are logged and otherwise ignored.
pub fn play(media: &HtmlMediaElement, context: &'static str) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::info!("{}: {:?}", context, e);
            }
        }),
        Err(e) => log::info!("{}: {:?}", context, e),
    }
}

/// Sets the live muted flag as well as the default one. A `muted` attribute
/// added by script only touches the default, and browsers judge autoplay by
/// the live flag.
pub fn force_muted(media: &HtmlMediaElement) {
    media.set_default_muted(true);
    media.set_muted(true);
}

/// Makes every `<video muted>` on the page actually muted and retries the
/// autoplay the browser may already have refused.
pub fn settle_declared_videos() {
    for element in query_all("video[muted]") {
        let Ok(media) = element.dyn_into::<HtmlMediaElement>() else {
            continue;
        };
        let action = mount_playback(true, media.has_attribute("autoplay"), media.paused());
        if action != MountPlayback::Leave {
            force_muted(&media);
        }
        if action == MountPlayback::MuteAndPlay {
            play(&media, "Muted autoplay prevented");
        }
    }
}

/// Event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, on_event: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(on_event) as Box<dyn FnMut()>);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Listener {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Pause and rewind to the first frame.
pub fn stop(media: &HtmlMediaElement) {
    let _ = media.pause();
    media.set_current_time(0.0);
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn set_display(element: Option<&Element>, value: &str) {
    if let Some(element) = element {
        set_style(element, "display", value);
    }
}

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn matches_media(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}
