//! Bindings for the YouTube IFrame API, loaded on demand from its script.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Object, Reflect};

use crate::controllers::youtube::{PlayerSlot, IFRAME_API_SRC};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = YT, js_name = Player)]
    pub type YtPlayer;

    #[wasm_bindgen(constructor, js_namespace = YT, js_class = "Player", catch)]
    fn new(element_id: &str, options: &JsValue) -> Result<YtPlayer, JsValue>;

    #[wasm_bindgen(method, js_name = playVideo)]
    pub fn play_video(this: &YtPlayer);

    #[wasm_bindgen(method, js_name = pauseVideo)]
    pub fn pause_video(this: &YtPlayer);

    #[wasm_bindgen(method)]
    pub fn mute(this: &YtPlayer);

    #[wasm_bindgen(method, js_name = unMute)]
    pub fn un_mute(this: &YtPlayer);

    #[wasm_bindgen(method, js_name = isMuted)]
    pub fn is_muted(this: &YtPlayer) -> bool;

    #[wasm_bindgen(method, js_name = getPlayerState)]
    pub fn get_player_state(this: &YtPlayer) -> i32;

    #[wasm_bindgen(method, js_name = getCurrentTime)]
    pub fn get_current_time(this: &YtPlayer) -> f64;

    #[wasm_bindgen(method, js_name = getDuration)]
    pub fn get_duration(this: &YtPlayer) -> f64;

    #[wasm_bindgen(method, js_name = seekTo)]
    pub fn seek_to(this: &YtPlayer, seconds: f64, allow_seek_ahead: bool);

    #[wasm_bindgen(method)]
    pub fn destroy(this: &YtPlayer);
}

/// The `YT.Player` constructor is present, the API is usable.
pub fn api_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("YT"))
        .ok()
        .filter(|yt| !yt.is_undefined())
        .and_then(|yt| Reflect::get(&yt, &JsValue::from_str("Player")).ok())
        .map(|player| !player.is_undefined())
        .unwrap_or(false)
}

/// Injects the API script and registers the global ready callback.
pub fn load_api(on_ready: Closure<dyn FnMut()>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    Reflect::set(&window, &JsValue::from_str("onYouTubeIframeAPIReady"), on_ready.as_ref())?;
    // the API calls the global by name at an unknown later point
    on_ready.forget();

    let script: web_sys::HtmlScriptElement = document.create_element("script")?.unchecked_into();
    script.set_src(IFRAME_API_SRC);
    match document.get_elements_by_tag_name("script").item(0).and_then(|first| first.parent_node().map(|p| (first, p))) {
        Some((first, parent)) => {
            parent.insert_before(&script, Some(&*first))?;
        }
        None => {
            document
                .head()
                .ok_or_else(|| JsValue::from_str("no head"))?
                .append_child(&script)?;
        }
    }
    Ok(())
}

pub struct PlayerEvents {
    pub on_ready: Closure<dyn FnMut(JsValue)>,
    pub on_state_change: Closure<dyn FnMut(JsValue)>,
}

/// Builds a player for `slot`. The closures must outlive the player.
pub fn create_player(slot: &PlayerSlot, events: &PlayerEvents) -> Result<YtPlayer, JsValue> {
    let vars = serde_wasm_bindgen::to_value(&slot.player_vars())?;

    let js_events = Object::new();
    Reflect::set(&js_events, &"onReady".into(), events.on_ready.as_ref())?;
    Reflect::set(&js_events, &"onStateChange".into(), events.on_state_change.as_ref())?;

    let options = Object::new();
    Reflect::set(&options, &"height".into(), &"100%".into())?;
    Reflect::set(&options, &"width".into(), &"100%".into())?;
    Reflect::set(&options, &"videoId".into(), &JsValue::from_str(&slot.video_id))?;
    Reflect::set(&options, &"playerVars".into(), &vars)?;
    Reflect::set(&options, &"events".into(), &js_events)?;

    YtPlayer::new(&slot.element_id, &options)
}

/// `event.data` of an onStateChange event.
pub fn event_state(event: &JsValue) -> Option<i32> {
    Reflect::get(event, &"data".into())
        .ok()
        .and_then(|data| data.as_f64())
        .map(|code| code as i32)
}
