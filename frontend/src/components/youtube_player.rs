use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MouseEvent};

use crate::controllers::media::{format_time, progress_percent, seek_fraction, PlayPauseIcons, VolumeIcons};
use crate::controllers::youtube::{PlayerRegistry, PlayerSlot, PlayerState, PROGRESS_POLL_MS};
use crate::dom::media::{document, element_by_id};
use crate::dom::youtube_api::{api_loaded, create_player, event_state, load_api, PlayerEvents, YtPlayer};

#[derive(Default)]
struct ApiInner {
    registry: RefCell<PlayerRegistry>,
    builders: RefCell<HashMap<String, Callback<PlayerSlot>>>,
}

/// Page-scoped handle on the IFrame API. Cards register their slots here and
/// get called back once the slot can be built.
#[derive(Clone, Default)]
pub struct YouTubeApi {
    inner: Rc<ApiInner>,
}

impl PartialEq for YouTubeApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl YouTubeApi {
    pub fn request(&self, slot: PlayerSlot, build: Callback<PlayerSlot>) {
        self.inner
            .builders
            .borrow_mut()
            .insert(slot.element_id.clone(), build.clone());

        let needs_script = self.inner.registry.borrow_mut().needs_script();
        if needs_script {
            if api_loaded() {
                self.on_api_ready();
            } else {
                let api = self.clone();
                let on_ready = Closure::wrap(Box::new(move || api.on_api_ready()) as Box<dyn FnMut()>);
                if let Err(e) = load_api(on_ready) {
                    log::error!("Failed to load the YouTube API: {:?}", e);
                }
            }
        }

        let ready = self.inner.registry.borrow_mut().request(slot);
        if let Some(slot) = ready {
            build.emit(slot);
        }
    }

    fn on_api_ready(&self) {
        let ready = self.inner.registry.borrow_mut().mark_ready();
        for slot in ready {
            let build = self.inner.builders.borrow().get(&slot.element_id).cloned();
            if let Some(build) = build {
                build.emit(slot);
            }
        }
    }

    pub fn release(&self, element_id: &str) {
        self.inner.registry.borrow_mut().release(element_id);
        self.inner.builders.borrow_mut().remove(element_id);
    }
}

#[derive(Properties, PartialEq)]
pub struct YouTubeProviderProps {
    pub children: Children,
}

#[function_component(YouTubeProvider)]
pub fn youtube_provider(props: &YouTubeProviderProps) -> Html {
    let api = use_memo(|_| YouTubeApi::default(), ());

    html! {
        <ContextProvider<YouTubeApi> context={(*api).clone()}>
            { for props.children.iter() }
        </ContextProvider<YouTubeApi>>
    }
}

struct LivePlayer {
    player: YtPlayer,
    _events: PlayerEvents,
}

type PlayerCell = Rc<RefCell<Option<LivePlayer>>>;

fn with_player(cell: &PlayerCell, f: impl FnOnce(&YtPlayer)) {
    if let Some(live) = cell.borrow().as_ref() {
        f(&live.player);
    }
}

#[derive(Properties, PartialEq)]
pub struct YouTubeCardProps {
    /// Suffix shared by the player and all its control ids.
    pub suffix: AttrValue,
    pub video_id: AttrValue,
    pub title: AttrValue,
}

/// Embedded YouTube video with the site's own controls instead of YouTube's.
#[function_component(YouTubeCard)]
pub fn youtube_card(props: &YouTubeCardProps) -> Html {
    let api = use_context::<YouTubeApi>();
    let frame_ref = use_node_ref();
    let player = use_mut_ref(|| None::<LivePlayer>);
    let playing = use_state_eq(|| false);
    let muted = use_state_eq(|| true);
    let progress = use_state_eq(|| 0.0f64);
    let current_label = use_state_eq(|| format_time(0.0));
    let duration_label = use_state_eq(|| format_time(0.0));

    let slot = PlayerSlot::new(&props.suffix, &props.video_id);

    {
        let frame_ref = frame_ref.clone();
        let player = player.clone();
        let playing = playing.clone();
        let muted = muted.clone();
        let progress = progress.clone();
        let current_label = current_label.clone();
        let duration_label = duration_label.clone();
        use_effect_with_deps(move |slot| {
            let slot = slot.clone();
            let element_id = slot.element_id.clone();

            // the API swaps this node for its iframe, so it stays outside the vdom
            if let (Some(frame), Some(doc)) = (frame_ref.cast::<Element>(), document()) {
                if let Ok(placeholder) = doc.create_element("div") {
                    placeholder.set_id(&element_id);
                    let _ = frame.append_child(&placeholder);
                }
            }

            let build = {
                let player = player.clone();
                let playing = playing.clone();
                let muted = muted.clone();
                Callback::from(move |slot: PlayerSlot| {
                    let on_ready = {
                        let player = player.clone();
                        let muted = muted.clone();
                        Closure::wrap(Box::new(move |_event: JsValue| {
                            with_player(&player, |p| {
                                p.mute();
                                p.play_video();
                                muted.set(p.is_muted());
                            });
                        }) as Box<dyn FnMut(JsValue)>)
                    };
                    let on_state_change = {
                        let playing = playing.clone();
                        Closure::wrap(Box::new(move |event: JsValue| {
                            if let Some(state) = event_state(&event).and_then(PlayerState::from_code) {
                                playing.set(state == PlayerState::Playing);
                            }
                        }) as Box<dyn FnMut(JsValue)>)
                    };
                    let events = PlayerEvents { on_ready, on_state_change };

                    match create_player(&slot, &events) {
                        Ok(yt) => {
                            log::info!("YouTube player {} created", slot.element_id);
                            *player.borrow_mut() = Some(LivePlayer { player: yt, _events: events });
                        }
                        Err(e) => log::error!("Failed to create player {}: {:?}", slot.element_id, e),
                    }
                })
            };

            match &api {
                Some(api) => api.request(slot, build),
                None => log::warn!("YouTubeCard {} rendered outside a YouTubeProvider", element_id),
            }

            let poll = {
                let player = player.clone();
                Interval::new(PROGRESS_POLL_MS, move || {
                    with_player(&player, |p| {
                        let current = p.get_current_time();
                        let duration = p.get_duration();
                        if let Some(percent) = progress_percent(current, duration) {
                            progress.set(percent);
                            current_label.set(format_time(current));
                            duration_label.set(format_time(duration));
                        }
                    });
                })
            };

            move || {
                drop(poll);
                // taking the player also frees its event closures
                if let Some(live) = player.borrow_mut().take() {
                    live.player.destroy();
                }
                if let Some(api) = &api {
                    api.release(&element_id);
                }
            }
        }, slot.clone());
    }

    let on_play_pause = {
        let player = player.clone();
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| {
            with_player(&player, |p| {
                if PlayerState::from_code(p.get_player_state()) == Some(PlayerState::Playing) {
                    p.pause_video();
                    playing.set(false);
                } else {
                    p.play_video();
                    playing.set(true);
                }
            });
        })
    };

    let on_mute = {
        let player = player.clone();
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| {
            with_player(&player, |p| {
                if p.is_muted() {
                    p.un_mute();
                    muted.set(false);
                } else {
                    p.mute();
                    muted.set(true);
                }
            });
        })
    };

    let on_seek = {
        let player = player.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(bar) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let fraction = seek_fraction(e.client_x() as f64, rect.left(), rect.width());
            with_player(&player, |p| {
                let duration = p.get_duration();
                if duration > 0.0 {
                    p.seek_to(fraction * duration, true);
                }
            });
        })
    };

    let on_fullscreen = {
        let card_id = slot.controls.card.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = element_by_id::<Element>(&card_id) {
                if let Err(e) = card.request_fullscreen() {
                    log::info!("Fullscreen refused: {:?}", e);
                }
            }
        })
    };

    let ids = &slot.controls;
    let play_icons = PlayPauseIcons::for_playing(*playing, "inline-block");
    let volume_icons = VolumeIcons::for_muted(*muted, "inline-block");

    html! {
        <div class="yt-card" id={ids.card.clone()}>
            <div class="yt-frame" ref={frame_ref}></div>
            <div class="yt-card-title">{props.title.clone()}</div>
            <div class="yt-controls">
                <button class="yt-btn" id={ids.play_pause_btn.clone()} aria-label="Play or pause" onclick={on_play_pause}>
                    <i id={ids.play_icon.clone()} class="fa-solid fa-play" style={format!("display: {}", play_icons.play)}></i>
                    <i id={ids.pause_icon.clone()} class="fa-solid fa-pause" style={format!("display: {}", play_icons.pause)}></i>
                </button>
                <button class="yt-btn" id={ids.mute_btn.clone()} aria-label="Mute or unmute" onclick={on_mute}>
                    <i id={ids.vol_up_icon.clone()} class="fa-solid fa-volume-high" style={format!("display: {}", volume_icons.unmuted)}></i>
                    <i id={ids.vol_mute_icon.clone()} class="fa-solid fa-volume-xmark" style={format!("display: {}", volume_icons.muted)}></i>
                </button>
                <span class="yt-time" id={ids.current_time.clone()}>{(*current_label).clone()}</span>
                <div class="yt-progress" id={ids.progress_container.clone()} onclick={on_seek}>
                    <div class="yt-progress-bar" id={ids.progress_bar.clone()} style={format!("width: {}%", *progress)}></div>
                </div>
                <span class="yt-time" id={ids.duration.clone()}>{(*duration_label).clone()}</span>
                <button class="yt-btn" id={ids.fullscreen_btn.clone()} aria-label="Fullscreen" onclick={on_fullscreen}>
                    <i class="fa-solid fa-expand"></i>
                </button>
            </div>
        </div>
    }
}
