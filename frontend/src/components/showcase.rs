use yew::prelude::*;
use web_sys::HtmlMediaElement;

use crate::controllers::media::{videos_to_pause, ALWAYS_ON_TILE};
use crate::dom::media::{element_by_id, play};

#[derive(Clone, PartialEq)]
pub struct ShowcaseTile {
    pub id: AttrValue,
    pub src: AttrValue,
    pub poster: Option<AttrValue>,
    pub title: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub tiles: Vec<ShowcaseTile>,
}

/// Grid of showcase videos where at most one overlay-started video plays.
#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let playing = use_state(|| None::<AttrValue>);
    let hovered = use_state(|| None::<usize>);

    let ids: Vec<AttrValue> = props.tiles.iter().map(|t| t.id.clone()).collect();

    let tiles = props.tiles.iter().enumerate().map(|(index, tile)| {
        let always_on = tile.id.as_str() == ALWAYS_ON_TILE;
        let is_playing = (*playing).as_ref() == Some(&tile.id);

        let on_overlay = {
            let playing = playing.clone();
            let ids = ids.clone();
            let target = tile.id.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(video) = element_by_id::<HtmlMediaElement>(&target) else {
                    return;
                };
                if video.paused() {
                    for id in videos_to_pause(ids.iter().map(|id| id.as_str()), &target) {
                        if let Some(other) = element_by_id::<HtmlMediaElement>(id) {
                            let _ = other.pause();
                        }
                    }
                    play(&video, "Showcase play prevented");
                    playing.set(Some(target.clone()));
                } else {
                    let _ = video.pause();
                    playing.set(None);
                }
            })
        };

        // native controls can pause the tile too
        let on_pause = {
            let playing = playing.clone();
            let id = tile.id.clone();
            Callback::from(move |_: Event| {
                if (*playing).as_ref() == Some(&id) {
                    playing.set(None);
                }
            })
        };

        let on_enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let on_leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        html! {
            <div class="video-card" key={tile.id.to_string()} onmouseenter={on_enter} onmouseleave={on_leave}>
                <video
                    id={tile.id.clone()}
                    src={tile.src.clone()}
                    poster={tile.poster.clone()}
                    controls={*hovered == Some(index)}
                    playsinline=true
                    preload="metadata"
                    autoplay={always_on}
                    muted={always_on}
                    loop={always_on}
                    onpause={on_pause}
                />
                if !always_on {
                    <button
                        class="play-overlay"
                        data-target={tile.id.clone()}
                        style={if is_playing { "display: none" } else { "display: flex" }}
                        aria-label={format!("Play {}", tile.title)}
                        onclick={on_overlay}
                    >
                        <i class="fa-solid fa-play"></i>
                    </button>
                }
                <div class="video-card-title">{tile.title.clone()}</div>
            </div>
        }
    });

    html! {
        <section class="video-showcase-section">
            <div class="showcase-grid">
                { for tiles }
            </div>
        </section>
    }
}
