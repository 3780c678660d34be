use yew::prelude::*;
use web_sys::HtmlMediaElement;

use crate::controllers::media::{PlayPauseIcons, VolumeIcons};
use crate::dom::media::{element_by_id, play, settle_declared_videos, Listener};

#[derive(Properties, PartialEq)]
pub struct VideoButtonProps {
    /// Id of the `<video>` the button drives.
    pub video: AttrValue,
}

fn bound_video(id: &str) -> Option<HtmlMediaElement> {
    element_by_id::<HtmlMediaElement>(id)
}

/// Pushes the declared `muted` flag of the page's videos into the elements
/// once they are mounted, then retries their autoplay.
#[hook]
pub fn use_muted_autoplay() {
    use_effect_with_deps(|_| {
        settle_declared_videos();
        || ()
    }, ());
}

#[function_component(PlayPauseButton)]
pub fn play_pause_button(props: &VideoButtonProps) -> Html {
    let playing = use_state(|| false);

    {
        // autoplaying videos start in the pause-icon state
        let playing = playing.clone();
        use_effect_with_deps(move |video| {
            let mut listeners = Vec::new();
            if let Some(media) = bound_video(video) {
                playing.set(!media.paused());
                // playback may start after this effect, e.g. a retried autoplay
                for event in ["play", "pause"] {
                    let playing = playing.clone();
                    let watched = media.clone();
                    listeners.push(Listener::new(&media, event, move || playing.set(!watched.paused())));
                }
            }
            move || drop(listeners)
        }, props.video.clone());
    }

    let onclick = {
        let playing = playing.clone();
        let video = props.video.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(media) = bound_video(&video) else {
                return;
            };
            if media.paused() {
                play(&media, "Video play prevented");
                playing.set(true);
            } else {
                let _ = media.pause();
                playing.set(false);
            }
        })
    };

    let icons = PlayPauseIcons::for_playing(*playing, "inline");

    html! {
        <button class="play-pause-btn" data-video={props.video.clone()} aria-label="Play or pause" {onclick}>
            <i class="play-icon fa-solid fa-play" style={format!("display: {}", icons.play)}></i>
            <i class="pause-icon fa-solid fa-pause" style={format!("display: {}", icons.pause)}></i>
        </button>
    }
}

#[function_component(MuteButton)]
pub fn mute_button(props: &VideoButtonProps) -> Html {
    let muted = use_state(|| true);

    {
        let muted = muted.clone();
        use_effect_with_deps(move |video| {
            let mut listener = None;
            if let Some(media) = bound_video(video) {
                muted.set(media.muted());
                let muted = muted.clone();
                let watched = media.clone();
                listener = Some(Listener::new(&media, "volumechange", move || muted.set(watched.muted())));
            }
            move || drop(listener)
        }, props.video.clone());
    }

    let onclick = {
        let muted = muted.clone();
        let video = props.video.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(media) = bound_video(&video) {
                let now_muted = !media.muted();
                media.set_muted(now_muted);
                muted.set(now_muted);
            }
        })
    };

    let icons = VolumeIcons::for_muted(*muted, "inline");

    html! {
        <button class="mute-unmute-btn" data-video={props.video.clone()} aria-label="Mute or unmute" {onclick}>
            <i class="unmute-icon fa-solid fa-volume-high" style={format!("display: {}", icons.unmuted)}></i>
            <i class="mute-icon fa-solid fa-volume-xmark" style={format!("display: {}", icons.muted)}></i>
        </button>
    }
}
