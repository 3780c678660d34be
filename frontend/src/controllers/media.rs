//! Playback rules shared by the video widgets. The media elements own the
//! actual paused/muted state, these helpers only decide what to do with it.

/// Showcase tile that keeps playing regardless of what else starts.
pub const ALWAYS_ON_TILE: &str = "autoVid";

/// `display` value for an icon that is shown when `active`.
pub fn icon_display(active: bool, shown: &'static str) -> &'static str {
    if active {
        shown
    } else {
        "none"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayPauseIcons {
    pub play: &'static str,
    pub pause: &'static str,
}

impl PlayPauseIcons {
    pub fn for_playing(playing: bool, shown: &'static str) -> Self {
        PlayPauseIcons {
            play: icon_display(!playing, shown),
            pause: icon_display(playing, shown),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeIcons {
    pub unmuted: &'static str,
    pub muted: &'static str,
}

impl VolumeIcons {
    pub fn for_muted(muted: bool, shown: &'static str) -> Self {
        VolumeIcons {
            unmuted: icon_display(!muted, shown),
            muted: icon_display(muted, shown),
        }
    }
}

/// Videos that have to pause before `target` starts. The always-on tile is
/// never in the list.
pub fn videos_to_pause<'a, I>(ids: I, target: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .filter(|id| *id != target && *id != ALWAYS_ON_TILE)
        .collect()
}

/// What a video needs once it is in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountPlayback {
    Leave,
    Mute,
    MuteAndPlay,
}

/// A declared `muted` attribute has to be pushed into the element, and a
/// declared `autoplay` that is still paused gets another try once muted.
pub fn mount_playback(declared_muted: bool, declared_autoplay: bool, paused: bool) -> MountPlayback {
    match (declared_muted, declared_autoplay && paused) {
        (false, _) => MountPlayback::Leave,
        (true, false) => MountPlayback::Mute,
        (true, true) => MountPlayback::MuteAndPlay,
    }
}

/// Deferred `src` of a video or iframe. Hands the source out exactly once.
#[derive(Clone, Debug, Default)]
pub struct LazySource {
    pending: Option<String>,
    loaded: bool,
}

impl LazySource {
    pub fn new(data_src: Option<String>) -> Self {
        LazySource {
            pending: data_src.filter(|src| !src.is_empty()),
            loaded: false,
        }
    }

    pub fn on_intersect(&mut self, intersecting: bool) -> Option<String> {
        if !intersecting || self.loaded {
            return None;
        }
        self.loaded = true;
        self.pending.take()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LazyConfig {
    pub selector: &'static str,
    pub root_margin: &'static str,
    /// Start playback once the source is in.
    pub autoplay: bool,
    /// Raise opacity to 1 on the first `load` event.
    pub fade_in: bool,
}

pub const LAZY_IFRAMES: LazyConfig = LazyConfig {
    selector: ".lazy-iframe",
    root_margin: "200px",
    autoplay: false,
    fade_in: true,
};

pub const LAZY_VIDEOS: LazyConfig = LazyConfig {
    selector: "video.lazy-video, video[data-src]",
    root_margin: "0px",
    autoplay: true,
    fade_in: false,
};

/// `m:ss`, seconds rounded to the nearest whole second.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    if duration > 0.0 {
        Some((current / duration * 100.0).clamp(0.0, 100.0))
    } else {
        None
    }
}

/// Fraction of a progress bar hit by a click at `client_x`.
pub fn seek_fraction(client_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if bar_width <= 0.0 {
        return 0.0;
    }
    ((client_x - bar_left) / bar_width).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn starting_b_pauses_a_but_not_the_always_on_tile() {
        let mut playing: HashMap<&str, bool> =
            [("vidA", true), ("vidB", false), (ALWAYS_ON_TILE, true)].into_iter().collect();

        let ids: Vec<&str> = vec!["vidA", "vidB", ALWAYS_ON_TILE];
        for id in videos_to_pause(ids.iter().copied(), "vidB") {
            playing.insert(id, false);
        }
        playing.insert("vidB", true);

        assert!(!playing["vidA"]);
        assert!(playing["vidB"]);
        assert!(playing[ALWAYS_ON_TILE]);
    }

    #[test]
    fn muted_autoplay_is_retried_only_while_paused() {
        assert_eq!(mount_playback(true, true, true), MountPlayback::MuteAndPlay);
        assert_eq!(mount_playback(true, true, false), MountPlayback::Mute);
        assert_eq!(mount_playback(true, false, true), MountPlayback::Mute);
    }

    #[test]
    fn videos_without_muted_are_left_alone() {
        // unmuted autoplay is the browser's call
        assert_eq!(mount_playback(false, true, true), MountPlayback::Leave);
        assert_eq!(mount_playback(false, false, true), MountPlayback::Leave);
    }

    #[test]
    fn lazy_source_is_set_exactly_once() {
        let mut lazy = LazySource::new(Some("/assets/reel.mp4".to_string()));
        assert_eq!(lazy.on_intersect(false), None);
        assert!(!lazy.is_loaded());

        assert_eq!(lazy.on_intersect(true).as_deref(), Some("/assets/reel.mp4"));
        assert_eq!(lazy.on_intersect(true), None);
        assert_eq!(lazy.on_intersect(false), None);
        assert!(lazy.is_loaded());
    }

    #[test]
    fn only_iframes_fade_in_and_only_videos_autoplay() {
        assert!(LAZY_IFRAMES.fade_in);
        assert!(!LAZY_IFRAMES.autoplay);
        assert!(LAZY_VIDEOS.autoplay);
        assert!(!LAZY_VIDEOS.fade_in);
    }

    #[test]
    fn lazy_source_without_data_src_only_marks_loaded() {
        let mut lazy = LazySource::new(Some(String::new()));
        assert_eq!(lazy.on_intersect(true), None);
        assert!(lazy.is_loaded());
    }

    #[test]
    fn time_is_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.4), "0:09");
        assert_eq!(format_time(59.6), "1:00");
        assert_eq!(format_time(754.0), "12:34");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn seek_fraction_is_clamped() {
        assert_eq!(seek_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(seek_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(seek_fraction(400.0, 100.0, 200.0), 1.0);
        assert_eq!(seek_fraction(10.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn progress_needs_a_known_duration() {
        assert_eq!(progress_percent(5.0, 0.0), None);
        assert_eq!(progress_percent(30.0, 120.0), Some(25.0));
    }

    #[test]
    fn icons_mirror_state() {
        assert_eq!(
            PlayPauseIcons::for_playing(true, "inline"),
            PlayPauseIcons { play: "none", pause: "inline" }
        );
        assert_eq!(
            VolumeIcons::for_muted(true, "inline-block"),
            VolumeIcons { unmuted: "none", muted: "inline-block" }
        );
    }
}
