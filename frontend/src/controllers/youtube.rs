use std::collections::{HashSet, VecDeque};
use serde::Serialize;

pub const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";
pub const PROGRESS_POLL_MS: u32 = 500;
const LITE_DEFAULT_PARAMS: &str = "autoplay=1&rel=0&modestbranding=1&iv_load_policy=3&controls=1";

/// Player states reported by the IFrame API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlayerState {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(PlayerState::Unstarted),
            0 => Some(PlayerState::Ended),
            1 => Some(PlayerState::Playing),
            2 => Some(PlayerState::Paused),
            3 => Some(PlayerState::Buffering),
            5 => Some(PlayerState::Cued),
            _ => None,
        }
    }
}

/// Element ids of the custom controls around one embed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerControlIds {
    pub card: String,
    pub play_icon: String,
    pub pause_icon: String,
    pub play_pause_btn: String,
    pub mute_btn: String,
    pub vol_up_icon: String,
    pub vol_mute_icon: String,
    pub progress_bar: String,
    pub progress_container: String,
    pub current_time: String,
    pub duration: String,
    pub fullscreen_btn: String,
}

impl PlayerControlIds {
    pub fn for_suffix(suffix: &str) -> Self {
        PlayerControlIds {
            card: format!("yt-card-{}", suffix),
            play_icon: format!("play-icon-{}", suffix),
            pause_icon: format!("pause-icon-{}", suffix),
            play_pause_btn: format!("play-pause-{}", suffix),
            mute_btn: format!("mute-{}", suffix),
            vol_up_icon: format!("vol-up-{}", suffix),
            vol_mute_icon: format!("vol-mute-{}", suffix),
            progress_bar: format!("progress-bar-{}", suffix),
            progress_container: format!("progress-container-{}", suffix),
            current_time: format!("current-time-{}", suffix),
            duration: format!("duration-{}", suffix),
            fullscreen_btn: format!("fullscreen-{}", suffix),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSlot {
    pub element_id: String,
    pub video_id: String,
    pub controls: PlayerControlIds,
}

impl PlayerSlot {
    pub fn new(suffix: &str, video_id: &str) -> Self {
        PlayerSlot {
            element_id: format!("player-{}", suffix),
            video_id: video_id.to_string(),
            controls: PlayerControlIds::for_suffix(suffix),
        }
    }

    pub fn player_vars(&self) -> PlayerVars {
        PlayerVars {
            playsinline: 1,
            controls: 0,
            rel: 0,
            disablekb: 1,
            fs: 0,
            modestbranding: 1,
            r#loop: 1,
            // looping a single video needs it listed as its own playlist
            playlist: self.video_id.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerVars {
    pub playsinline: u8,
    pub controls: u8,
    pub rel: u8,
    pub disablekb: u8,
    pub fs: u8,
    pub modestbranding: u8,
    pub r#loop: u8,
    pub playlist: String,
}

/// Tracks which embeds have players, and holds requests made before the
/// external API finished loading.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    script_requested: bool,
    api_ready: bool,
    pending: VecDeque<PlayerSlot>,
    constructed: HashSet<String>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time only: the API script is injected once per page.
    pub fn needs_script(&mut self) -> bool {
        if self.script_requested || self.api_ready {
            return false;
        }
        self.script_requested = true;
        true
    }

    /// Asks for a player. Returns the slot when it can be built right now.
    pub fn request(&mut self, slot: PlayerSlot) -> Option<PlayerSlot> {
        if self.constructed.contains(&slot.element_id) {
            return None;
        }
        if !self.api_ready {
            if !self.pending.iter().any(|p| p.element_id == slot.element_id) {
                self.pending.push_back(slot);
            }
            return None;
        }
        self.constructed.insert(slot.element_id.clone());
        Some(slot)
    }

    /// API loaded: everything queued so far, oldest first.
    pub fn mark_ready(&mut self) -> Vec<PlayerSlot> {
        self.api_ready = true;
        let mut ready = Vec::with_capacity(self.pending.len());
        while let Some(slot) = self.pending.pop_front() {
            if self.constructed.insert(slot.element_id.clone()) {
                ready.push(slot);
            }
        }
        ready
    }

    pub fn is_ready(&self) -> bool {
        self.api_ready
    }

    pub fn is_constructed(&self, element_id: &str) -> bool {
        self.constructed.contains(element_id)
    }

    /// Lets a slot be built again after its component unmounted.
    pub fn release(&mut self, element_id: &str) {
        self.constructed.remove(element_id);
        self.pending.retain(|p| p.element_id != element_id);
    }
}

/// Click-to-load facade in front of an embed.
#[derive(Clone, Debug, Default)]
pub struct LiteEmbed {
    loaded: bool,
}

impl LiteEmbed {
    /// Embed URL on the first activation, `None` afterwards.
    pub fn activate(&mut self, video_id: &str, params: Option<&str>) -> Option<String> {
        if self.loaded || video_id.is_empty() {
            return None;
        }
        self.loaded = true;
        Some(embed_url(video_id, params))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

pub fn embed_url(video_id: &str, params: Option<&str>) -> String {
    format!(
        "https://www.youtube.com/embed/{}?{}",
        video_id,
        params.filter(|p| !p.is_empty()).unwrap_or(LITE_DEFAULT_PARAMS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_wait_for_api_and_drain_in_order() {
        let mut registry = PlayerRegistry::new();
        assert_eq!(registry.request(PlayerSlot::new("roa", "olRQfKtTZ0g")), None);
        assert_eq!(registry.request(PlayerSlot::new("family", "_6JXT_ipYjY")), None);
        assert_eq!(registry.request(PlayerSlot::new("marco", "ZjYrD7jlZPw")), None);

        let ready: Vec<String> = registry.mark_ready().into_iter().map(|s| s.element_id).collect();
        assert_eq!(ready, vec!["player-roa", "player-family", "player-marco"]);
        assert!(registry.is_constructed("player-family"));
    }

    #[test]
    fn same_slot_is_never_built_twice() {
        let mut registry = PlayerRegistry::new();
        registry.request(PlayerSlot::new("roa", "olRQfKtTZ0g"));
        registry.request(PlayerSlot::new("roa", "olRQfKtTZ0g"));
        assert_eq!(registry.mark_ready().len(), 1);

        assert_eq!(registry.request(PlayerSlot::new("roa", "olRQfKtTZ0g")), None);
        assert!(registry.request(PlayerSlot::new("thaman", "H-52-y53Txc")).is_some());
        assert_eq!(registry.request(PlayerSlot::new("thaman", "H-52-y53Txc")), None);
    }

    #[test]
    fn released_slot_can_be_rebuilt() {
        let mut registry = PlayerRegistry::new();
        registry.mark_ready();
        assert!(registry.request(PlayerSlot::new("roa", "x")).is_some());
        registry.release("player-roa");
        assert!(registry.request(PlayerSlot::new("roa", "x")).is_some());
    }

    #[test]
    fn script_is_requested_once() {
        let mut registry = PlayerRegistry::new();
        assert!(registry.needs_script());
        assert!(!registry.needs_script());
    }

    #[test]
    fn control_ids_follow_suffix() {
        let slot = PlayerSlot::new("crocodile", "EInPqM5l5ac");
        assert_eq!(slot.element_id, "player-crocodile");
        assert_eq!(slot.controls.progress_container, "progress-container-crocodile");
        assert_eq!(slot.player_vars().playlist, "EInPqM5l5ac");
        assert_eq!(PlayerState::from_code(1), Some(PlayerState::Playing));
        assert_eq!(PlayerState::from_code(4), None);
    }

    #[test]
    fn lite_embed_loads_once() {
        let mut lite = LiteEmbed::default();
        assert_eq!(
            lite.activate("abc123", None).as_deref(),
            Some("https://www.youtube.com/embed/abc123?autoplay=1&rel=0&modestbranding=1&iv_load_policy=3&controls=1")
        );
        assert_eq!(lite.activate("abc123", None), None);
        assert!(lite.is_loaded());
    }

    #[test]
    fn lite_embed_needs_video_id() {
        let mut lite = LiteEmbed::default();
        assert_eq!(lite.activate("", Some("autoplay=1")), None);
        assert!(!lite.is_loaded());
    }
}
