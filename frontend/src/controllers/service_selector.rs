//! Service menu on the index page: one service video active at a time.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Pause and rewind to the start.
    Stop(String),
    Play(String),
    Pause(String),
}

#[derive(Clone, Debug, Default)]
pub struct ServiceSelector {
    active: Option<String>,
}

impl ServiceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, service: &str) -> Vec<PlaybackCommand> {
        let mut commands = Vec::with_capacity(2);
        if let Some(previous) = self.active.take() {
            commands.push(PlaybackCommand::Stop(previous));
        }
        commands.push(PlaybackCommand::Play(service.to_string()));
        self.active = Some(service.to_string());
        commands
    }

    /// Tab hidden pauses the current video, tab shown resumes it.
    pub fn on_visibility(&self, hidden: bool) -> Option<PlaybackCommand> {
        let active = self.active.clone()?;
        Some(if hidden {
            PlaybackCommand::Pause(active)
        } else {
            PlaybackCommand::Play(active)
        })
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The placeholder is shown until the first selection.
    pub fn shows_empty_state(&self) -> bool {
        self.active.is_none()
    }
}

pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_stops_the_previous_video() {
        let mut selector = ServiceSelector::new();
        assert_eq!(selector.select("brand"), vec![PlaybackCommand::Play("brand".into())]);
        assert_eq!(
            selector.select("youtube"),
            vec![PlaybackCommand::Stop("brand".into()), PlaybackCommand::Play("youtube".into())]
        );
        assert_eq!(selector.active(), Some("youtube"));
        assert!(!selector.shows_empty_state());
    }

    #[test]
    fn visibility_only_matters_with_an_active_video() {
        let mut selector = ServiceSelector::new();
        assert_eq!(selector.on_visibility(true), None);
        selector.select("avatar");
        assert_eq!(selector.on_visibility(true), Some(PlaybackCommand::Pause("avatar".into())));
        assert_eq!(selector.on_visibility(false), Some(PlaybackCommand::Play("avatar".into())));
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }
}
