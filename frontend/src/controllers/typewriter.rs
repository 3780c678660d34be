#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub container: &'static str,
    pub target: &'static str,
    pub interval_ms: u32,
    pub threshold: f64,
}

pub const TEAM_NOTE: TypewriterConfig = TypewriterConfig {
    container: ".about-team-note",
    target: ".about-team-note-text",
    interval_ms: 60,
    threshold: 0.5,
};

pub const ABOUT_HEADLINE: TypewriterConfig = TypewriterConfig {
    container: ".about-typewriter",
    target: ".about-typewriter-text",
    interval_ms: 50,
    threshold: 0.5,
};

/// Character cursor over a fixed string.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    cursor: usize,
    running: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Typewriter {
            chars: text.chars().collect(),
            cursor: 0,
            running: false,
        }
    }

    /// Returns false when already running or already finished.
    pub fn start(&mut self) -> bool {
        if self.running || self.is_complete() {
            return false;
        }
        self.running = true;
        true
    }

    /// Reveals one more character. Stops itself after the last one.
    pub fn tick(&mut self) -> Option<String> {
        if !self.running {
            return None;
        }
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
        if self.cursor == self.chars.len() {
            self.running = false;
        }
        Some(self.displayed())
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.cursor = 0;
    }

    pub fn displayed(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.chars.len() && !self.chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_ticks_type_the_whole_string() {
        let text = "We tell stories";
        let mut tw = Typewriter::new(text);
        assert!(tw.start());

        let mut last = String::new();
        for _ in 0..text.chars().count() {
            last = tw.tick().unwrap();
        }
        assert_eq!(last, text);
        assert!(!tw.is_running());
        assert_eq!(tw.tick(), None);
    }

    #[test]
    fn prefixes_grow_one_char_at_a_time() {
        let mut tw = Typewriter::new("héllo");
        tw.start();
        assert_eq!(tw.tick().as_deref(), Some("h"));
        assert_eq!(tw.tick().as_deref(), Some("hé"));
        assert_eq!(tw.cursor(), 2);
    }

    #[test]
    fn reset_before_completion_clears_everything() {
        let mut tw = Typewriter::new("Studio X");
        tw.start();
        tw.tick();
        tw.tick();
        tw.reset();

        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.cursor(), 0);
        assert!(!tw.is_running());
        assert!(tw.start());
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut tw = Typewriter::new("abc");
        assert!(tw.start());
        tw.tick();
        assert!(!tw.start());
        assert_eq!(tw.cursor(), 1);
    }

    #[test]
    fn finished_text_does_not_restart_until_reset() {
        let mut tw = Typewriter::new("ab");
        tw.start();
        tw.tick();
        tw.tick();
        assert!(tw.is_complete());
        assert!(!tw.start());
        tw.reset();
        assert!(tw.start());
    }
}
