//! Card-by-card reveal of the triangle section.
//!
//! Two ways of stepping through the cards exist: wheel gated, where every
//! downward wheel tick reveals one card while page scrolling is locked, and
//! timed, where cards appear on their own once the section is visible. A page
//! picks one of them through [`TriangleConfig`].

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AdvanceMode {
    Wheel { throttle_ms: f64 },
    Timed { first_delay_ms: u32, step_delay_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleConfig {
    /// Visible fraction of the section needed to start revealing.
    pub threshold: f64,
    pub mode: AdvanceMode,
    /// Viewports matching this query skip the gating entirely.
    pub small_viewport_query: &'static str,
}

pub const WHEEL_GATED: TriangleConfig = TriangleConfig {
    threshold: 0.4,
    mode: AdvanceMode::Wheel { throttle_ms: 500.0 },
    small_viewport_query: "(max-width: 768px)",
};

pub const AUTO_ADVANCE: TriangleConfig = TriangleConfig {
    threshold: 0.3,
    mode: AdvanceMode::Timed { first_delay_ms: 0, step_delay_ms: 1000 },
    small_viewport_query: "(max-width: 768px)",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceState {
    Idle,
    /// Number of cards currently shown.
    Revealing(usize),
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardChange {
    Shown(usize),
    Hidden(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Let the browser scroll the page.
    PassThrough,
    /// Swallow the event without changing any card.
    Suppressed,
    Stepped(CardChange),
}

impl WheelOutcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, WheelOutcome::PassThrough)
    }
}

#[derive(Clone, Debug)]
pub struct TriangleSequence {
    total: usize,
    config: TriangleConfig,
    state: SequenceState,
    locked: bool,
    in_view: bool,
    last_step_at: Option<f64>,
}

impl TriangleSequence {
    pub fn new(total: usize, config: TriangleConfig) -> Self {
        TriangleSequence {
            total,
            config,
            state: SequenceState::Idle,
            locked: false,
            in_view: false,
            last_step_at: None,
        }
    }

    /// Small viewports: every card visible, no lock, input ignored.
    pub fn show_all(total: usize, config: TriangleConfig) -> Self {
        TriangleSequence {
            state: SequenceState::Complete,
            ..Self::new(total, config)
        }
    }

    pub fn config(&self) -> &TriangleConfig {
        &self.config
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn shown(&self) -> usize {
        match self.state {
            SequenceState::Idle => 0,
            SequenceState::Revealing(shown) => shown,
            SequenceState::Complete => self.total,
        }
    }

    pub fn is_card_active(&self, index: usize) -> bool {
        index < self.shown()
    }

    pub fn shows_all(&self) -> bool {
        self.state == SequenceState::Complete
    }

    /// Section crossed the visibility threshold.
    ///
    /// The wheel variant shows the first card right away; the timed variant
    /// leaves it to the first timer (see [`Self::next_delay_ms`]).
    pub fn enter_view(&mut self) -> Option<CardChange> {
        self.in_view = true;
        if self.state != SequenceState::Idle {
            return None;
        }

        if self.total == 0 {
            self.state = SequenceState::Complete;
            return None;
        }

        self.state = SequenceState::Revealing(0);
        match self.config.mode {
            AdvanceMode::Wheel { .. } => {
                self.locked = true;
                self.advance()
            }
            AdvanceMode::Timed { .. } => None,
        }
    }

    /// Section left the viewport. Unfinished progress is thrown away.
    ///
    /// Returns true when the cards were reset.
    pub fn leave_view(&mut self) -> bool {
        self.in_view = false;
        match self.state {
            SequenceState::Revealing(_) => {
                self.state = SequenceState::Idle;
                self.locked = false;
                self.last_step_at = None;
                true
            }
            SequenceState::Idle | SequenceState::Complete => false,
        }
    }

    pub fn advance(&mut self) -> Option<CardChange> {
        match self.state {
            SequenceState::Revealing(shown) if shown < self.total => {
                let next = shown + 1;
                if next == self.total {
                    self.state = SequenceState::Complete;
                    self.locked = false;
                } else {
                    self.state = SequenceState::Revealing(next);
                }
                Some(CardChange::Shown(shown))
            }
            _ => None,
        }
    }

    pub fn retreat(&mut self) -> Option<CardChange> {
        let shown = match self.state {
            SequenceState::Idle => return None,
            SequenceState::Revealing(shown) => shown,
            SequenceState::Complete => self.total,
        };
        if shown == 0 {
            return None;
        }

        self.state = SequenceState::Revealing(shown - 1);
        Some(CardChange::Hidden(shown - 1))
    }

    /// Delay before the next timed advance, `None` when nothing is pending.
    pub fn next_delay_ms(&self) -> Option<u32> {
        match (self.config.mode, self.state) {
            (AdvanceMode::Timed { first_delay_ms, step_delay_ms }, SequenceState::Revealing(shown)) => {
                Some(if shown == 0 { first_delay_ms } else { step_delay_ms })
            }
            _ => None,
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) -> WheelOutcome {
        let throttle_ms = match self.config.mode {
            AdvanceMode::Wheel { throttle_ms } => throttle_ms,
            AdvanceMode::Timed { .. } => return WheelOutcome::PassThrough,
        };
        if !self.in_view {
            return WheelOutcome::PassThrough;
        }

        let throttled = self
            .last_step_at
            .map(|last| now_ms - last < throttle_ms)
            .unwrap_or(false);

        if delta_y > 0.0 {
            if !throttled {
                if let Some(change) = self.advance() {
                    self.last_step_at = Some(now_ms);
                    return WheelOutcome::Stepped(change);
                }
            }
            if self.locked {
                WheelOutcome::Suppressed
            } else {
                WheelOutcome::PassThrough
            }
        } else if delta_y < 0.0 && !throttled {
            match self.retreat() {
                Some(change) => {
                    self.last_step_at = Some(now_ms);
                    WheelOutcome::Stepped(change)
                }
                None => WheelOutcome::PassThrough,
            }
        } else {
            WheelOutcome::PassThrough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_timed_advances_reach_complete() {
        let mut seq = TriangleSequence::new(4, AUTO_ADVANCE);
        assert_eq!(seq.enter_view(), None);
        assert_eq!(seq.state(), SequenceState::Revealing(0));

        for i in 0..4 {
            assert_eq!(seq.advance(), Some(CardChange::Shown(i)));
        }
        assert!(seq.shows_all());
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.next_delay_ms(), None);
    }

    #[test]
    fn timed_delays_are_immediate_then_one_second() {
        let mut seq = TriangleSequence::new(3, AUTO_ADVANCE);
        assert_eq!(seq.next_delay_ms(), None);
        seq.enter_view();
        assert_eq!(seq.next_delay_ms(), Some(0));
        seq.advance();
        assert_eq!(seq.next_delay_ms(), Some(1000));
        assert!(!seq.is_locked());
    }

    #[test]
    fn wheel_variant_shows_first_card_and_locks_on_entry() {
        let mut seq = TriangleSequence::new(4, WHEEL_GATED);
        assert_eq!(seq.enter_view(), Some(CardChange::Shown(0)));
        assert!(seq.is_locked());
        assert!(seq.is_card_active(0));
        assert!(!seq.is_card_active(1));
    }

    #[test]
    fn leaving_early_resets_progress() {
        let mut seq = TriangleSequence::new(4, WHEEL_GATED);
        seq.enter_view();
        seq.advance();
        assert_eq!(seq.shown(), 2);

        assert!(seq.leave_view());
        assert_eq!(seq.state(), SequenceState::Idle);
        assert_eq!(seq.shown(), 0);
        assert!(!seq.is_locked());
    }

    #[test]
    fn leaving_early_cancels_timed_advances() {
        let mut seq = TriangleSequence::new(4, AUTO_ADVANCE);
        seq.enter_view();
        seq.advance();
        seq.advance();
        assert_eq!(seq.next_delay_ms(), Some(1000));

        assert!(seq.leave_view());
        assert_eq!(seq.state(), SequenceState::Idle);
        assert_eq!(seq.shown(), 0);
        assert_eq!(seq.next_delay_ms(), None);
        assert_eq!(seq.advance(), None);

        // coming back starts over from the first card
        assert_eq!(seq.enter_view(), None);
        assert_eq!(seq.next_delay_ms(), Some(0));
        assert_eq!(seq.advance(), Some(CardChange::Shown(0)));
    }

    #[test]
    fn leaving_after_completion_keeps_all_cards() {
        let mut seq = TriangleSequence::new(2, WHEEL_GATED);
        seq.enter_view();
        seq.advance();
        assert!(seq.shows_all());

        assert!(!seq.leave_view());
        assert!(seq.shows_all());

        // coming back must not lock the page again
        seq.enter_view();
        assert!(!seq.is_locked());
        assert_eq!(seq.on_wheel(120.0, 10_000.0), WheelOutcome::PassThrough);
    }

    #[test]
    fn wheel_steps_are_throttled() {
        let mut seq = TriangleSequence::new(4, WHEEL_GATED);
        seq.enter_view();

        assert_eq!(seq.on_wheel(100.0, 1_000.0), WheelOutcome::Stepped(CardChange::Shown(1)));
        assert_eq!(seq.on_wheel(100.0, 1_200.0), WheelOutcome::Suppressed);
        assert_eq!(seq.shown(), 2);
        assert_eq!(seq.on_wheel(100.0, 1_500.0), WheelOutcome::Stepped(CardChange::Shown(2)));
    }

    #[test]
    fn downward_input_is_suppressed_until_unlocked() {
        let mut seq = TriangleSequence::new(2, WHEEL_GATED);
        seq.enter_view();
        assert!(seq.on_wheel(100.0, 0.0).prevents_default());
        assert!(seq.shows_all());
        assert!(!seq.is_locked());
        assert_eq!(seq.on_wheel(100.0, 1_000.0), WheelOutcome::PassThrough);
    }

    #[test]
    fn upward_wheel_never_goes_below_zero() {
        let mut seq = TriangleSequence::new(3, WHEEL_GATED);
        seq.enter_view();

        assert_eq!(seq.on_wheel(-80.0, 1_000.0), WheelOutcome::Stepped(CardChange::Hidden(0)));
        assert_eq!(seq.shown(), 0);
        assert_eq!(seq.on_wheel(-80.0, 2_000.0), WheelOutcome::PassThrough);
        assert_eq!(seq.state(), SequenceState::Revealing(0));
    }

    #[test]
    fn upward_wheel_from_complete_hides_last_card() {
        let mut seq = TriangleSequence::new(2, WHEEL_GATED);
        seq.enter_view();
        seq.on_wheel(100.0, 0.0);
        assert!(seq.shows_all());

        assert_eq!(seq.on_wheel(-100.0, 1_000.0), WheelOutcome::Stepped(CardChange::Hidden(1)));
        assert_eq!(seq.state(), SequenceState::Revealing(1));
    }

    #[test]
    fn wheel_outside_view_is_ignored() {
        let mut seq = TriangleSequence::new(3, WHEEL_GATED);
        assert_eq!(seq.on_wheel(100.0, 0.0), WheelOutcome::PassThrough);
        assert_eq!(seq.shown(), 0);
    }

    #[test]
    fn small_viewport_shows_everything_without_gating() {
        let mut seq = TriangleSequence::show_all(4, WHEEL_GATED);
        assert!((0..4).all(|i| seq.is_card_active(i)));
        assert_eq!(seq.enter_view(), None);
        assert!(!seq.is_locked());
        assert_eq!(seq.on_wheel(100.0, 0.0), WheelOutcome::PassThrough);
    }

    #[test]
    fn empty_section_completes_immediately() {
        let mut seq = TriangleSequence::new(0, WHEEL_GATED);
        seq.enter_view();
        assert!(seq.shows_all());
        assert!(!seq.is_locked());
    }
}
