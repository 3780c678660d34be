//! Rotating service showcase on the service page.

pub const ROTATE_MS: u32 = 5000;
/// Text is swapped halfway through the fade.
pub const SWAP_CONTENT_MS: u32 = 200;
pub const SETTLE_MS: u32 = 800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub best_for: &'static str,
    pub timeline: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceInfo; 4] = [
    ServiceInfo {
        title: "Strategic Brand Films",
        best_for: "Product Launches | Brand Awareness | High-Performance Ads",
        timeline: "5-7 days",
        description: "Cinematic storytelling that converts. We craft emotionally resonant films that define your market position and drive measurable business outcomes.",
    },
    ServiceInfo {
        title: "YouTube Growth Engine",
        best_for: "Channel Growth | Audience Engagement | Authority Building",
        timeline: "3-5 days",
        description: "Algorithm-optimized content that builds audiences. We engineer videos for the YouTube algorithm without sacrificing soul, every element designed for maximum retention and subscriber growth.",
    },
    ServiceInfo {
        title: "Global AI Avatar Solutions",
        best_for: "Multi-Market Campaigns | Training & Onboarding | Product Demos",
        timeline: "2-4 days",
        description: "Scale your message across 60+ languages. Deploy a consistent, on-brand digital presenter globally in days, not months. Perfect for scaling content across markets without reshoots or travel.",
    },
    ServiceInfo {
        title: "Transformative Learning Content",
        best_for: "E-Learning | Employee Training | Educational Courses",
        timeline: "5-7 days",
        description: "Learning videos that actually stick. We transform complex information into engaging, retention-focused visual stories built for clarity, retention, and behavior change.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceMorph {
    count: usize,
    active: usize,
    displayed: usize,
    animating: bool,
}

impl ServiceMorph {
    pub fn new(count: usize) -> Self {
        ServiceMorph {
            count,
            active: 0,
            displayed: 0,
            animating: false,
        }
    }

    /// Starts the morph towards `index`. The text follows in [`Self::swap_content`].
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.active = index;
        self.animating = true;
        true
    }

    /// Auto rotation continues from whatever was last selected.
    pub fn rotate(&mut self) -> usize {
        if self.count > 0 {
            self.select((self.active + 1) % self.count);
        }
        self.active
    }

    pub fn swap_content(&mut self) {
        self.displayed = self.active;
    }

    pub fn settle(&mut self) {
        self.animating = false;
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_cycles_through_every_service() {
        let mut morph = ServiceMorph::new(SERVICES.len());
        let visited: Vec<usize> = (0..5).map(|_| morph.rotate()).collect();
        assert_eq!(visited, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn content_swaps_after_selection() {
        let mut morph = ServiceMorph::new(SERVICES.len());
        assert!(morph.select(2));
        assert!(morph.is_animating());
        assert_eq!(morph.displayed(), 0);

        morph.swap_content();
        assert_eq!(morph.displayed(), 2);
        morph.settle();
        assert!(!morph.is_animating());
        assert_eq!(morph.rotate(), 3);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut morph = ServiceMorph::new(2);
        assert!(!morph.select(2));
        assert_eq!(morph.active(), 0);
        assert!(!morph.is_animating());
    }
}
