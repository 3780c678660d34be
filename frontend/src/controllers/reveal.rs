//! One-shot entrance animations for elements scrolling into view.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    /// Animation picked from the element's role on the about page.
    Classified,
    /// Plain fade and rise driven by a CSS transition.
    FadeRise,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    pub animated_class: Option<&'static str>,
    pub style: RevealStyle,
}

pub const ABOUT_SECTIONS: RevealConfig = RevealConfig {
    selector: ".about-animate-on-scroll",
    threshold: 0.15,
    root_margin: "0px 0px -50px 0px",
    animated_class: Some("about-animated"),
    style: RevealStyle::Classified,
};

pub const FEATURE_ROWS: RevealConfig = RevealConfig {
    selector: ".feature-row",
    threshold: 0.2,
    root_margin: "0px 0px -100px 0px",
    animated_class: None,
    style: RevealStyle::FadeRise,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealRole {
    HeroContent,
    SolutionPair,
    ComparisonSide { index: usize },
    Default,
}

impl RevealRole {
    pub fn classify<C, P>(has_class: C, parent_has_class: P, index_in_parent: usize) -> Self
    where
        C: Fn(&str) -> bool,
        P: Fn(&str) -> bool,
    {
        if has_class("about-hero-content") {
            RevealRole::HeroContent
        } else if parent_has_class("about-solution-icons") || parent_has_class("about-solution-text") {
            RevealRole::SolutionPair
        } else if has_class("about-comparison-side") {
            RevealRole::ComparisonSide { index: index_in_parent }
        } else {
            RevealRole::Default
        }
    }

    pub fn animation(&self) -> Option<&'static str> {
        match self {
            RevealRole::HeroContent | RevealRole::Default => Some("about-fadeInUp 0.8s ease-out forwards"),
            RevealRole::SolutionPair => Some("about-scaleIn 0.6s ease-out forwards"),
            // the middle child is the "vs" divider and stays put
            RevealRole::ComparisonSide { index: 0 } => Some("about-slideInLeft 0.7s ease-out forwards"),
            RevealRole::ComparisonSide { index: 2 } => Some("about-slideInRight 0.7s ease-out forwards"),
            RevealRole::ComparisonSide { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealEffect {
    pub class: Option<&'static str>,
    pub styles: Vec<(&'static str, &'static str)>,
}

#[derive(Clone, Debug)]
pub struct ScrollReveal {
    config: RevealConfig,
    animated: Vec<bool>,
}

impl ScrollReveal {
    pub fn new(config: RevealConfig, count: usize) -> Self {
        ScrollReveal {
            config,
            animated: vec![false; count],
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Styles applied before observation starts.
    pub fn initial_styles(&self) -> Vec<(&'static str, &'static str)> {
        match self.config.style {
            RevealStyle::Classified => Vec::new(),
            RevealStyle::FadeRise => vec![
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", "opacity 0.8s ease, transform 0.8s ease"),
            ],
        }
    }

    /// Element `index` became visible. `None` once it has already animated.
    pub fn on_visible(&mut self, index: usize, role: RevealRole) -> Option<RevealEffect> {
        let seen = self.animated.get_mut(index)?;
        if *seen {
            return None;
        }
        *seen = true;

        let styles = match self.config.style {
            RevealStyle::Classified => role.animation().map(|a| vec![("animation", a)]).unwrap_or_default(),
            RevealStyle::FadeRise => vec![("opacity", "1"), ("transform", "translateY(0)")],
        };

        Some(RevealEffect {
            class: self.config.animated_class,
            styles,
        })
    }

    pub fn is_animated(&self, index: usize) -> bool {
        self.animated.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(own: &[&str], parent: &[&str], index: usize) -> RevealRole {
        RevealRole::classify(|c| own.contains(&c), |c| parent.contains(&c), index)
    }

    #[test]
    fn classification_follows_element_role() {
        assert_eq!(role(&["about-hero-content"], &[], 0), RevealRole::HeroContent);
        assert_eq!(role(&[], &["about-solution-text"], 3), RevealRole::SolutionPair);
        assert_eq!(
            role(&["about-comparison-side"], &[], 2),
            RevealRole::ComparisonSide { index: 2 }
        );
        assert_eq!(role(&["card"], &["grid"], 1), RevealRole::Default);
    }

    #[test]
    fn comparison_sides_slide_from_their_edge() {
        assert_eq!(
            RevealRole::ComparisonSide { index: 0 }.animation(),
            Some("about-slideInLeft 0.7s ease-out forwards")
        );
        assert_eq!(
            RevealRole::ComparisonSide { index: 2 }.animation(),
            Some("about-slideInRight 0.7s ease-out forwards")
        );
        assert_eq!(RevealRole::ComparisonSide { index: 1 }.animation(), None);
    }

    #[test]
    fn reentering_view_does_not_restart() {
        let mut reveal = ScrollReveal::new(ABOUT_SECTIONS, 2);
        let effect = reveal.on_visible(1, RevealRole::SolutionPair).unwrap();
        assert_eq!(effect.class, Some("about-animated"));
        assert_eq!(effect.styles, vec![("animation", "about-scaleIn 0.6s ease-out forwards")]);

        assert_eq!(reveal.on_visible(1, RevealRole::SolutionPair), None);
        assert!(reveal.is_animated(1));
        assert!(!reveal.is_animated(0));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut reveal = ScrollReveal::new(ABOUT_SECTIONS, 1);
        assert_eq!(reveal.on_visible(5, RevealRole::Default), None);
    }

    #[test]
    fn feature_rows_fade_and_rise() {
        let mut reveal = ScrollReveal::new(FEATURE_ROWS, 1);
        assert_eq!(reveal.initial_styles()[0], ("opacity", "0"));
        let effect = reveal.on_visible(0, RevealRole::Default).unwrap();
        assert_eq!(effect.class, None);
        assert_eq!(effect.styles, vec![("opacity", "1"), ("transform", "translateY(0)")]);
    }
}
