use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use web_sys::Element;

use crate::controllers::reveal::{RevealConfig, RevealRole, ScrollReveal};
use crate::dom::media::{query_all, set_style};
use crate::dom::observer::{Visibility, VisibilityObserver};

fn role_of(element: &Element) -> RevealRole {
    let classes = element.class_list();
    let parent = element.parent_element();
    let index_in_parent = parent
        .as_ref()
        .map(|p| {
            let children = p.children();
            (0..children.length())
                .position(|i| children.item(i).as_ref() == Some(element))
                .unwrap_or(0)
        })
        .unwrap_or(0);

    RevealRole::classify(
        |c| classes.contains(c),
        |c| parent.as_ref().map(|p| p.class_list().contains(c)).unwrap_or(false),
        index_in_parent,
    )
}

/// Animates every element matching `config.selector` the first time it
/// scrolls into view. Runs once per mount of the calling component.
#[hook]
pub fn use_scroll_reveal(config: RevealConfig) {
    use_effect_with_deps(move |config| {
        let elements = query_all(config.selector);
        let mut observer_handle = None;

        if !elements.is_empty() {
            let controller = Rc::new(RefCell::new(ScrollReveal::new(*config, elements.len())));
            for element in &elements {
                for (property, value) in controller.borrow().initial_styles() {
                    set_style(element, property, value);
                }
            }

            let targets = elements.clone();
            let observer = VisibilityObserver::new(
                config.threshold,
                config.root_margin,
                move |target, visibility, observer| {
                    if visibility != Visibility::Visible {
                        return;
                    }
                    let Some(index) = targets.iter().position(|el| *el == target) else {
                        return;
                    };
                    if let Some(effect) = controller.borrow_mut().on_visible(index, role_of(&target)) {
                        if let Some(class) = effect.class {
                            let _ = target.class_list().add_1(class);
                        }
                        for (property, value) in effect.styles {
                            set_style(&target, property, value);
                        }
                    }
                    observer.unobserve(&target);
                },
            );

            if let Some(observer) = &observer {
                for element in &elements {
                    observer.observe(element);
                }
            }
            observer_handle = observer;
        }

        move || drop(observer_handle)
    }, config);
}
