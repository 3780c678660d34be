use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::controllers::typewriter::{Typewriter as TypewriterState, TypewriterConfig};
use crate::dom::observer::{Visibility, VisibilityObserver};

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub config: TypewriterConfig,
    pub text: AttrValue,
}

/// Types `text` while on screen, wipes it when scrolled away.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let container_ref = use_node_ref();
    let displayed = use_state(String::new);

    {
        let container_ref = container_ref.clone();
        let displayed = displayed.clone();
        let config = props.config;
        use_effect_with_deps(move |text| {
            let state = Rc::new(RefCell::new(TypewriterState::new(text)));
            // bumped to cancel the running loop
            let generation = Rc::new(Cell::new(0u32));

            let observer = {
                let generation = generation.clone();
                VisibilityObserver::new(config.threshold, "0px", move |_, visibility, _| match visibility {
                    Visibility::Visible => {
                        if !state.borrow_mut().start() {
                            return;
                        }
                        let started = generation.get();
                        let state = state.clone();
                        let generation = generation.clone();
                        let displayed = displayed.clone();
                        spawn_local(async move {
                            loop {
                                TimeoutFuture::new(config.interval_ms).await;
                                if generation.get() != started {
                                    break;
                                }
                                let Some(text) = state.borrow_mut().tick() else {
                                    break;
                                };
                                displayed.set(text);
                                if !state.borrow().is_running() {
                                    break;
                                }
                            }
                        });
                    }
                    Visibility::Hidden => {
                        generation.set(generation.get().wrapping_add(1));
                        state.borrow_mut().reset();
                        displayed.set(String::new());
                    }
                    Visibility::Unchanged => {}
                })
            };

            if let (Some(observer), Some(container)) = (&observer, container_ref.cast::<Element>()) {
                observer.observe(&container);
            }

            move || {
                generation.set(generation.get().wrapping_add(1));
                drop(observer);
            }
        }, props.text.clone());
    }

    let container_class = props.config.container.trim_start_matches('.');
    let target_class = props.config.target.trim_start_matches('.');

    html! {
        <div class={container_class} ref={container_ref}>
            <span class={target_class} data-type-text={props.text.clone()}>{(*displayed).clone()}</span>
            <span class="typewriter-caret" aria-hidden="true"></span>
        </div>
    }
}
