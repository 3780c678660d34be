use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AddEventListenerOptions, Element, WheelEvent};

use crate::controllers::triangle::{TriangleConfig, TriangleSequence, WheelOutcome};
use crate::dom::media::{matches_media, now_ms};
use crate::dom::observer::{Visibility, VisibilityObserver};

#[derive(Clone, PartialEq)]
pub struct TriangleCard {
    pub title: AttrValue,
    pub body: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct TriangleRevealProps {
    pub config: TriangleConfig,
    pub cards: Vec<TriangleCard>,
    #[prop_or_default]
    pub heading: Option<AttrValue>,
}

/// Runs the timed advances until the sequence finishes or `generation` moves on.
fn spawn_auto_advance(
    sequence: Rc<RefCell<TriangleSequence>>,
    generation: Rc<Cell<u32>>,
    redraw: Callback<()>,
) {
    let started = generation.get();
    spawn_local(async move {
        loop {
            let Some(delay) = sequence.borrow().next_delay_ms() else {
                break;
            };
            TimeoutFuture::new(delay).await;
            if generation.get() != started {
                break;
            }
            if sequence.borrow_mut().advance().is_some() {
                redraw.emit(());
            }
        }
    });
}

#[function_component(TriangleReveal)]
pub fn triangle_reveal(props: &TriangleRevealProps) -> Html {
    let section_ref = use_node_ref();
    let total = props.cards.len();
    let config = props.config;
    let sequence = use_mut_ref(|| TriangleSequence::new(total, config));
    let force_update = use_force_update();

    {
        let section_ref = section_ref.clone();
        let sequence = sequence.clone();
        let redraw = Callback::from(move |_: ()| force_update.force_update());
        use_effect_with_deps(move |_| {
            let mut cleanup: Option<Box<dyn FnOnce()>> = None;

            if matches_media(config.small_viewport_query) {
                *sequence.borrow_mut() = TriangleSequence::show_all(total, config);
                redraw.emit(());
            } else if total > 0 {
                let generation = Rc::new(Cell::new(0u32));

                let observer = {
                    let sequence = sequence.clone();
                    let generation = generation.clone();
                    let redraw = redraw.clone();
                    VisibilityObserver::new(config.threshold, "0px", move |_, visibility, _| match visibility {
                        Visibility::Visible => {
                            let was_in_view = sequence.borrow().is_in_view();
                            if was_in_view {
                                return;
                            }
                            sequence.borrow_mut().enter_view();
                            redraw.emit(());
                            spawn_auto_advance(sequence.clone(), generation.clone(), redraw.clone());
                        }
                        Visibility::Hidden => {
                            generation.set(generation.get().wrapping_add(1));
                            if sequence.borrow_mut().leave_view() {
                                redraw.emit(());
                            }
                        }
                        Visibility::Unchanged => {}
                    })
                };
                if let (Some(observer), Some(section)) = (&observer, section_ref.cast::<Element>()) {
                    observer.observe(&section);
                }

                let wheel = {
                    let sequence = sequence.clone();
                    let redraw = redraw.clone();
                    Closure::wrap(Box::new(move |e: WheelEvent| {
                        let outcome = sequence.borrow_mut().on_wheel(e.delta_y(), now_ms());
                        if outcome.prevents_default() {
                            e.prevent_default();
                        }
                        if let WheelOutcome::Stepped(_) = outcome {
                            redraw.emit(());
                        }
                    }) as Box<dyn FnMut(WheelEvent)>)
                };
                let window = web_sys::window();
                if let Some(window) = &window {
                    let options = AddEventListenerOptions::new();
                    // must stay cancelable to hold the page while locked
                    options.set_passive(false);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        wheel.as_ref().unchecked_ref(),
                        &options,
                    );
                }

                cleanup = Some(Box::new(move || {
                    generation.set(generation.get().wrapping_add(1));
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
                    }
                    drop(observer);
                }));
            }

            move || {
                if let Some(cleanup) = cleanup {
                    cleanup();
                }
            }
        }, ());
    }

    let sequence = sequence.borrow();

    html! {
        <section class={classes!("studio-x-section", sequence.shows_all().then(|| "studio-x-show-all"))} ref={section_ref}>
            if let Some(heading) = &props.heading {
                <h2 class="studio-x-heading">{heading.clone()}</h2>
            }
            <div class="studio-x-grid">
                { for props.cards.iter().enumerate().map(|(i, card)| html! {
                    <div class={classes!("studio-x-tri", sequence.is_card_active(i).then(|| "studio-x-tri-active"))}>
                        <h3 class="studio-x-tri-title">{card.title.clone()}</h3>
                        <p class="studio-x-tri-body">{card.body.clone()}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
