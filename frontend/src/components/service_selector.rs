use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlMediaElement, KeyboardEvent};

use crate::controllers::service_selector::{is_activation_key, PlaybackCommand, ServiceSelector as SelectorState};
use crate::dom::media::{document, element_by_id, force_muted, play, stop};

#[derive(Clone, PartialEq)]
pub struct SelectableService {
    pub key: AttrValue,
    pub label: AttrValue,
    pub blurb: AttrValue,
    pub video: AttrValue,
}

fn video_id(service: &str) -> String {
    format!("service-video-{}", service)
}

fn apply(command: PlaybackCommand) {
    match command {
        PlaybackCommand::Stop(service) => {
            if let Some(video) = element_by_id::<HtmlMediaElement>(&video_id(&service)) {
                stop(&video);
            }
        }
        PlaybackCommand::Play(service) => {
            if let Some(video) = element_by_id::<HtmlMediaElement>(&video_id(&service)) {
                force_muted(&video);
                play(&video, "Video play prevented");
            }
        }
        PlaybackCommand::Pause(service) => {
            if let Some(video) = element_by_id::<HtmlMediaElement>(&video_id(&service)) {
                let _ = video.pause();
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceSelectorProps {
    pub services: Vec<SelectableService>,
}

/// Service menu with a single video stage next to it.
#[function_component(ServiceSelector)]
pub fn service_selector(props: &ServiceSelectorProps) -> Html {
    let selector = use_mut_ref(SelectorState::new);
    let force_update = use_force_update();

    {
        let selector = selector.clone();
        use_effect_with_deps(move |_| {
            let doc = document();
            let on_visibility = {
                let doc = doc.clone();
                let selector = selector.clone();
                Closure::wrap(Box::new(move || {
                    let hidden = doc.as_ref().map(|d| d.hidden()).unwrap_or(false);
                    if let Some(command) = selector.borrow().on_visibility(hidden) {
                        apply(command);
                    }
                }) as Box<dyn FnMut()>)
            };
            if let Some(doc) = &doc {
                let _ = doc.add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
            }
            move || {
                if let Some(doc) = &doc {
                    let _ = doc.remove_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let select = {
        let selector: Rc<RefCell<SelectorState>> = selector.clone();
        Rc::new(move |service: &str| {
            let commands = selector.borrow_mut().select(service);
            for command in commands {
                apply(command);
            }
            force_update.force_update();
        })
    };

    let state = selector.borrow();
    let active = state.active();

    html! {
        <section class="services-interactive">
            <div class="services-menu" role="list">
                { for props.services.iter().map(|service| {
                    let onclick = {
                        let select = select.clone();
                        let key = service.key.clone();
                        Callback::from(move |_: MouseEvent| select(key.as_str()))
                    };
                    let onkeypress = {
                        let select = select.clone();
                        let key = service.key.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            if is_activation_key(&e.key()) {
                                e.prevent_default();
                                select(key.as_str());
                            }
                        })
                    };
                    html! {
                        <div
                            class={classes!("service-item", (active == Some(service.key.as_str())).then(|| "active"))}
                            data-service={service.key.clone()}
                            tabindex="0"
                            role="button"
                            {onclick}
                            {onkeypress}
                        >
                            <h3>{service.label.clone()}</h3>
                            <p>{service.blurb.clone()}</p>
                        </div>
                    }
                }) }
            </div>
            <div class="services-stage">
                if state.shows_empty_state() {
                    <div class="empty-state" id="emptyState">
                        <i class="fa-solid fa-film"></i>
                        <p>{"Pick a service to see it in motion"}</p>
                    </div>
                }
                { for props.services.iter().map(|service| html! {
                    <div
                        class={classes!("video-wrapper", (active == Some(service.key.as_str())).then(|| "active"))}
                        data-video={service.key.clone()}
                    >
                        <video id={video_id(&service.key)} src={service.video.clone()} muted=true loop=true playsinline=true preload="metadata" />
                    </div>
                }) }
            </div>
        </section>
    }
}
