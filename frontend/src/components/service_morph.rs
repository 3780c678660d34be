use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::HtmlMediaElement;

use crate::controllers::morph::{ServiceMorph as MorphState, ROTATE_MS, SERVICES, SETTLE_MS, SWAP_CONTENT_MS};
use crate::dom::media::{element_by_id, force_muted, play};

fn video_id(index: usize) -> String {
    format!("svcMorphVideo{}", index)
}

/// Background video of the active service plays, the others pause. A video
/// still waiting on lazy loading gets its source right away.
fn sync_videos(active: usize) {
    for index in 0..SERVICES.len() {
        let Some(video) = element_by_id::<HtmlMediaElement>(&video_id(index)) else {
            continue;
        };
        if index == active {
            if video.get_attribute("src").is_none() {
                if let Some(src) = video.get_attribute("data-src") {
                    video.set_src(&src);
                    video.load();
                }
            }
            force_muted(&video);
            play(&video, "Service video play prevented");
        } else {
            let _ = video.pause();
        }
    }
}

#[derive(Clone)]
struct MorphDriver {
    state: Rc<RefCell<MorphState>>,
    // replacing the pair cancels the previous morph's timers
    timers: Rc<RefCell<Option<(Timeout, Timeout)>>>,
    redraw: Callback<()>,
}

impl MorphDriver {
    fn go(&self, index: usize) {
        if !self.state.borrow_mut().select(index) {
            return;
        }
        self.start();
    }

    fn rotate(&self) {
        self.state.borrow_mut().rotate();
        self.start();
    }

    fn start(&self) {
        sync_videos(self.state.borrow().active());
        self.redraw.emit(());

        let swap = {
            let state = self.state.clone();
            let redraw = self.redraw.clone();
            Timeout::new(SWAP_CONTENT_MS, move || {
                state.borrow_mut().swap_content();
                redraw.emit(());
            })
        };
        let settle = {
            let state = self.state.clone();
            let redraw = self.redraw.clone();
            Timeout::new(SETTLE_MS, move || {
                state.borrow_mut().settle();
                redraw.emit(());
            })
        };
        *self.timers.borrow_mut() = Some((swap, settle));
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceMorphProps {
    /// One background video per service, in service order.
    pub videos: Vec<AttrValue>,
}

#[function_component(ServiceMorph)]
pub fn service_morph(props: &ServiceMorphProps) -> Html {
    let state = use_mut_ref(|| MorphState::new(SERVICES.len()));
    let timers = use_mut_ref(|| None::<(Timeout, Timeout)>);
    let force_update = use_force_update();

    let driver = MorphDriver {
        state: state.clone(),
        timers,
        redraw: Callback::from(move |_: ()| force_update.force_update()),
    };

    {
        let driver = driver.clone();
        use_effect_with_deps(move |_| {
            sync_videos(driver.state.borrow().active());
            let rotation = Interval::new(ROTATE_MS, move || driver.rotate());
            move || drop(rotation)
        }, ());
    }

    let morph = *state.borrow();
    let shown = &SERVICES[morph.displayed()];

    let selectors = SERVICES.iter().enumerate().map(|(index, service)| {
        let onclick = {
            let driver = driver.clone();
            Callback::from(move |_: MouseEvent| driver.go(index))
        };
        html! {
            <div class={classes!("svc-morph-selector-card", (morph.active() == index).then(|| "svc-morph-active"))} {onclick}>
                <span class="svc-morph-selector-number">{format!("0{}", index + 1)}</span>
                <span class="svc-morph-selector-title">{service.title}</span>
            </div>
        }
    });

    html! {
        <section class="svc-morph-section">
            <div class={classes!("svc-morph-display", morph.is_animating().then(|| "svc-morph-animating"))} id="svcMorphDisplay">
                { for props.videos.iter().enumerate().map(|(index, src)| html! {
                    <video
                        id={video_id(index)}
                        class={classes!("svc-morph-video-bg", "lazy-video", (morph.active() == index).then(|| "svc-morph-active"))}
                        data-src={src.clone()}
                        muted=true
                        loop=true
                        playsinline=true
                        preload="none"
                    />
                }) }
                <div class="svc-morph-content" id="svcMorphContent">
                    <h3 class="svc-morph-title-main">{shown.title}</h3>
                    <div class="svc-morph-meta-grid">
                        <div class="svc-morph-meta-item">
                            <div class="svc-morph-meta-label">{"Best For"}</div>
                            <div class="svc-morph-meta-value">{shown.best_for}</div>
                        </div>
                        <div class="svc-morph-meta-item">
                            <div class="svc-morph-meta-label">{"Timeline"}</div>
                            <div class="svc-morph-meta-value">{shown.timeline}</div>
                        </div>
                    </div>
                    <p class="svc-morph-description-text">{shown.description}</p>
                </div>
            </div>
            <div class="svc-morph-selectors">
                { for selectors }
            </div>
            <div class="svc-morph-indicators">
                { for (0..SERVICES.len()).map(|index| {
                    let onclick = {
                        let driver = driver.clone();
                        Callback::from(move |_: MouseEvent| driver.go(index))
                    };
                    html! {
                        <span class={classes!("svc-morph-dot", (morph.active() == index).then(|| "svc-morph-active"))} {onclick}></span>
                    }
                }) }
            </div>
        </section>
    }
}
