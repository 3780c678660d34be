use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::controllers::gallery::{Gallery, GalleryImage};
use crate::dom::media::document;

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub images: Vec<GalleryImage>,
}

/// Figure grid that opens a modal viewer on click.
#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let images = props.images.clone();
    let gallery = use_mut_ref(move || Gallery::new(images));
    let force_update = use_force_update();

    {
        let gallery = gallery.clone();
        let force_update = force_update.clone();
        use_effect_with_deps(move |_| {
            let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if gallery.borrow_mut().on_key(&e.key()) {
                    force_update.force_update();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            let doc = document();
            if let Some(doc) = &doc {
                let _ = doc.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
            }

            move || {
                if let Some(doc) = &doc {
                    let _ = doc.remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let update = |f: fn(&mut Gallery)| {
        let gallery = gallery.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: MouseEvent| {
            f(&mut gallery.borrow_mut());
            force_update.force_update();
        })
    };
    let on_prev = update(Gallery::prev);
    let on_next = update(Gallery::next);
    let on_close = update(Gallery::close);

    let state = gallery.borrow();

    let figures = state.images().iter().enumerate().map(|(index, image)| {
        let onclick = {
            let gallery = gallery.clone();
            let force_update = force_update.clone();
            Callback::from(move |_: MouseEvent| {
                if gallery.borrow_mut().open(index) {
                    force_update.force_update();
                }
            })
        };
        html! {
            <figure class="gallery-image" {onclick}>
                <img src={image.src.clone()} alt={image.caption.clone()} loading="lazy" />
                <figcaption>{image.caption.clone()}</figcaption>
            </figure>
        }
    });

    html! {
        <>
            <div class="gallery-grid">
                { for figures }
            </div>
            if state.is_open() {
                if let Some(current) = state.current() {
                    <div class="modal show" id="imageModal" role="dialog" aria-modal="true">
                        <div class="modal-backdrop" onclick={on_close.clone()}></div>
                        <div class="modal-content">
                            <button class="modal-close" aria-label="Close" onclick={on_close}>{"×"}</button>
                            <img id="modalImage" src={current.src.clone()} alt={current.caption.clone()} />
                            <p id="modalCaption">{current.caption.clone()}</p>
                            <button id="prevBtn" class="modal-nav" aria-label="Previous" onclick={on_prev}>{"‹"}</button>
                            <button id="nextBtn" class="modal-nav" aria-label="Next" onclick={on_next}>{"›"}</button>
                        </div>
                    </div>
                }
            }
        </>
    }
}
