use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod controllers {
    pub mod accordion;
    pub mod contact_form;
    pub mod gallery;
    pub mod media;
    pub mod morph;
    pub mod navbar;
    pub mod particles;
    pub mod reveal;
    pub mod service_selector;
    pub mod triangle;
    pub mod typewriter;
    pub mod youtube;
}
mod dom {
    pub mod media;
    pub mod observer;
    pub mod scroll;
    pub mod youtube_api;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod footer;
    pub mod gallery_modal;
    pub mod lazy_media;
    pub mod lite_youtube;
    pub mod nav;
    pub mod particles;
    pub mod scroll_reveal;
    pub mod service_morph;
    pub mod service_selector;
    pub mod showcase;
    pub mod triangle_reveal;
    pub mod typewriter;
    pub mod video_controls;
    pub mod youtube_player;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod service;
}

use components::{footer::Footer, nav::Nav};
use pages::{about::About, contact::Contact, home::Home, not_found::NotFound, service::Service};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/about.html")]
    About,
    #[at("/service.html")]
    Service,
    #[at("/contact.html")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Index => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Service => {
            info!("Rendering Service page");
            html! { <Service /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main class="page-content">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // logging is best effort, the site works without it
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting Studio X");
    yew::Renderer::<App>::new().render();
}
