use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::Route;
use crate::controllers::navbar::{is_scrolled, MobileMenu};
use crate::dom::scroll::AnchorScroll;

#[derive(Properties, PartialEq)]
struct MobileDropdownProps {
    label: AttrValue,
    children: Children,
}

#[function_component(MobileDropdown)]
fn mobile_dropdown(props: &MobileDropdownProps) -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            // clicks on the links themselves must not fold the dropdown
            let on_item = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .map(|el| el.class_list().contains("mobile-dropdown-item"))
                .unwrap_or(false);
            if !on_item {
                open.set(!*open);
            }
        })
    };

    html! {
        <div class={classes!("mobile-nav-item", "has-dropdown", (*open).then(|| "active"))} onclick={toggle}>
            <span class="mobile-nav-label">{props.label.clone()}</span>
            <div class="mobile-dropdown">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MobileMenu::default);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let check_scroll = {
                let window = window.clone();
                move || {
                    if let Some(y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(is_scrolled(y));
                    }
                }
            };
            // page may load already scrolled
            check_scroll();

            let scroll_callback = Closure::wrap(Box::new(check_scroll) as Box<dyn FnMut()>);
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    use_effect_with_deps(|_| {
        let anchors = AnchorScroll::attach();
        move || drop(anchors)
    }, ());

    {
        use_effect_with_deps(move |menu| {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.style().set_property("overflow", menu.body_overflow());
            }
            || ()
        }, *menu);
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let active = menu.is_open().then(|| "active");

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then(|| "scrolled"))}>
            <div class="navbar-content">
                <Link<Route> to={Route::Home} classes="navbar-logo">
                    {"Studio X"}
                </Link<Route>>
                <div class="navbar-links">
                    <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    <Link<Route> to={Route::Service} classes="nav-link">{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="nav-link nav-cta">{"Start a Project"}</Link<Route>>
                </div>
                <button class={classes!("menu-toggle", active)} onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-overlay", active)} onclick={close_menu.clone()}></div>
            <div class={classes!("mobile-menu-canvas", active)}>
                <div class="mobile-nav-item" onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home} classes="mobile-nav-link">{"Home"}</Link<Route>>
                </div>
                <div class="mobile-nav-item" onclick={close_menu.clone()}>
                    <Link<Route> to={Route::About} classes="mobile-nav-link">{"About"}</Link<Route>>
                </div>
                <MobileDropdown label="Services">
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Service} classes="mobile-dropdown-item">{"All Services"}</Link<Route>>
                    </div>
                    <a class="mobile-dropdown-item" href="/service.html#brand-films" onclick={close_menu.clone()}>{"Brand Films"}</a>
                    <a class="mobile-dropdown-item" href="/service.html#youtube-growth" onclick={close_menu.clone()}>{"YouTube Growth"}</a>
                </MobileDropdown>
                <div class="mobile-nav-item" onclick={close_menu}>
                    <Link<Route> to={Route::Contact} classes="mobile-nav-link">{"Contact"}</Link<Route>>
                </div>
            </div>
        </nav>
    }
}
