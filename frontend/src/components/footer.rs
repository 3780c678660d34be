use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo">{"Studio X"}</span>
                    <p>{"Films, channels and learning content that move people."}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                    <Link<Route> to={Route::Service} classes="footer-link">{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contact"}</Link<Route>>
                    <a href="mailto:studio@studiox.com" class="footer-link">{"studio@studiox.com"}</a>
                </div>
            </div>
        </footer>
    }
}
