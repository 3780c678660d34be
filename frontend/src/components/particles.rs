use yew::prelude::*;
use web_sys::js_sys::Math;

use crate::controllers::particles::{scatter, PARTICLE_COUNT};

#[function_component(Particles)]
pub fn particles() -> Html {
    // scattered once per mount
    let particles = use_memo(|_| scatter(PARTICLE_COUNT, Math::random), ());

    html! {
        <div class="about-particles" aria-hidden="true">
            { for particles.iter().map(|p| html! { <div class="about-particle" style={p.style()}></div> }) }
        </div>
    }
}
