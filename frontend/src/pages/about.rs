use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::particles::Particles;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::components::triangle_reveal::{TriangleCard, TriangleReveal};
use crate::components::typewriter::Typewriter;
use crate::controllers::reveal::ABOUT_SECTIONS;
use crate::controllers::triangle::WHEEL_GATED;
use crate::controllers::typewriter::{ABOUT_HEADLINE, TEAM_NOTE};

fn studio_x_cards() -> Vec<TriangleCard> {
    vec![
        TriangleCard {
            title: "Story".into(),
            body: "A message your audience remembers after the video ends.".into(),
        },
        TriangleCard {
            title: "Craft".into(),
            body: "Cinema-grade production without agency overhead.".into(),
        },
        TriangleCard {
            title: "Results".into(),
            body: "Every video is measured against the goal it was made for.".into(),
        },
    ]
}

#[function_component]
pub fn About() -> Html {
    use_scroll_reveal(ABOUT_SECTIONS);

    html! {
        <div class="about-page">
            <section class="about-hero">
                <Particles />
                <div class="about-hero-content about-animate-on-scroll">
                    <h1>{"We are Studio X"}</h1>
                    <Typewriter config={ABOUT_HEADLINE} text="Stories built to perform." />
                </div>
            </section>

            <section class="about-solution">
                <div class="about-solution-icons">
                    <div class="about-animate-on-scroll"><i class="fa-solid fa-lightbulb"></i></div>
                    <div class="about-animate-on-scroll"><i class="fa-solid fa-clapperboard"></i></div>
                    <div class="about-animate-on-scroll"><i class="fa-solid fa-chart-line"></i></div>
                </div>
                <div class="about-solution-text">
                    <p class="about-animate-on-scroll">{"Most video looks good and does nothing. Ours starts from the number you need to move."}</p>
                </div>
            </section>

            <section class="about-comparison">
                <div class="about-comparison-side about-animate-on-scroll">
                    <h3>{"Typical agency"}</h3>
                    <ul>
                        <li>{"Weeks of back and forth"}</li>
                        <li>{"One long cut"}</li>
                        <li>{"Success is \"it looks nice\""}</li>
                    </ul>
                </div>
                <div class="about-comparison-vs about-animate-on-scroll">{"vs"}</div>
                <div class="about-comparison-side about-animate-on-scroll">
                    <h3>{"Studio X"}</h3>
                    <ul>
                        <li>{"Delivery in days"}</li>
                        <li>{"Every format you need"}</li>
                        <li>{"Success is the metric you set"}</li>
                    </ul>
                </div>
            </section>

            <TriangleReveal config={WHEEL_GATED} cards={studio_x_cards()} heading="The Studio X triangle" />

            <section class="about-team about-animate-on-scroll">
                <h2>{"The team"}</h2>
                <Typewriter config={TEAM_NOTE} text="A small crew of directors, editors and strategists who care about your numbers as much as you do." />
                <Link<Route> to={Route::Contact} classes="about-cta">{"Work with us"}</Link<Route>>
            </section>
        </div>
    }
}
