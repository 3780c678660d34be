use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::lazy_media::use_lazy_media;
use crate::components::lite_youtube::LiteYouTube;
use crate::components::service_morph::ServiceMorph;
use crate::controllers::media::{LAZY_IFRAMES, LAZY_VIDEOS};
use crate::dom::scroll::scroll_to_location_hash;

#[function_component]
pub fn Service() -> Html {
    use_lazy_media(LAZY_VIDEOS);
    use_lazy_media(LAZY_IFRAMES);

    // links like /service.html#brand-films arrive before the sections exist
    use_effect_with_deps(|_| {
        scroll_to_location_hash();
        || ()
    }, ());

    let morph_videos: Vec<AttrValue> = vec![
        "assets/videos/svc-brand.mp4".into(),
        "assets/videos/svc-youtube.mp4".into(),
        "assets/videos/svc-avatar.mp4".into(),
        "assets/videos/svc-learning.mp4".into(),
    ];

    html! {
        <div class="service-page">
            <section class="service-hero">
                <h1>{"What we make"}</h1>
                <p>{"Four ways to put video to work."}</p>
            </section>

            <div id="brand-films">
                <ServiceMorph videos={morph_videos} />
            </div>

            <section id="youtube-growth" class="yt-engine-section">
                <div class="yt-engine-copy">
                    <h2>{"YouTube Growth Engine"}</h2>
                    <p>{"Hooks, pacing and packaging tuned for watch time."}</p>
                    <Link<Route> to={Route::Contact} classes="yt-cta-btn">{"Grow my channel"}</Link<Route>>
                </div>
                <LiteYouTube video_id="olRQfKtTZ0g" title="Channel growth case study" />
            </section>

            <section class="avatar-section">
                <div class="avatar-copy">
                    <h2>{"Global AI Avatar Solutions"}</h2>
                    <p>{"Record once, speak every language your customers do."}</p>
                    <Link<Route> to={Route::Contact} classes="avatar-cta-btn">{"Go global"}</Link<Route>>
                </div>
                <iframe
                    class="lazy-iframe"
                    data-src="https://www.youtube.com/embed/H-52-y53Txc?rel=0&modestbranding=1"
                    title="AI avatar demo"
                    style="opacity: 0; transition: opacity 0.6s ease"
                    allow="autoplay; encrypted-media"
                />
            </section>

            <section class="learning-section">
                <div class="learning-visual-column">
                    <LiteYouTube video_id="_6JXT_ipYjY" params="autoplay=1&rel=0" title="Learning content sample" />
                </div>
                <div class="learning-cta-box">
                    <h2>{"Transformative Learning Content"}</h2>
                    <p>{"Training that sticks, measured by what people do afterwards."}</p>
                    <Link<Route> to={Route::Contact} classes="learning-cta-btn">{"Plan a course"}</Link<Route>>
                </div>
            </section>

            <section class="svc-morph-cta-section">
                <h2>{"Not sure which one fits?"}</h2>
                <Link<Route> to={Route::Contact} classes="studiox-contact-btn">{"Talk to us"}</Link<Route>>
            </section>
        </div>
    }
}
