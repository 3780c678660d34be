use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::gallery_modal::GalleryModal;
use crate::components::lazy_media::use_lazy_media;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::components::service_selector::{SelectableService, ServiceSelector};
use crate::components::showcase::{Showcase, ShowcaseTile};
use crate::components::triangle_reveal::{TriangleCard, TriangleReveal};
use crate::components::video_controls::{use_muted_autoplay, MuteButton, PlayPauseButton};
use crate::components::youtube_player::{YouTubeCard, YouTubeProvider};
use crate::controllers::gallery::GalleryImage;
use crate::controllers::media::{ALWAYS_ON_TILE, LAZY_IFRAMES, LAZY_VIDEOS};
use crate::controllers::reveal::FEATURE_ROWS;
use crate::controllers::triangle::AUTO_ADVANCE;

const HERO_VIDEO: &str = "heroVideo";

const YOUTUBE_WORK: [(&str, &str, &str); 6] = [
    ("value-homes", "msfWpTJCqmA", "Value Homes"),
    ("roa", "olRQfKtTZ0g", "ROA"),
    ("family", "_6JXT_ipYjY", "Family Stories"),
    ("thaman", "H-52-y53Txc", "Thaman"),
    ("crocodile", "EInPqM5l5ac", "Crocodile"),
    ("marco", "ZjYrD7jlZPw", "Marco"),
];

fn selectable_services() -> Vec<SelectableService> {
    vec![
        SelectableService {
            key: "brand".into(),
            label: "Strategic Brand Films".into(),
            blurb: "Cinematic stories that define your market position.".into(),
            video: "assets/videos/brand.mp4".into(),
        },
        SelectableService {
            key: "youtube".into(),
            label: "YouTube Growth Engine".into(),
            blurb: "Videos engineered for retention and subscriber growth.".into(),
            video: "assets/videos/youtube.mp4".into(),
        },
        SelectableService {
            key: "avatar".into(),
            label: "Global AI Avatar Solutions".into(),
            blurb: "One on-brand presenter in 60+ languages.".into(),
            video: "assets/videos/avatar.mp4".into(),
        },
        SelectableService {
            key: "learning".into(),
            label: "Transformative Learning Content".into(),
            blurb: "Training videos people actually finish.".into(),
            video: "assets/videos/learning.mp4".into(),
        },
    ]
}

fn process_steps() -> Vec<TriangleCard> {
    vec![
        TriangleCard { title: "Discover".into(), body: "We dig into your audience, goals and numbers.".into() },
        TriangleCard { title: "Script".into(), body: "A story built around one clear message.".into() },
        TriangleCard { title: "Produce".into(), body: "Shoot, animate, edit. In days, not months.".into() },
        TriangleCard { title: "Launch".into(), body: "Cut-downs and formats for every channel.".into() },
    ]
}

fn showcase_tiles() -> Vec<ShowcaseTile> {
    vec![
        ShowcaseTile {
            id: ALWAYS_ON_TILE.into(),
            src: "assets/videos/showcase-reel.mp4".into(),
            poster: None,
            title: "Showreel".into(),
        },
        ShowcaseTile {
            id: "vidA".into(),
            src: "assets/videos/showcase-a.mp4".into(),
            poster: Some("assets/images/showcase-a.jpg".into()),
            title: "Product launch".into(),
        },
        ShowcaseTile {
            id: "vidB".into(),
            src: "assets/videos/showcase-b.mp4".into(),
            poster: Some("assets/images/showcase-b.jpg".into()),
            title: "Explainer".into(),
        },
        ShowcaseTile {
            id: "vidC".into(),
            src: "assets/videos/showcase-c.mp4".into(),
            poster: Some("assets/images/showcase-c.jpg".into()),
            title: "Course trailer".into(),
        },
    ]
}

fn gallery_images() -> Vec<GalleryImage> {
    (1..=6)
        .map(|i| GalleryImage {
            src: format!("assets/images/gallery-{}.jpg", i),
            caption: format!("Behind the scenes #{}", i),
        })
        .collect()
}

#[function_component]
pub fn Home() -> Html {
    use_scroll_reveal(FEATURE_ROWS);
    use_lazy_media(LAZY_VIDEOS);
    use_lazy_media(LAZY_IFRAMES);
    use_muted_autoplay();

    html! {
        <div class="index-page">
            <section class="hero-section">
                <video id={HERO_VIDEO} class="hero-video" src="assets/videos/hero.mp4" autoplay=true muted=true loop=true playsinline=true />
                <div class="hero-overlay">
                    <h1>{"Video that moves people"}</h1>
                    <p>{"Brand films, YouTube content, AI avatars and learning videos from one studio."}</p>
                    <Link<Route> to={Route::Contact} classes="hero-cta">{"Start a project"}</Link<Route>>
                </div>
                <div class="hero-controls">
                    <PlayPauseButton video={HERO_VIDEO} />
                    <MuteButton video={HERO_VIDEO} />
                </div>
            </section>

            <ServiceSelector services={selectable_services()} />

            <section class="features-section">
                <div class="feature-row">
                    <h3>{"Strategy first"}</h3>
                    <p>{"Every frame earns its place against a business goal."}</p>
                </div>
                <div class="feature-row">
                    <h3>{"Fast turnaround"}</h3>
                    <p>{"Most projects ship within a week."}</p>
                </div>
                <div class="feature-row">
                    <h3>{"Built for every screen"}</h3>
                    <p>{"Vertical, square and widescreen cuts come standard."}</p>
                </div>
            </section>

            <TriangleReveal config={AUTO_ADVANCE} cards={process_steps()} heading="How we work" />

            <Showcase tiles={showcase_tiles()} />

            <YouTubeProvider>
                <section class="yt-work-section">
                    <h2>{"Recent work"}</h2>
                    <div class="yt-grid">
                        { for YOUTUBE_WORK.iter().map(|(suffix, video_id, title)| html! {
                            <YouTubeCard key={*suffix} suffix={*suffix} video_id={*video_id} title={*title} />
                        }) }
                    </div>
                </section>
            </YouTubeProvider>

            <section class="gallery-section">
                <h2>{"On set"}</h2>
                <GalleryModal images={gallery_images()} />
            </section>

            <section class="cta-section">
                <video class="lazy-video cta-video" data-src="assets/videos/cta-loop.mp4" muted=true loop=true playsinline=true />
                <iframe class="lazy-iframe" data-src="https://www.youtube.com/embed/msfWpTJCqmA?autoplay=1&mute=1&controls=0&loop=1&playlist=msfWpTJCqmA" title="Studio X reel" style="opacity: 0; transition: opacity 0.6s ease" allow="autoplay; encrypted-media" />
            </section>
        </div>
    }
}
