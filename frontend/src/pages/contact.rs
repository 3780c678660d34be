use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::{Faq, FaqEntry};
use crate::components::video_controls::{use_muted_autoplay, MuteButton, PlayPauseButton};

const CONTACT_VIDEO: &str = "contactVideo";

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How long does a project take?".into(),
            answer: "Most projects are delivered in 2 to 7 days depending on the service.".into(),
        },
        FaqEntry {
            question: "Do you work with international clients?".into(),
            answer: "Yes. Our avatar service alone covers more than 60 languages.".into(),
        },
        FaqEntry {
            question: "What do you need from us to start?".into(),
            answer: "A short brief with your goal and audience. We handle the rest on a kickoff call.".into(),
        },
        FaqEntry {
            question: "How many revisions are included?".into(),
            answer: "Two rounds of revisions come with every project.".into(),
        },
    ]
}

#[function_component]
pub fn Contact() -> Html {
    use_muted_autoplay();

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <video id={CONTACT_VIDEO} class="contact-video" src="assets/videos/contact.mp4" autoplay=true muted=true loop=true playsinline=true />
                <div class="contact-hero-controls">
                    <PlayPauseButton video={CONTACT_VIDEO} />
                    <MuteButton video={CONTACT_VIDEO} />
                </div>
                <h1>{"Let's make something"}</h1>
            </section>

            <section class="contact-form-section">
                <ContactForm />
            </section>

            <section class="studio351-faq-section">
                <h2>{"Questions"}</h2>
                <Faq entries={faq_entries()} />
            </section>
        </div>
    }
}
