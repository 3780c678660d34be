use yew::prelude::*;

use crate::controllers::youtube::LiteEmbed;

#[derive(Properties, PartialEq)]
pub struct LiteYouTubeProps {
    pub video_id: AttrValue,
    #[prop_or_default]
    pub params: Option<AttrValue>,
    #[prop_or_default]
    pub thumbnail: Option<AttrValue>,
    pub title: AttrValue,
}

/// Thumbnail facade that only loads the YouTube iframe once clicked.
#[function_component(LiteYouTube)]
pub fn lite_youtube(props: &LiteYouTubeProps) -> Html {
    let lite = use_mut_ref(LiteEmbed::default);
    let src = use_state(|| None::<String>);

    let onclick = {
        let lite = lite.clone();
        let src = src.clone();
        let video_id = props.video_id.clone();
        let params = props.params.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(url) = lite.borrow_mut().activate(&video_id, params.as_deref()) {
                src.set(Some(url));
            }
        })
    };

    let thumbnail = props
        .thumbnail
        .clone()
        .unwrap_or_else(|| format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", props.video_id).into());

    html! {
        <div class="lite-youtube" data-video-id={props.video_id.clone()} data-loaded={src.is_some().then(|| "true")} {onclick}>
            if let Some(url) = (*src).clone() {
                <iframe
                    src={url}
                    width="100%"
                    height="100%"
                    frameborder="0"
                    title={props.title.clone()}
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            } else {
                <img class="lite-youtube-thumb" src={thumbnail} alt={props.title.clone()} loading="lazy" />
                <button class="lite-youtube-play" aria-label={format!("Play {}", props.title)}>
                    <i class="fa-solid fa-play"></i>
                </button>
            }
        </div>
    }
}
