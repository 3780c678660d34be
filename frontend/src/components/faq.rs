use yew::prelude::*;

use crate::controllers::accordion::Accordion;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="studio351-faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let onclick = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = *accordion;
                        next.toggle(index);
                        accordion.set(next);
                    })
                };
                let open = accordion.is_open(index);
                html! {
                    <div class={classes!("studio351-faq-item", open.then(|| "active"))}>
                        <button class="studio351-faq-question" aria-expanded={open.to_string()} {onclick}>
                            <span>{entry.question.clone()}</span>
                            <i class="fa-solid fa-plus"></i>
                        </button>
                        <div class="studio351-faq-answer">
                            <p>{entry.answer.clone()}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
