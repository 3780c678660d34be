use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, SubmitEvent, UrlSearchParams};

use crate::config::contact_action;
use crate::controllers::contact_form::{missing_fields, RelayStatus, ERROR_BORDER, NORMAL_BORDER};
use crate::dom::media::set_style;

fn field_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = node.cast::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = node.cast::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Inquiry form posting straight to the relay. The relay answers with a
/// redirect back here carrying `?status=`.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let location = use_location();
    let full_name = use_node_ref();
    let email = use_node_ref();
    let company = use_node_ref();
    let goal = use_node_ref();
    let timeline = use_node_ref();
    let message = use_node_ref();

    let redirect_status = location
        .as_ref()
        .and_then(|l| UrlSearchParams::new_with_str(l.query_str()).ok())
        .and_then(|params| params.get("status"))
        .and_then(|s| RelayStatus::parse(&s));
    let local_status = use_state(|| None::<RelayStatus>);
    let status = (*local_status).or(redirect_status);

    let onsubmit = {
        let fields = [
            ("full_name", full_name.clone()),
            ("email", email.clone()),
            ("company", company.clone()),
            ("goal", goal.clone()),
            ("timeline", timeline.clone()),
            ("message", message.clone()),
        ];
        let local_status = local_status.clone();
        Callback::from(move |e: SubmitEvent| {
            let values: Vec<(&str, String)> = fields.iter().map(|(name, node)| (*name, field_value(node))).collect();
            let borrowed: Vec<(&str, &str)> = values.iter().map(|(n, v)| (*n, v.as_str())).collect();
            let missing = missing_fields(&borrowed);

            for (name, node) in &fields {
                if let Some(el) = node.cast::<Element>() {
                    let border = if missing.contains(name) { ERROR_BORDER } else { NORMAL_BORDER };
                    set_style(&el, "border-color", border);
                }
            }

            if !missing.is_empty() {
                e.prevent_default();
                local_status.set(Some(RelayStatus::Empty));
            }
        })
    };

    html! {
        <form class="prj-form" method="post" action={contact_action()} {onsubmit} novalidate=true>
            if let Some(status) = status {
                <div class={status.banner_class()} role="status">{status.message()}</div>
            }
            <div class="prj-row">
                <input class="prj-text-field" type="text" name="full_name" placeholder="Full name *" required=true ref={full_name} />
                <input class="prj-text-field" type="email" name="email" placeholder="Work email *" required=true ref={email} />
            </div>
            <input class="prj-text-field" type="text" name="company" placeholder="Company" ref={company} />
            <div class="prj-row">
                <select class="prj-choice-field" name="goal" required=true ref={goal}>
                    <option value="" selected=true>{"What's the goal? *"}</option>
                    <option value="Brand Film">{"Brand film"}</option>
                    <option value="YouTube Growth">{"YouTube growth"}</option>
                    <option value="AI Avatar">{"AI avatar videos"}</option>
                    <option value="Learning Content">{"Learning content"}</option>
                    <option value="Other">{"Something else"}</option>
                </select>
                <select class="prj-choice-field" name="timeline" ref={timeline}>
                    <option value="" selected=true>{"Timeline"}</option>
                    <option value="ASAP">{"As soon as possible"}</option>
                    <option value="1-2 weeks">{"1-2 weeks"}</option>
                    <option value="1 month">{"Within a month"}</option>
                    <option value="Flexible">{"Flexible"}</option>
                </select>
            </div>
            <textarea class="prj-message-field" name="message" rows="6" placeholder="Tell us about the project *" required=true ref={message}></textarea>
            <button type="submit" class="studiox-contact-btn">{"Send inquiry"}</button>
        </form>
    }
}
