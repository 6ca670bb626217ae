use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::waitlist::SubmissionState;

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    pub email: AttrValue,
    pub state: SubmissionState,
    pub button_label: AttrValue,
    pub on_email: Callback<String>,
    pub on_submit: Callback<()>,
    /// Shown in place of the form once the visitor has signed up.
    pub success: Html,
}

#[function_component(WaitlistForm)]
pub fn waitlist_form(props: &WaitlistFormProps) -> Html {
    if props.state.is_submitted() {
        return props.success.clone();
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let oninput = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };
    let loading = props.state.is_loading();

    html! {
        <form class="waitlist-form" {onsubmit}>
            <input
                type="email"
                class="waitlist-input"
                placeholder="your@email.com"
                required=true
                value={props.email.clone()}
                {oninput}
            />
            <button type="submit" class="waitlist-button cta-glow" disabled={loading}>
                { if loading { "...".to_string() } else { props.button_label.to_string() } }
            </button>
        </form>
    }
}
