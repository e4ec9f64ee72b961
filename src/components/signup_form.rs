use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub email: String,
    /// Selected activity name; empty selects the placeholder option.
    pub activity: String,
    pub activity_names: Vec<String>,
    #[prop_or_default]
    pub busy: bool,
    pub on_email: Callback<String>,
    pub on_activity: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
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

    let onchange = {
        let on_activity = props.on_activity.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_activity.emit(select.value());
        })
    };

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                    type="email"
                    id="email"
                    required={true}
                    placeholder="your-email@mergington.edu"
                    value={props.email.clone()}
                    {oninput}
                />
            </div>
            <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required={true} {onchange}>
                    <option value="" selected={props.activity.is_empty()}>
                        { "-- Select an activity --" }
                    </option>
                    { for props.activity_names.iter().map(|name| html! {
                        <option value={name.clone()} selected={props.activity == *name}>
                            { name.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <button type="submit" disabled={props.busy}>{ "Sign Up" }</button>
        </form>
    }
}
