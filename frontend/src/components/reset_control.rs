use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResetControlProps {
    pub confirming: bool,
    pub on_ask: Callback<MouseEvent>,
    pub on_cancel: Callback<MouseEvent>,
    pub on_confirm: Callback<MouseEvent>,
}

/// Reset button that asks for confirmation inline before anything is cleared.
#[function_component(ResetControl)]
pub fn reset_control(props: &ResetControlProps) -> Html {
    if !props.confirming {
        return html! {
            <button type="button" onclick={props.on_ask.clone()} class={styles::BUTTON_SECONDARY}>
                {"Reset"}
            </button>
        };
    }

    html! {
        <div class={classes!(styles::CARD_ERROR, "w-full", "space-y-3")}>
            <p>{"Reset balance and history? This cannot be undone."}</p>
            <div class="flex space-x-4">
                <button type="button" onclick={props.on_confirm.clone()} class={styles::BUTTON_DANGER}>
                    {"Reset"}
                </button>
                <button type="button" onclick={props.on_cancel.clone()} class={styles::BUTTON_SECONDARY}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
