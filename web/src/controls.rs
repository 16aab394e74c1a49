use jeopardy_core::Phase;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StartButtonProps {
    pub phase: Phase,
    pub onclick: Callback<()>,
}

/// The start/restart control, disabled while a board is loading.
#[function_component]
pub(crate) fn StartButton(props: &StartButtonProps) -> Html {
    let onclick = props.onclick.reform(|e: MouseEvent| e.stop_propagation());
    let disabled = !props.phase.control_enabled();

    html! {
        <button id="restart" {disabled} {onclick}>{props.phase.control_label()}</button>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoadErrorProps {
    pub phase: Phase,
}

#[function_component]
pub(crate) fn LoadError(props: &LoadErrorProps) -> Html {
    match props.phase.error() {
        Some(err) => html! {
            <p class="error" role="alert">{format!("Could not load the board: {err}")}</p>
        },
        None => html! {},
    }
}
