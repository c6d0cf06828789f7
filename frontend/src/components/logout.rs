use crate::components::imports::*;
use crate::login::{browser, Action, Operation, SubmitError, Submitter};

#[styled_component]
pub fn Logout() -> Html {
    let config = use_context::<ConfigCtx>().unwrap_or_default();
    let current_user = config.current_user.clone();
    let submitter = use_memo(
        |config| Submitter::new(browser::GlooClient, LoginConfig::clone(config)),
        config,
    );
    let busy = use_state(|| false);

    let onclick = {
        let submitter = submitter.clone();
        let busy = busy.clone();

        Callback::from(move |event: MouseEvent| {
            event.prevent_default();

            let submitter = submitter.clone();
            let busy = busy.clone();

            wasm_bindgen_futures::spawn_local(async move {
                busy.set(true);
                let result = submitter.logout().await;
                if result.as_ref().map_or_else(SubmitError::entered_gate, |_| true) {
                    busy.set(false);
                }

                browser::apply(Action::after(Operation::Logout, result));
            })
        })
    };

    let label = match current_user {
        Some(username) => format!("Log out {}", username),
        None => "Log out".to_owned(),
    };

    html! {
        <button {onclick} type="button" disabled={*busy}>{ label }</button>
    }
}
