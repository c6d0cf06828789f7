use crate::components::imports::*;
use crate::login::{browser, Action, Credentials, Operation, SubmitError, Submitter};

#[styled_component]
pub fn Login() -> Html {
    let config = use_context::<ConfigCtx>().unwrap_or_default();
    let submitter = use_memo(
        |config| Submitter::new(browser::GlooClient, LoginConfig::clone(config)),
        config,
    );
    let busy = use_state(|| false);

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let submitter = submitter.clone();
        let busy = busy.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let (Some(username), Some(password)) =
                (input_value(&username_ref), input_value(&password_ref))
            else {
                console::error!("login form inputs are not mounted");
                return;
            };
            let credentials = Credentials::new(username, password);
            // blank fields are reported before the button state is touched
            if let Err(error) = credentials.validate() {
                browser::apply(Action::after(Operation::Login, Err(error)));
                return;
            }

            let submitter = submitter.clone();
            let busy = busy.clone();

            wasm_bindgen_futures::spawn_local(async move {
                console::log!(format!("submitting login for {:?}", credentials.username));

                busy.set(true);
                let result = submitter.login(credentials).await;
                // only the attempt holding the gate may re-enable the button
                if result.as_ref().map_or_else(SubmitError::entered_gate, |_| true) {
                    busy.set(false);
                }

                browser::apply(Action::after(Operation::Login, result));
            })
        })
    };

    let css = css! {"
        display: flex;
        flex-direction: column;
        gap: 0.5em;
        max-width: 20em;
    "};

    html! {
        <form id="loginForm" class={css} {onsubmit} method="post">
            <label>{ "Username" }
                <input ref={username_ref} type="text" placeholder="Enter Username" name="username" autocomplete="username"/>
            </label>
            <label>{ "Password" }
                <input ref={password_ref} type="password" placeholder="Enter Password" name="password" autocomplete="current-password"/>
            </label>
            <button type="submit" disabled={*busy}>{ "Login" }</button>
        </form>
    }
}

fn input_value(node: &NodeRef) -> Option<String> {
    node.cast::<HtmlInputElement>().map(|input| input.value())
}
