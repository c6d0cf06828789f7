use crate::config::{ConfigCtx, LoginConfig};
use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    // urls injected by the page are read once, before any component runs
    let config: ConfigCtx = use_memo(|_| LoginConfig::from_document(), ());

    html! {
        <ContextProvider<ConfigCtx> context={config}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ConfigCtx>>
    }
}
