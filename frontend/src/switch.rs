use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::Login => html! { <Login/> },
        Route::Logout => html! { <Logout/> },
        Route::NotFound => html! { <ErrorMessage message="not found 404"/> },
    }
}
