pub use crate::config::{ConfigCtx, LoginConfig};

pub use gloo_console as console;
pub use stylist::yew::styled_component;
pub use web_sys::HtmlInputElement;

pub use yew::prelude::*;
