use static_routes::*;
use std::rc::Rc;

pub type ConfigCtx = Rc<LoginConfig>;

/// Names of the `<meta>` tags a server-rendered page can use to override urls.
pub mod meta {
    pub const LOGIN_ENDPOINT: &str = "login-endpoint";
    pub const LOGOUT_ENDPOINT: &str = "logout-endpoint";
    pub const HOME_URL: &str = "home-url";
    pub const LOGIN_URL: &str = "login-url";
    pub const CURRENT_USER: &str = "current-user";
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoginConfig {
    pub login_endpoint: String,
    pub logout_endpoint: String,
    pub home_url: String,
    pub login_url: String,
    pub current_user: Option<String>,
}

impl Default for LoginConfig {
    fn default() -> Self {
        let routes = routes();

        Self {
            login_endpoint: routes.api.login.post().complete().to_owned(),
            logout_endpoint: routes.api.logout.post().complete().to_owned(),
            home_url: routes.root.home.get().complete().to_owned(),
            login_url: routes.root.login.get().complete().to_owned(),
            current_user: None,
        }
    }
}

impl LoginConfig {
    /// Replaces every value `lookup` knows about, blank values are skipped.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = lookup(meta::LOGIN_ENDPOINT) {
            self.login_endpoint = value;
        }
        if let Some(value) = lookup(meta::LOGOUT_ENDPOINT) {
            self.logout_endpoint = value;
        }
        if let Some(value) = lookup(meta::HOME_URL) {
            self.home_url = value;
        }
        if let Some(value) = lookup(meta::LOGIN_URL) {
            self.login_url = value;
        }
        if let Some(value) = lookup(meta::CURRENT_USER) {
            self.current_user = Some(value);
        }

        self
    }

    pub fn from_document() -> Self {
        let config = Self::default().with_overrides(meta_content);
        gloo_console::log!(format!("{:?}", config));
        config
    }
}

fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);

    gloo_utils::document()
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
