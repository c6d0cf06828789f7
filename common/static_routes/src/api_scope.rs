#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

#[derive(Default)]
pub struct Routes {
    pub login: Login,
    pub logout: Logout,
}

#[derive(Default, Post)]
pub struct Login;

impl Url for Login {
    fn postfix(&self) -> &str {
        "/login"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}

#[derive(Default, Post)]
pub struct Logout;

impl Url for Logout {
    fn postfix(&self) -> &str {
        "/logout"
    }

    fn prefix(&self) -> &str {
        "/api"
    }
}
