#[allow(unused_imports)]
use crate::primitives::{Get, Post, Url};
use macros::*;

// pages served outside of the frontend router are still listed here,
// the frontend navigates to them with a full page load
#[derive(Default)]
pub struct Routes {
    pub home: Home,
    pub login: Login,
    pub logout: Logout,
}

#[derive(Default, Get)]
pub struct Home;

impl Url for Home {
    fn postfix(&self) -> &str {
        "/"
    }
}

#[derive(Default, Get)]
pub struct Login;

impl Url for Login {
    fn postfix(&self) -> &str {
        "/login"
    }
}

#[derive(Default, Get)]
pub struct Logout;

impl Url for Logout {
    fn postfix(&self) -> &str {
        "/logout"
    }
}
