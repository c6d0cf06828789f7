mod api_scope;
mod primitives;
mod root_scope;

pub use primitives::{Get, Post, RelativePath, Url};

#[derive(Default)]
pub struct Routes {
    pub api: api_scope::Routes,
    pub root: root_scope::Routes,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn routes() -> Routes {
    Routes::new()
}
