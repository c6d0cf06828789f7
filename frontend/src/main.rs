mod app;
mod components;
mod config;
mod login;
mod router;
mod switch;

fn main() {
    yew::Renderer::<app::App>::new().render();
}
