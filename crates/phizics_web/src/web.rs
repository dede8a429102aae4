//! App shell: three mutually exclusive screens behind a single page value.
//!
//! Navigation is a one-way forward flow (home, welcome, playground); each
//! page receives an advance callback.

use leptos::prelude::*;

mod canvas;
mod home;
mod modal;
mod playground;
mod welcome;

use home::HomePage;
use playground::PlaygroundPage;
use welcome::WelcomePage;

pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(|| view! { <App /> });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Welcome,
    Playground,
}

#[component]
fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    let go_welcome = Callback::new(move |_: ()| {
        log::debug!("page -> welcome");
        set_page.set(Page::Welcome);
    });
    let go_playground = Callback::new(move |_: ()| {
        log::debug!("page -> playground");
        set_page.set(Page::Playground);
    });

    view! {
        <div class="app">
            {move || match page.get() {
                Page::Home => view! { <HomePage on_advance=go_welcome /> }.into_any(),
                Page::Welcome => view! { <WelcomePage on_advance=go_playground /> }.into_any(),
                Page::Playground => view! { <PlaygroundPage /> }.into_any(),
            }}
        </div>
    }
}
