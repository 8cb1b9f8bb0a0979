use botwatch_dashboard::{App, config};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::init();
    leptos::mount::mount_to_body(move || view! { <App config/> });
}
