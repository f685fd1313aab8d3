use leptos::prelude::*;

use crate::state::parallax_shift;

/// Hero banner shifted vertically as the page scrolls for a parallax effect.
#[component]
pub fn HeroBanner(scroll_y: Signal<f64>) -> impl IntoView {
    view! {
        <header
            class="app-header flex flex-col justify-center items-center text-center py-24 px-4"
            style=("transform", move || {
                format!("translateY({}px)", parallax_shift(scroll_y.get()))
            })
        >
            <h1 class="text-4xl lg:text-5xl font-bold">"Your Name - Full Stack Developer"</h1>
            <p class="mt-4 text-lg text-gray-400">
                "Passionate about creating amazing web experiences"
            </p>
        </header>
    }
}
