use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;

use crate::content::{TechEntry, TECH_STACK};
use crate::state::{stagger_delay, CardState, REVEAL_DELAY_MS};

#[component]
pub fn TechStackGrid() -> impl IntoView {
    view! {
        <section class="tech-stack-container w-full my-12">
            <h2 class="section-title">"Technology Stack"</h2>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {TECH_STACK
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! { <TechStackCard entry=entry.clone() index=index /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// A single technology tile. Fades in shortly after mount (staggered by
/// index) and shows a "Learn More" overlay while hovered.
#[component]
fn TechStackCard(entry: TechEntry, index: usize) -> impl IntoView {
    let state = RwSignal::new(CardState::default());
    let reveal_timer = StoredValue::new(None::<TimeoutHandle>);

    // Arm the reveal timer on the client only; effects never run during SSR.
    Effect::new(move |_| {
        let handle = set_timeout_with_handle(
            move || state.update(|s| s.reveal()),
            Duration::from_millis(REVEAL_DELAY_MS),
        )
        .expect("should be able to schedule the reveal timer");
        reveal_timer.set_value(Some(handle));
    });
    on_cleanup(move || {
        if let Some(handle) = reveal_timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <div
            class=move || {
                if state.get().visible { "tech-card visible" } else { "tech-card" }
            }
            style=("--card-color", entry.color.clone())
            style=("transition-delay", format!("{}s", stagger_delay(index)))
            on:mouseenter=move |_| state.update(|s| s.pointer_enter())
            on:mouseleave=move |_| state.update(|s| s.pointer_leave())
        >
            <div class="card-icon text-4xl">
                <i class=entry.icon.clone()></i>
            </div>
            <div class="card-content mt-4">
                <h3 class="card-title text-lg font-bold">{entry.name.clone()}</h3>
                <p class="card-description text-sm text-gray-400 mt-1">
                    {entry.description.clone()}
                </p>
            </div>
            <div class=move || {
                if state.get().hovered { "card-overlay active" } else { "card-overlay" }
            }>
                <div class="overlay-content flex items-center gap-x-1.5">
                    <span class="font-medium">"Learn More"</span>
                    <i class="extra-arrow-right"></i>
                </div>
            </div>
        </div>
    }
}
