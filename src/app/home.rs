use leptos::prelude::*;
use leptos_meta::Title;

use super::hero::HeroBanner;
use super::hooks::use_scroll_offset;
use super::projects::ProjectShowcase;
use super::tech::TechStackGrid;

/// Renders the portfolio page: hero, tech stack, projects, footer.
#[component]
pub fn HomePage() -> impl IntoView {
    let scroll_y = use_scroll_offset();

    view! {
        <Title text="Full Stack Developer" />
        <div class="portfolio-app min-h-screen overflow-x-hidden">
            <HeroBanner scroll_y=scroll_y />
            <main class="app-main flex flex-col items-center mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8">
                <TechStackGrid />
                <ProjectShowcase />
            </main>
            <SiteFooter />
        </div>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="mt-16 py-6 text-center text-sm text-gray-500 border-t border-gray-800">
            <p>
                {format!(
                    "v{} · built {}",
                    env!("CARGO_PKG_VERSION"),
                    env!("BUILD_DATE"),
                )}
            </p>
        </footer>
    }
}
