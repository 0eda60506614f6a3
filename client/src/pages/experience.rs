//! Standalone experience page.

use leptos::prelude::*;

use crate::components::experience_section::ExperienceSection;
use crate::content::SITE_TITLE;

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <div class="page page--standalone">
            <a class="page__back" href="/">{format!("← {SITE_TITLE}")}</a>
            <ExperienceSection/>
        </div>
    }
}
