//! Compact LinkedIn link that expands to show the handle on hover.

#[cfg(test)]
#[path = "linkedin_badge_test.rs"]
mod linkedin_badge_test;

use leptos::prelude::*;

#[must_use]
pub fn linkedin_profile_url(username: &str) -> String {
    let handle = username.trim().trim_start_matches('@').trim_matches('/');
    format!("https://www.linkedin.com/in/{handle}")
}

#[component]
pub fn LinkedInBadge(#[prop(into)] username: String) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let href = linkedin_profile_url(&username);

    view! {
        <a
            class="linkedin-badge"
            class:linkedin-badge--expanded=move || expanded.get()
            href=href
            target="_blank"
            rel="noopener noreferrer"
            on:mouseenter=move |_| expanded.set(true)
            on:mouseleave=move |_| expanded.set(false)
            on:focus=move |_| expanded.set(true)
            on:blur=move |_| expanded.set(false)
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="16"
                height="16"
                viewBox="0 0 24 24"
                fill="white"
                stroke="currentColor"
                stroke-width="1"
                aria-hidden="true"
            >
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                <rect width="4" height="12" x="2" y="9"></rect>
                <circle cx="4" cy="4" r="2"></circle>
            </svg>
            <span class="linkedin-badge__name">{username}</span>
        </a>
    }
}
