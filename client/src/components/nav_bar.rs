//! Fixed navigation bar that gains a solid background once the page scrolls.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, SITE_TITLE};
use crate::util::parallax::nav_is_scrolled;
use crate::util::scroll::use_window_scroll;

#[component]
pub fn NavBar() -> impl IntoView {
    let scrolled = RwSignal::new(false);
    use_window_scroll(move |scroll_y| {
        let next = nav_is_scrolled(scroll_y);
        if scrolled.try_get_untracked() != Some(next) {
            let _ = scrolled.try_set(next);
        }
    });

    view! {
        <nav class="nav-bar" class:nav-bar--scrolled=move || scrolled.get()>
            <div class="nav-bar__inner">
                <a class="nav-bar__brand" href="/">{SITE_TITLE}</a>
                <div class="nav-bar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a class="nav-bar__link" href=link.href>{link.label}</a> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
