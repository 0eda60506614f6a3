//! Landing hero with a scroll-linked portrait.

use leptos::prelude::*;

use crate::content::{HERO_HEADLINE, HERO_IMAGE_URL, OWNER_NAME};
use crate::util::parallax::{ParallaxState, on_scroll};
use crate::util::scroll::use_window_scroll;

#[component]
pub fn HeroSection() -> impl IntoView {
    let parallax = RwSignal::new(ParallaxState::rest());
    use_window_scroll(move |scroll_y| {
        let _ = parallax.try_set(on_scroll(scroll_y));
    });

    view! {
        <main id="home" class="hero">
            <div class="hero__inner">
                <div class="hero__text">
                    <p class="hero__greeting">{format!("Hello, I am {OWNER_NAME}, a")}</p>
                    <h1 class="hero__headline">{HERO_HEADLINE}</h1>
                </div>
                <div class="hero__frame">
                    <img
                        class="hero__image"
                        src=HERO_IMAGE_URL
                        alt=format!("Cover image of {OWNER_NAME}")
                        style=move || format!("transform: {};", parallax.get().transform_css())
                    />
                </div>
            </div>
        </main>
    }
}
