//! Hobby card that reveals a photo while the pointer is over it.
//!
//! Uses the gentler hobby tilt profile. While engaged the text switches to
//! white and the reveal image fades in at partial opacity.

use leptos::prelude::*;

use super::interactive_card::InteractiveCard;
use crate::content::CardColors;
use crate::util::tilt::TiltProfile;

#[component]
pub fn HobbyCard(
    title: &'static str,
    details: Option<&'static str>,
    image_url: &'static str,
    colors: CardColors,
    #[prop(optional)] wide: bool,
) -> impl IntoView {
    let engaged = RwSignal::new(false);
    let card_class = if wide { "hobby-card hobby-card--wide" } else { "hobby-card" };
    let content_class = move || {
        if engaged.get() {
            "hobby-card__content text-engaged".to_owned()
        } else {
            format!("hobby-card__content {}", colors.text)
        }
    };

    view! {
        <InteractiveCard colors=colors profile=TiltProfile::HOBBY class=card_class engaged=engaged>
            <img
                class="hobby-card__image"
                class:hobby-card__image--revealed=move || engaged.get()
                src=image_url
                alt=format!("Image related to {title}")
                loading="lazy"
            />
            <div class=content_class>
                <h3 class="hobby-card__title">{title}</h3>
                {details.map(|details| view! { <p class="hobby-card__details">{details}</p> })}
            </div>
        </InteractiveCard>
    }
}
