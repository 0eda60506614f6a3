//! Compact experience card with optional details and year.

use leptos::prelude::*;

use super::interactive_card::InteractiveCard;
use crate::content::CardColors;

#[component]
pub fn InfoCard(
    title: &'static str,
    details: Option<&'static str>,
    year: Option<&'static str>,
    colors: CardColors,
) -> impl IntoView {
    view! {
        <InteractiveCard colors=colors class="info-card">
            <div>
                <h3 class="info-card__title">{title}</h3>
                {details.map(|details| view! { <p class="info-card__details">{details}</p> })}
            </div>
            {year.map(|year| view! { <p class="info-card__year">{year}</p> })}
        </InteractiveCard>
    }
}
