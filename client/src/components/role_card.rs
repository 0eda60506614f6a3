//! Experience card for a held role.

use leptos::prelude::*;

use super::interactive_card::InteractiveCard;
use crate::content::CardColors;

#[component]
pub fn RoleCard(
    title: &'static str,
    details: &'static str,
    tenure: &'static str,
    colors: CardColors,
) -> impl IntoView {
    view! {
        <InteractiveCard colors=colors class="role-card">
            <h3 class="role-card__title">{title}</h3>
            <div>
                <p class="role-card__details">{details}</p>
                <p class="role-card__tenure">{tenure}</p>
            </div>
        </InteractiveCard>
    }
}
