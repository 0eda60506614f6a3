//! Bento grid of hobby cards.

use leptos::prelude::*;

use super::hobby_card::HobbyCard;
use crate::content::HOBBIES;

#[component]
pub fn HobbiesSection() -> impl IntoView {
    view! {
        <section id="hobbies" class="hobbies-section">
            <div class="section-inner">
                <header class="section-header">
                    <h1 class="section-title">"I promise I'm not a boring person..."</h1>
                    <p class="section-subtitle">"Here are some of my hobbies and interests!"</p>
                </header>
                <div class="hobby-grid">
                    {HOBBIES
                        .iter()
                        .map(|hobby| {
                            view! {
                                <HobbyCard
                                    title=hobby.title
                                    details=hobby.details
                                    image_url=hobby.image_url
                                    colors=hobby.colors
                                    wide=hobby.wide
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
