//! Leadership roles and milestones rendered as tilt cards.

use leptos::prelude::*;

use super::info_card::InfoCard;
use super::role_card::RoleCard;
use crate::content::{MILESTONES, ROLES};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="experience-section">
            <div class="section-inner">
                <header class="section-header section-header--start">
                    <h1 class="section-title">"I was not born a natural leader..."</h1>
                    <p class="section-subtitle">
                        "But by stepping out of my comfort zone, I slowly realised I enjoyed making meaningful connections."
                    </p>
                </header>
                <h2 class="experience-section__lead">
                    "Here are some roles I took on to "
                    <span class="experience-section__motto">"Sharpen The Saw"</span>
                    "."
                </h2>
                <div class="experience-grid">
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <RoleCard
                                    title=role.title
                                    details=role.details
                                    tenure=role.tenure
                                    colors=role.colors
                                />
                            }
                        })
                        .collect_view()}
                    <div class="experience-grid__stack">
                        {MILESTONES
                            .iter()
                            .map(|milestone| {
                                view! {
                                    <InfoCard
                                        title=milestone.title
                                        details=milestone.details
                                        year=milestone.year
                                        colors=milestone.colors
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
