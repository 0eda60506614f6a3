//! Single-page portfolio: hero, hobbies, experience, contact.

use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::experience_section::ExperienceSection;
use crate::components::hero_section::HeroSection;
use crate::components::hobbies_section::HobbiesSection;
use crate::components::nav_bar::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar/>
            <HeroSection/>
            <HobbiesSection/>
            <ExperienceSection/>
            <ContactSection/>
        </div>
    }
}
