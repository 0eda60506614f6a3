//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards render static content inside a tilt surface; sections compose
//! cards and own their per-instance interaction state. Nothing is shared
//! through context.

pub mod contact_section;
pub mod experience_section;
pub mod hero_section;
pub mod hobbies_section;
pub mod hobby_card;
pub mod info_card;
pub mod interactive_card;
pub mod linkedin_badge;
pub mod nav_bar;
pub mod role_card;
