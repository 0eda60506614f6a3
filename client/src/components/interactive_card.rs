//! Tilt surface shared by every card on the page.
//!
//! DESIGN
//! ======
//! Each instance owns one `TiltState` signal, created with the component and
//! disposed with it. Pointer listeners are attached to the card element, so
//! they disappear with the element and never fire against a disposed card.

use leptos::prelude::*;

use crate::content::CardColors;
#[cfg(feature = "hydrate")]
use crate::util::tilt::SurfaceRect;
use crate::util::css::class_list;
use crate::util::tilt::{TiltProfile, TiltState};

/// Card surface that tilts toward the pointer and settles on leave.
///
/// When `engaged` is provided it mirrors whether the pointer is over the card.
#[component]
pub fn InteractiveCard(
    colors: CardColors,
    #[prop(default = TiltProfile::PRIMARY)] profile: TiltProfile,
    #[prop(into, optional)] class: String,
    #[prop(optional)] engaged: Option<RwSignal<bool>>,
    children: Children,
) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let tilt = RwSignal::new(TiltState::neutral());

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(card) = card_ref.get_untracked() else {
                return;
            };
            let bounds = card.get_bounding_client_rect();
            let rect = SurfaceRect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
            tilt.set(profile.on_pointer_move(f64::from(ev.client_x()), f64::from(ev.client_y()), rect));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
        if let Some(engaged) = engaged {
            if !engaged.get_untracked() {
                engaged.set(true);
            }
        }
    };

    let on_pointer_leave = move |_: leptos::ev::PointerEvent| {
        tilt.set(profile.on_pointer_leave());
        if let Some(engaged) = engaged {
            engaged.set(false);
        }
    };

    let class_name = class_list(&["interactive-card", colors.background, colors.border, colors.text, class.as_str()]);

    view! {
        <div
            class=class_name
            node_ref=card_ref
            style=move || tilt.get().style_css()
            on:pointermove=on_pointer_move
            on:pointerleave=on_pointer_leave
        >
            {children()}
        </div>
    }
}
