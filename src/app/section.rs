use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::UiState;
use crate::state::{Msg, Section};

/// Focus band for section detection: a section counts as active while it
/// crosses the strip between 20% and 30% from the top of the viewport.
const OBSERVER_MARGIN: &str = "-20% 0px -70% 0px";

/// Wraps one page section in the element the scroll observer watches. The
/// wrapped element carries the section's anchor id, so nav clicks and
/// `#fragment` links land on it too.
#[component]
pub fn SectionShell(
    section: Section,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<UiState>();
    let section_ref = NodeRef::<html::Section>::new();

    use_intersection_observer_with_options(
        section_ref,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                ui.dispatch(Msg::SectionEntered(section));
            }
        },
        UseIntersectionObserverOptions::default().root_margin(OBSERVER_MARGIN),
    );

    view! {
        <section node_ref=section_ref id=section.anchor() class=class>
            {children()}
        </section>
    }
}

/// Smooth-scrolls the viewport to a section. Silently does nothing if the
/// anchor is not in the DOM yet.
pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.anchor()) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
