use dioxus::prelude::*;

use crate::core::links::{REL_EXTERNAL, TARGET_BLANK};

/// Anchor that opens in a new browsing context.
#[component]
pub fn ExternalLink(
    #[props(into)] href: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: TARGET_BLANK,
            rel: REL_EXTERNAL,
            {children}
        }
    }
}
