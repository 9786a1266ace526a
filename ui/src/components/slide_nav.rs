use dioxus::prelude::*;

use crate::i18n::Language;
use crate::t;

/// One dot per slide; the active one is highlighted.
#[component]
pub fn SlideDots(
    lang: Language,
    current: usize,
    total: usize,
    on_go_to: EventHandler<usize>,
) -> Element {
    rsx! {
        nav {
            class: "slide-dots",
            aria_label: t!(lang, "nav-slides-label"),
            for index in 0..total {
                button {
                    key: "{index}",
                    r#type: "button",
                    class: if index == current { "slide-dots__dot slide-dots__dot--active" } else { "slide-dots__dot" },
                    aria_label: t!(lang, "nav-goto-slide", index = (index + 1).to_string()),
                    aria_current: if index == current { "step" } else { "false" },
                    onclick: move |_| on_go_to.call(index),
                }
            }
        }
    }
}

/// Previous / next buttons, disabled at the ends of the deck.
#[component]
pub fn SlideControls(
    lang: Language,
    current: usize,
    total: usize,
    can_prev: bool,
    can_next: bool,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let position = t!(
        lang,
        "nav-position",
        current = (current + 1).to_string(),
        total = total.to_string()
    );

    rsx! {
        div { class: "slide-controls",
            button {
                r#type: "button",
                class: "button button--ghost slide-controls__prev",
                disabled: !can_prev,
                onclick: move |_| on_prev.call(()),
                "‹ " {t!(lang, "nav-previous")}
            }
            span { class: "slide-controls__position", "{position}" }
            button {
                r#type: "button",
                class: "button button--primary slide-controls__next",
                disabled: !can_next,
                onclick: move |_| on_next.call(()),
                {t!(lang, "nav-next")} " ›"
            }
        }
    }
}
