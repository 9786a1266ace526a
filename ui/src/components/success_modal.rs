use dioxus::prelude::*;

use crate::i18n::Language;
use crate::t;

/// Confirmation shown after a lead has been stored.
#[component]
pub fn SuccessModal(lang: Language, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "success-modal",
            onclick: move |_| on_close.call(()),
            div {
                class: "success-modal__dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "success-modal-title",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    r#type: "button",
                    class: "success-modal__dismiss",
                    aria_label: t!(lang, "success-close"),
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                div { class: "success-modal__icon", aria_hidden: "true", "✓" }
                h2 { id: "success-modal-title", class: "success-modal__title", {t!(lang, "success-title")} }
                p { class: "success-modal__message", {t!(lang, "success-message")} }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_close.call(()),
                    {t!(lang, "success-close")}
                }
            }
        }
    }
}
