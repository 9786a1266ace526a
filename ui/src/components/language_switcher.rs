use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::i18n::Language;
use crate::t;

/// Language picker. Emits the chosen language; the caller owns the state.
#[component]
pub fn LanguageSwitcher(current: Language, on_select: EventHandler<Language>) -> Element {
    let on_change = move |evt: FormEvent| {
        let code = evt.value();
        match Language::from_code(&code) {
            Some(lang) => {
                debug!(lang = %lang, "language selected");
                on_select.call(lang);
            }
            None => warn!(code, "ignoring unknown language code"),
        }
    };

    rsx! {
        div { class: "language-switcher",
            label {
                class: "visually-hidden",
                r#for: "language-select",
                {t!(current, "nav-language-label")}
            }
            span { class: "language-switcher__flag", aria_hidden: "true", {current.flag()} }
            select {
                id: "language-select",
                class: "language-switcher__select",
                value: current.code(),
                oninput: on_change,
                for lang in Language::ALL {
                    option {
                        key: "{lang}",
                        value: lang.code(),
                        selected: lang == current,
                        {format!("{} {}", lang.flag(), lang.native_name())}
                    }
                }
            }
        }
    }
}
