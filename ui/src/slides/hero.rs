use dioxus::prelude::*;

use crate::core::links::{HERO_IMAGE, LOGO_IMAGE};
use crate::i18n::Language;
use crate::t;

#[component]
pub fn HeroSlide(lang: Language, on_explore: EventHandler<()>) -> Element {
    rsx! {
        section { class: "slide-page hero",
            div { class: "hero__copy",
                img { class: "hero__logo", src: LOGO_IMAGE, alt: t!(lang, "hero-logo-alt") }
                h1 { class: "hero__title", {t!(lang, "hero-welcome")} }
                p { class: "hero__tagline", {t!(lang, "hero-tagline")} }
                ul { class: "hero__badges",
                    li { class: "badge", "📍 " {t!(lang, "hero-badge-location")} }
                    li { class: "badge", "📅 " {t!(lang, "hero-badge-founded")} }
                    li { class: "badge", "👥 " {t!(lang, "hero-badge-team")} }
                }
                button {
                    r#type: "button",
                    class: "button button--accent hero__explore",
                    onclick: move |_| on_explore.call(()),
                    {t!(lang, "hero-explore")}
                }
            }
            div { class: "hero__media",
                img { class: "hero__image", src: HERO_IMAGE, alt: t!(lang, "hero-image-alt") }
            }
        }
    }
}
