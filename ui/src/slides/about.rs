use dioxus::prelude::*;

use crate::core::links::ABOUT_IMAGE;
use crate::i18n::Language;
use crate::t;

#[component]
pub fn AboutSlide(lang: Language) -> Element {
    let facts = [
        ("🏭", t!(lang, "about-industry")),
        ("👥", t!(lang, "about-size")),
        ("📍", t!(lang, "about-headquarters")),
        ("📅", t!(lang, "about-founded")),
        ("⭐", t!(lang, "about-specialties")),
    ];

    rsx! {
        section { class: "slide-page about",
            div { class: "about__intro",
                h2 { class: "slide-page__title", {t!(lang, "about-title")} }
                p { class: "about__description", {t!(lang, "about-description")} }
                ul { class: "about__facts",
                    for (icon, fact) in facts {
                        li { class: "about__fact",
                            span { class: "about__fact-icon", aria_hidden: "true", "{icon}" }
                            span { "{fact}" }
                        }
                    }
                }
            }
            div { class: "about__media",
                img { class: "about__image", src: ABOUT_IMAGE, alt: t!(lang, "about-image-alt") }
            }
            div { class: "about__cards",
                article { class: "card about__card",
                    h3 { class: "card__title", {t!(lang, "about-vision-title")} }
                    p { {t!(lang, "about-vision-text")} }
                }
                article { class: "card about__card",
                    h3 { class: "card__title", {t!(lang, "about-mission-title")} }
                    p { {t!(lang, "about-mission-text")} }
                }
            }
        }
    }
}
