use dioxus::prelude::*;

use crate::core::links::PRODUCTS_IMAGE;
use crate::i18n::Language;
use crate::t;

/// iHerd app overview: features and the four onboarding steps.
#[component]
pub fn ProductsSlide(lang: Language) -> Element {
    let features = [
        t!(lang, "iherd-feature-1"),
        t!(lang, "iherd-feature-2"),
        t!(lang, "iherd-feature-3"),
        t!(lang, "iherd-feature-4"),
        t!(lang, "iherd-feature-5"),
    ];
    let steps = [
        t!(lang, "step-1"),
        t!(lang, "step-2"),
        t!(lang, "step-3"),
        t!(lang, "step-4"),
    ];

    rsx! {
        section { class: "slide-page products",
            h2 { class: "slide-page__title", {t!(lang, "products-title")} }
            div { class: "products__layout",
                img { class: "products__image", src: PRODUCTS_IMAGE, alt: t!(lang, "products-image-alt") }
                article { class: "card products__app",
                    h3 { class: "card__title", {t!(lang, "iherd-title")} }
                    p { {t!(lang, "iherd-description")} }
                    h4 { class: "products__subheading", {t!(lang, "iherd-features-title")} }
                    ul { class: "feature-list",
                        for feature in features {
                            li { class: "feature-list__item", "{feature}" }
                        }
                    }
                }
            }
            div { class: "products__steps",
                h3 { class: "products__subheading", {t!(lang, "how-to-use")} }
                ol { class: "steps",
                    for (n, step) in steps.into_iter().enumerate() {
                        li { class: "steps__item",
                            span { class: "steps__number", {(n + 1).to_string()} }
                            span { class: "steps__text", "{step}" }
                        }
                    }
                }
            }
        }
    }
}
