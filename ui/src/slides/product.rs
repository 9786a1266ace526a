use dioxus::prelude::*;

use crate::components::ExternalLink;
use crate::core::catalogue::Product;
use crate::i18n::{catalog, Language};
use crate::t;

/// Detail slide for one catalogue entry. Copy is looked up by id since the
/// ids depend on the product.
#[component]
pub fn ProductSlide(lang: Language, product: &'static Product) -> Element {
    let copy = catalog(lang);
    let title = copy.text(&product.title_id());
    let subtitle = product.subtitle_id().map(|id| copy.text(&id));
    let description = copy.text(&product.description_id());
    let features: Vec<String> = product
        .feature_ids()
        .iter()
        .map(|id| copy.text(id))
        .collect();
    let category = copy.text(product.category.message_id());
    let tag = copy.text(product.tag.message_id());
    let tag_modifier = product.tag.modifier();

    rsx! {
        section { class: "slide-page product", id: "product-{product.id}",
            div { class: "product__media",
                img { class: "product__image", src: product.image_url, alt: "{title}" }
            }
            div { class: "product__body",
                div { class: "product__labels",
                    span { class: "product__category", "{category}" }
                    span { class: "product__tag product__tag--{tag_modifier}", "{tag}" }
                }
                h2 { class: "product__title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "product__subtitle", "{subtitle}" }
                }
                p { class: "product__description", "{description}" }
                ul { class: "feature-list product__features",
                    for feature in features {
                        li { class: "feature-list__item", "{feature}" }
                    }
                }
                ExternalLink {
                    href: product.buy_url(),
                    class: "button button--accent product__buy",
                    "🛒 "
                    {t!(lang, "buy-now")}
                }
            }
        }
    }
}
