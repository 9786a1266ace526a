//! One component per slide kind, and the dispatcher the shell renders.

mod about;
mod downloads;
mod hero;
mod product;
mod products;
mod register;

pub use about::AboutSlide;
pub use downloads::DownloadsSlide;
pub use hero::HeroSlide;
pub use product::ProductSlide;
pub use products::ProductsSlide;
pub use register::RegisterSlide;

use dioxus::prelude::*;

use crate::core::lead::LeadForm;
use crate::core::presentation::Presentation;
use crate::core::registry::{Slide, ABOUT_INDEX};
use crate::i18n::Language;

#[component]
pub fn SlideView(
    slide: Slide,
    lang: Language,
    presentation: Signal<Presentation>,
    form: Signal<LeadForm>,
    on_submit: EventHandler<()>,
) -> Element {
    let mut presentation = presentation;
    match slide {
        Slide::Hero => rsx! {
            HeroSlide {
                lang,
                on_explore: move |_| {
                    presentation.write().go_to(ABOUT_INDEX);
                },
            }
        },
        Slide::About => rsx! { AboutSlide { lang } },
        Slide::Products => rsx! { ProductsSlide { lang } },
        Slide::Downloads => rsx! { DownloadsSlide { lang } },
        Slide::Product(product) => rsx! { ProductSlide { lang, product } },
        Slide::Register => rsx! { RegisterSlide { lang, form, on_submit } },
    }
}
