use std::rc::Rc;

use api::{FirestoreStore, LeadStore, StoreConfig};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::{LanguageSwitcher, SlideControls, SlideDots, SuccessModal};
use crate::core::lead::{submit_lead, LeadForm};
use crate::core::presentation::Presentation;
use crate::core::registry::SLIDES;
use crate::core::transition::{SlideStage, EXIT_ANIMATION};
use crate::i18n::Language;
use crate::slides::SlideView;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// Lead store shared through context. Launchers provide one; without it the
/// site writes to the default Firestore project.
#[derive(Clone)]
pub struct LeadStoreHandle(pub Rc<dyn LeadStore>);

impl LeadStoreHandle {
    pub fn new(store: impl LeadStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

/// The whole site: one slide at a time plus navigation chrome.
///
/// Navigation and form state live here rather than in the slides so the form
/// keeps its values (and its pending write) while the visitor browses.
#[component]
pub fn Site() -> Element {
    let mut presentation = use_signal(Presentation::default);
    let mut form = use_signal(LeadForm::default);
    let mut stage = use_signal(SlideStage::default);
    let store = use_hook(|| {
        try_consume_context::<LeadStoreHandle>().unwrap_or_else(|| {
            warn!("no lead store provided; using default Firestore project");
            LeadStoreHandle::new(FirestoreStore::new(StoreConfig::default()))
        })
    });

    let state = presentation();
    let lang = state.language();
    let current = state.slide();
    let total = state.slide_count();
    let shown = stage.read().shown();
    let phase = stage.read().phase(current);

    #[cfg(debug_assertions)]
    debug!(lang = %lang, slide = current, "site render");

    let on_submit = EventHandler::new(move |_: ()| {
        let Some(record) = form.write().begin_submit() else {
            debug!("submit ignored: write already in flight");
            return;
        };
        let store = store.clone();
        spawn(async move {
            let outcome = submit_lead(store.0.as_ref(), &record).await;
            form.write().finish_submit(&outcome);
        });
    });

    let show_success = form.read().success_visible;

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "site", lang: lang.code(),
            header { class: "site__header",
                span { class: "site__brand", "iHerd" }
                LanguageSwitcher {
                    current: lang,
                    on_select: move |l: Language| presentation.write().select_language(l),
                }
            }

            main { class: "site__stage",
                for index in [shown] {
                    div {
                        key: "{index}",
                        id: format!("slide-{}", SLIDES[index].name()),
                        class: phase.class(),
                        onanimationend: move |evt: AnimationEvent| {
                            if evt.animation_name() == EXIT_ANIMATION {
                                let target = presentation.peek().slide();
                                if stage.write().exit_finished(target) {
                                    debug!(slide = target, "slide mounted");
                                }
                            }
                        },
                        SlideView {
                            slide: SLIDES[index],
                            lang,
                            presentation,
                            form,
                            on_submit,
                        }
                    }
                }
            }

            footer { class: "site__footer",
                SlideDots {
                    lang,
                    current,
                    total,
                    on_go_to: move |i: usize| {
                        presentation.write().go_to(i);
                    },
                }
                SlideControls {
                    lang,
                    current,
                    total,
                    can_prev: state.can_prev(),
                    can_next: state.can_next(),
                    on_prev: move |_| presentation.write().prev(),
                    on_next: move |_| presentation.write().next(),
                }
            }

            if show_success {
                SuccessModal {
                    lang,
                    on_close: move |_| form.write().dismiss_success(),
                }
            }
        }
    }
}
