//! Server-side renders of slides and controls.

use dioxus::prelude::*;
use ui::components::SlideControls;
use ui::core::lead::LeadForm;
use ui::core::presentation::Presentation;
use ui::core::registry::{Slide, SLIDES, SLIDE_COUNT};
use ui::i18n::Language;
use ui::slides::SlideView;

#[component]
fn SlideHarness(lang: Language, slide: Slide, submitting: bool) -> Element {
    let presentation = use_signal(Presentation::default);
    let form = use_signal(move || {
        let mut form = LeadForm::default();
        if submitting {
            let _ = form.begin_submit();
        }
        form
    });

    rsx! {
        SlideView {
            slide,
            lang,
            presentation,
            form,
            on_submit: move |_| {},
        }
    }
}

fn render_slide(lang: Language, slide: Slide, submitting: bool) -> String {
    let mut dom = VirtualDom::new_with_props(
        SlideHarness,
        SlideHarnessProps {
            lang,
            slide,
            submitting,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[component]
fn ControlsHarness(can_prev: bool, can_next: bool) -> Element {
    rsx! {
        SlideControls {
            lang: Language::En,
            current: 0,
            total: SLIDE_COUNT,
            can_prev,
            can_next,
            on_prev: move |_| {},
            on_next: move |_| {},
        }
    }
}

/// Opening tag of the first element carrying `class`.
fn tag_with_class<'a>(html: &'a str, class: &str) -> &'a str {
    let at = html
        .find(class)
        .unwrap_or_else(|| panic!("{class} not rendered"));
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}

fn is_disabled(tag: &str) -> bool {
    ["disabled=true", "disabled=\"true\"", "disabled=\"\""]
        .iter()
        .any(|form| tag.contains(form))
}

#[test]
fn every_slide_renders_the_same_twice() {
    for lang in Language::ALL {
        for (index, slide) in SLIDES.iter().copied().enumerate() {
            let first = render_slide(lang, slide, false);
            let second = render_slide(lang, slide, false);
            assert!(!first.is_empty(), "{lang} slide {index} rendered nothing");
            assert_eq!(first, second, "{lang} slide {index} differs between renders");
        }
    }
}

#[test]
fn downloads_slide_shows_three_qr_codes() {
    for lang in Language::ALL {
        let html = render_slide(lang, Slide::Downloads, false);
        assert_eq!(html.matches("<svg").count(), 3, "{lang}");
        assert_eq!(html.matches("download-card__qr").count(), 3, "{lang}");
    }
}

#[test]
fn submit_button_is_disabled_while_submitting() {
    let idle = render_slide(Language::En, Slide::Register, false);
    let busy = render_slide(Language::En, Slide::Register, true);

    let idle_button = tag_with_class(&idle, "lead-form__submit");
    let busy_button = tag_with_class(&busy, "lead-form__submit");
    assert!(idle_button.starts_with("<button"), "{idle_button}");
    assert!(!is_disabled(idle_button), "{idle_button}");
    assert!(is_disabled(busy_button), "{busy_button}");
}

#[test]
fn prev_is_disabled_on_the_first_slide() {
    let mut dom = VirtualDom::new_with_props(
        ControlsHarness,
        ControlsHarnessProps {
            can_prev: false,
            can_next: true,
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(is_disabled(tag_with_class(&html, "slide-controls__prev")));
    assert!(!is_disabled(tag_with_class(&html, "slide-controls__next")));
}
