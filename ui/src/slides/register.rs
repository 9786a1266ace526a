use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::ExternalLink;
use crate::core::lead::{LeadField, LeadForm, SubmitStatus};
use crate::core::links::{FORM_IMAGE, WEBSITE};
use crate::i18n::Language;
use crate::t;

fn field_copy(lang: Language, field: LeadField) -> (String, String) {
    match field {
        LeadField::Name => (t!(lang, "field-name"), t!(lang, "field-name-placeholder")),
        LeadField::Phone => (t!(lang, "field-phone"), t!(lang, "field-phone-placeholder")),
        LeadField::Email => (t!(lang, "field-email"), t!(lang, "field-email-placeholder")),
        LeadField::Village => (
            t!(lang, "field-village"),
            t!(lang, "field-village-placeholder"),
        ),
        LeadField::District => (
            t!(lang, "field-district"),
            t!(lang, "field-district-placeholder"),
        ),
        LeadField::Requirement => (
            t!(lang, "field-requirement"),
            t!(lang, "field-requirement-placeholder"),
        ),
    }
}

/// Registration slide. Field values and submission state live in `form`,
/// owned by the shell; submitting is delegated through `on_submit`.
#[component]
pub fn RegisterSlide(lang: Language, form: Signal<LeadForm>, on_submit: EventHandler<()>) -> Element {
    let mut form = form;
    let state = form();
    let submitting = state.is_submitting();
    let failed = matches!(state.status, SubmitStatus::Failed(_));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        debug!("lead form submitted");
        on_submit.call(());
    };

    let stats = [
        t!(lang, "form-stat-farmers"),
        t!(lang, "form-stat-production"),
        t!(lang, "form-stat-sustainable"),
    ];

    rsx! {
        section { class: "slide-page register",
            div { class: "register__side",
                img { class: "register__image", src: FORM_IMAGE, alt: t!(lang, "form-image-alt") }
                h3 { class: "register__side-title", {t!(lang, "form-side-title")} }
                p { {t!(lang, "form-side-text")} }
                ul { class: "register__stats",
                    for stat in stats {
                        li { class: "register__stat", "✓ {stat}" }
                    }
                }
                ExternalLink { href: WEBSITE, class: "register__website",
                    "🌐 "
                    {t!(lang, "website-label")}
                }
            }
            form { class: "lead-form", onsubmit: handle_submit,
                h2 { class: "slide-page__title", {t!(lang, "form-title")} }
                p { class: "slide-page__lead", {t!(lang, "form-intro")} }
                for field in LeadField::ALL {
                    {
                        let (label, placeholder) = field_copy(lang, field);
                        let key = field.key();
                        let value = state.fields.get(field).to_string();
                        let input_id = format!("lead-{key}");
                        rsx! {
                            div { key: "{key}", class: "lead-form__field",
                                label { class: "lead-form__label", r#for: "{input_id}",
                                    "{label}"
                                    if field.required() {
                                        span { class: "lead-form__required", aria_hidden: "true", " *" }
                                    }
                                }
                                if let Some(input_type) = field.input_type() {
                                    input {
                                        id: "{input_id}",
                                        class: "lead-form__input",
                                        name: key,
                                        r#type: input_type,
                                        required: field.required(),
                                        placeholder: "{placeholder}",
                                        value: "{value}",
                                        oninput: move |evt: FormEvent| form.write().fields.set(field, evt.value()),
                                    }
                                } else {
                                    textarea {
                                        id: "{input_id}",
                                        class: "lead-form__input lead-form__input--multiline",
                                        name: key,
                                        rows: "4",
                                        required: field.required(),
                                        placeholder: "{placeholder}",
                                        value: "{value}",
                                        oninput: move |evt: FormEvent| form.write().fields.set(field, evt.value()),
                                    }
                                }
                            }
                        }
                    }
                }
                if failed {
                    div { class: "lead-form__notice lead-form__notice--error", role: "alert",
                        p { "⚠️ " {t!(lang, "form-failed")} }
                        button {
                            r#type: "submit",
                            class: "button button--ghost",
                            disabled: submitting,
                            {t!(lang, "form-retry")}
                        }
                    }
                }
                button {
                    r#type: "submit",
                    class: "button button--primary lead-form__submit",
                    disabled: submitting,
                    if submitting {
                        {t!(lang, "form-submitting")}
                    } else {
                        {t!(lang, "form-submit")}
                    }
                }
            }
        }
    }
}
