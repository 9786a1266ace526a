use dioxus::prelude::*;

use crate::components::{ExternalLink, QrCode};
use crate::core::links::{DRIVE_DEMO, PLAY_STORE, WHATSAPP_COMMUNITY, YOUTUBE_DEMO};
use crate::i18n::Language;
use crate::t;

const QR_SIZE: u32 = 180;

#[component]
pub fn DownloadsSlide(lang: Language) -> Element {
    let cards = [
        (
            "download",
            "📱",
            t!(lang, "download-app"),
            t!(lang, "download-app-action"),
            PLAY_STORE,
        ),
        (
            "demo",
            "▶️",
            t!(lang, "watch-demo"),
            t!(lang, "watch-demo-action"),
            YOUTUBE_DEMO,
        ),
        (
            "community",
            "💬",
            t!(lang, "join-whatsapp"),
            t!(lang, "join-whatsapp-action"),
            WHATSAPP_COMMUNITY,
        ),
    ];
    let scan_hint = t!(lang, "scan-qr");

    rsx! {
        section { class: "slide-page downloads",
            h2 { class: "slide-page__title", {t!(lang, "downloads-title")} }
            p { class: "slide-page__lead", {t!(lang, "downloads-intro")} }
            div { class: "downloads__grid",
                for (kind, icon, title, action, url) in cards {
                    article { key: "{kind}", class: "card download-card download-card--{kind}",
                        div { class: "download-card__icon", aria_hidden: "true", "{icon}" }
                        h3 { class: "card__title", "{title}" }
                        QrCode { url: url.to_string(), size: QR_SIZE, class: "download-card__qr" }
                        p { class: "download-card__hint", "{scan_hint}" }
                        ExternalLink { href: url, class: "button button--primary", "{action}" }
                    }
                }
            }
            div { class: "downloads__video",
                h3 { class: "downloads__video-heading", {t!(lang, "demo-video-heading")} }
                ExternalLink {
                    href: DRIVE_DEMO,
                    class: "button button--accent",
                    {t!(lang, "demo-video-action")}
                }
            }
        }
    }
}
