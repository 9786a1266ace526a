mod external_link;
mod language_switcher;
mod qr_code;
mod slide_nav;
mod success_modal;

pub use external_link::ExternalLink;
pub use language_switcher::LanguageSwitcher;
pub use qr_code::QrCode;
pub use slide_nav::{SlideControls, SlideDots};
pub use success_modal::SuccessModal;
