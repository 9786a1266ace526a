//! Outbound destinations. All of them open in a new browsing context.

pub const PLAY_STORE: &str = "https://play.google.com/store/apps/details?id=com.chimertech.iherd";
pub const YOUTUBE_DEMO: &str = "https://youtu.be/R0Stp91yiAs";
pub const DRIVE_DEMO: &str =
    "https://drive.google.com/file/d/1LUwCcwqVCO_rB4kP8AVlHSOnuVkhHism/view?usp=sharing";
pub const WHATSAPP_COMMUNITY: &str = "http://wa.link/igupbd";
pub const WEBSITE: &str = "https://www.chimertech.com";

/// Prefix of every product purchase page.
pub const PRODUCT_PAGE_BASE: &str = "https://www.chimertech.com/product-page/";

pub const LOGO_IMAGE: &str = "https://static.wixstatic.com/media/a001c4_6ff8506afb894a5e9aac5762e5b49b3c~mv2.png";
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1676454502649-710fccbdb421?auto=format&fit=crop&w=1080&q=80";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1605014627286-a99b8d6c2b98?auto=format&fit=crop&w=1080&q=80";
pub const PRODUCTS_IMAGE: &str =
    "https://static.wixstatic.com/media/bfd149_dda8d43122274372ac5472b8817461a2~mv2.png";
pub const FORM_IMAGE: &str =
    "https://static.wixstatic.com/media/bfd149_79b389bbd77749ad81a102de448b4e23~mv2.png";

/// Attributes shared by every outbound anchor.
pub const TARGET_BLANK: &str = "_blank";
pub const REL_EXTERNAL: &str = "noopener noreferrer";
