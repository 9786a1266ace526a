//! The ordered slide sequence. Fixed at compile time.

use super::catalogue::{Product, PRODUCTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    Hero,
    About,
    Products,
    Downloads,
    Product(&'static Product),
    Register,
}

impl Slide {
    /// Stable name, used for logging and element ids.
    pub fn name(&self) -> &'static str {
        match self {
            Slide::Hero => "hero",
            Slide::About => "about",
            Slide::Products => "products",
            Slide::Downloads => "downloads",
            Slide::Product(p) => p.id,
            Slide::Register => "register",
        }
    }
}

/// Four intro slides, one slide per product, then the form.
pub const SLIDE_COUNT: usize = 4 + PRODUCTS.len() + 1;

pub static SLIDES: [Slide; SLIDE_COUNT] = [
    Slide::Hero,
    Slide::About,
    Slide::Products,
    Slide::Downloads,
    Slide::Product(&PRODUCTS[0]),
    Slide::Product(&PRODUCTS[1]),
    Slide::Product(&PRODUCTS[2]),
    Slide::Product(&PRODUCTS[3]),
    Slide::Product(&PRODUCTS[4]),
    Slide::Product(&PRODUCTS[5]),
    Slide::Product(&PRODUCTS[6]),
    Slide::Product(&PRODUCTS[7]),
    Slide::Product(&PRODUCTS[8]),
    Slide::Register,
];

/// Index the hero's "explore" action jumps to.
pub const ABOUT_INDEX: usize = 1;
