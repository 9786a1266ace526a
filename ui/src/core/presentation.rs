//! Slide navigation state.
//!
//! `(language, slide)` with the slide index always inside `[0, slide_count)`.
//! Navigation clamps at both ends and never wraps.

use crate::i18n::Language;

use super::registry::SLIDE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    language: Language,
    slide: usize,
    slide_count: usize,
}

impl Presentation {
    /// Starts on the first slide in the default language.
    ///
    /// # Panics
    /// If `slide_count` is zero.
    pub fn new(slide_count: usize) -> Self {
        assert!(slide_count > 0, "a presentation needs at least one slide");
        Self {
            language: Language::default(),
            slide: 0,
            slide_count,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn slide(&self) -> usize {
        self.slide
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Changes the language only; the current slide is kept.
    pub fn select_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Jumps to `index`. Out-of-range targets are ignored; returns whether
    /// the index was accepted.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slide_count {
            self.slide = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        self.slide = (self.slide + 1).min(self.slide_count - 1);
    }

    pub fn prev(&mut self) {
        self.slide = self.slide.saturating_sub(1);
    }

    pub fn can_prev(&self) -> bool {
        self.slide > 0
    }

    pub fn can_next(&self) -> bool {
        self.slide + 1 < self.slide_count
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new(SLIDE_COUNT)
    }
}
