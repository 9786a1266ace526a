//! Which slide is on stage while navigation animates.
//!
//! A new target first plays the departing slide's exit animation. Only when
//! that animation ends is the target mounted, and it then plays its enter
//! animation. One slide is mounted at any time.

/// CSS animation that closes the exit phase.
pub const EXIT_ANIMATION: &str = "slide-exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

impl Phase {
    pub fn class(self) -> &'static str {
        match self {
            Phase::Enter => "slide slide--enter",
            Phase::Exit => "slide slide--exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideStage {
    shown: usize,
}

impl SlideStage {
    pub fn new(shown: usize) -> Self {
        Self { shown }
    }

    /// Index of the mounted slide.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn phase(&self, target: usize) -> Phase {
        if self.shown == target {
            Phase::Enter
        } else {
            Phase::Exit
        }
    }

    /// Called when the stage's exit animation ends. Mounts `target` and
    /// returns whether the shown slide changed.
    pub fn exit_finished(&mut self, target: usize) -> bool {
        if self.shown == target {
            return false;
        }
        self.shown = target;
        true
    }
}
