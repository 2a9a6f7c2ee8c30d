//! Result/error presentation state machine.
//!
//! DESIGN
//! ======
//! The controller never looks elements up itself; it drives whatever
//! [`DisplaySurface`] it was built with. The page injects a signal-backed
//! surface, tests inject a recording mock.
//!
//! Exactly one of `Neutral`, `ShowingResult`, `ShowingError` is current.
//! Showing one surface always hides the other first.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::util::number::format_number;

/// Which of the two display regions an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Result,
    Error,
}

/// Entrance effect applied when a surface becomes visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    FadeIn,
    Shake,
}

impl Transition {
    /// CSS class that triggers the effect.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::Shake => "shake",
        }
    }
}

/// Mutable view of the two display regions.
pub trait DisplaySurface {
    fn set_visible(&self, kind: SurfaceKind, visible: bool);
    fn set_text(&self, kind: SurfaceKind, text: &str);
    fn apply_transition(&self, kind: SurfaceKind, transition: Transition);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DisplayState {
    #[default]
    Neutral,
    ShowingResult(f64),
    ShowingError(String),
}

pub struct DisplayController<S> {
    surface: S,
    state: RefCell<DisplayState>,
}

impl<S: DisplaySurface> DisplayController<S> {
    /// Wrap `surface`, hiding both regions so the initial state is `Neutral`.
    pub fn new(surface: S) -> Self {
        let controller = Self { surface, state: RefCell::new(DisplayState::Neutral) };
        controller.hide_all();
        controller
    }

    pub fn show_result(&self, value: f64) {
        self.surface.set_visible(SurfaceKind::Error, false);
        self.surface.set_text(SurfaceKind::Result, &format_number(value));
        self.surface.set_visible(SurfaceKind::Result, true);
        self.surface.apply_transition(SurfaceKind::Result, Transition::FadeIn);
        self.state.replace(DisplayState::ShowingResult(value));
    }

    pub fn show_error(&self, message: &str) {
        self.surface.set_visible(SurfaceKind::Result, false);
        self.surface.set_text(SurfaceKind::Error, message);
        self.surface.set_visible(SurfaceKind::Error, true);
        self.surface.apply_transition(SurfaceKind::Error, Transition::Shake);
        self.state.replace(DisplayState::ShowingError(message.to_owned()));
    }

    pub fn hide_all(&self) {
        self.surface.set_visible(SurfaceKind::Result, false);
        self.surface.set_visible(SurfaceKind::Error, false);
        self.state.replace(DisplayState::Neutral);
    }

    #[must_use]
    pub fn state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Render model for one display region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceView {
    pub visible: bool,
    pub text: String,
    pub transition: Option<Transition>,
}

impl SurfaceView {
    /// Class list for the region's container element.
    #[must_use]
    pub fn class_list(&self, base: &str) -> String {
        let mut classes = base.to_owned();
        if !self.visible {
            classes.push_str(" hidden");
        }
        if let Some(transition) = self.transition {
            classes.push(' ');
            classes.push_str(transition.class());
        }
        classes
    }
}

/// [`DisplaySurface`] backed by Leptos signals the page renders from.
#[derive(Clone, Copy, Debug)]
pub struct SignalSurface {
    pub result: RwSignal<SurfaceView>,
    pub error: RwSignal<SurfaceView>,
}

impl SignalSurface {
    #[must_use]
    pub fn new() -> Self {
        Self { result: RwSignal::new(SurfaceView::default()), error: RwSignal::new(SurfaceView::default()) }
    }

    fn signal(&self, kind: SurfaceKind) -> RwSignal<SurfaceView> {
        match kind {
            SurfaceKind::Result => self.result,
            SurfaceKind::Error => self.error,
        }
    }
}

impl Default for SignalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for SignalSurface {
    fn set_visible(&self, kind: SurfaceKind, visible: bool) {
        self.signal(kind).update(|view| {
            view.visible = visible;
            if !visible {
                view.transition = None;
            }
        });
    }

    fn set_text(&self, kind: SurfaceKind, text: &str) {
        self.signal(kind).update(|view| text.clone_into(&mut view.text));
    }

    fn apply_transition(&self, kind: SurfaceKind, transition: Transition) {
        self.signal(kind).update(|view| view.transition = Some(transition));
    }
}
