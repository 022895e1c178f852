//! Open/close lifecycle of the menu overlay.
//!
//! The two in-flight phases stand in for a "transitioning" flag: while an
//! enter or exit animation runs, `Show` and `Hide` are ignored.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl MenuPhase {
    pub fn is_transitioning(self) -> bool {
        matches!(self, MenuPhase::Opening | MenuPhase::Closing)
    }

    /// Root container is displayed (and carries the `open` class) from the
    /// start of the enter animation until the exit animation has finished.
    pub fn root_visible(self) -> bool {
        !matches!(self, MenuPhase::Closed)
    }

    pub fn overlay_visible(self) -> bool {
        matches!(self, MenuPhase::Opening | MenuPhase::Open)
    }

    /// Animation class for the content pane.
    pub fn content_class(self) -> Option<&'static str> {
        match self {
            MenuPhase::Opening | MenuPhase::Open => Some("open"),
            MenuPhase::Closing => Some("close"),
            MenuPhase::Closed => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Show,
    Hide,
    /// The running enter/exit animation finished (or its fallback timer fired).
    TransitionEnd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub phase: MenuPhase,
}

impl MenuState {
    /// Next phase for `action`, or `None` when the action is a no-op.
    pub fn next_phase(&self, action: MenuAction) -> Option<MenuPhase> {
        use MenuAction::*;
        use MenuPhase::*;
        match (self.phase, action) {
            (Closed, Show) => Some(Opening),
            (Open, Hide) => Some(Closing),
            (Opening, TransitionEnd) => Some(Open),
            (Closing, TransitionEnd) => Some(Closed),
            _ => None,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.next_phase(action) {
            Some(phase) => Rc::new(MenuState { phase }),
            None => self,
        }
    }
}
