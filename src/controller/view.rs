//! Which top-level view is showing, and how navigation between views is sequenced.
//!
//! A navigation happens in two steps. `Begin` closes the menu and starts the fade-out,
//! `Commit` swaps the view once the fade timer fires. Every navigation carries a
//! sequence number and only the most recent one is allowed to commit, so when two
//! navigations overlap the later one wins.

use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

use crate::content::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    About,
    Contact,
    Category,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum View {
    Home,
    About,
    Contact,
    Category(&'static Category),
}

impl View {
    /// A category always wins over the requested kind. A category view with no
    /// category falls back to home.
    pub fn resolve(kind: ViewKind, category: Option<&'static Category>) -> View {
        if let Some(category) = category {
            return View::Category(category);
        }
        match kind {
            ViewKind::Home => View::Home,
            ViewKind::About => View::About,
            ViewKind::Contact => View::Contact,
            ViewKind::Category => {
                warn!("Category view requested without a category, showing home");
                View::Home
            }
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            View::Home => ViewKind::Home,
            View::About => ViewKind::About,
            View::Contact => ViewKind::Contact,
            View::Category(_) => ViewKind::Category,
        }
    }
}

/// Argument of the site-wide navigate callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavRequest {
    pub kind: ViewKind,
    pub category: Option<&'static Category>,
}

impl NavRequest {
    pub fn to(kind: ViewKind) -> Self {
        Self { kind, category: None }
    }

    pub fn category(category: &'static Category) -> Self {
        Self { kind: ViewKind::Category, category: Some(category) }
    }

    pub fn target(&self) -> View {
        View::resolve(self.kind, self.category)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    Begin { seq: u64 },
    Commit { seq: u64, view: View },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouterState {
    pub view: View,
    // Kept after leaving the detail view, never used for rendering outside it.
    pub selected: Option<&'static Category>,
    pub menu_open: bool,
    pub transitioning: bool,
    pub transition_key: u32,
    pending: u64,
}

impl RouterState {
    pub fn new(view: View) -> Self {
        let selected = match view {
            View::Category(category) => Some(category),
            _ => None,
        };
        Self {
            view,
            selected,
            menu_open: false,
            transitioning: false,
            transition_key: 0,
            pending: 0,
        }
    }

    /// The category to render, only while the detail view is active.
    pub fn category(&self) -> Option<&'static Category> {
        match self.view {
            View::Category(category) => Some(category),
            _ => None,
        }
    }

    pub fn apply(&self, action: NavAction) -> Self {
        let mut next = self.clone();
        match action {
            NavAction::ToggleMenu => next.menu_open = !self.menu_open,
            NavAction::CloseMenu => next.menu_open = false,
            NavAction::Begin { seq } => {
                next.menu_open = false;
                next.transitioning = true;
                next.pending = seq;
            }
            NavAction::Commit { seq, view } => {
                if seq != self.pending {
                    debug!("Dropping stale navigation {} (latest is {})", seq, self.pending);
                    return next;
                }
                if let View::Category(category) = view {
                    next.selected = Some(category);
                }
                next.view = view;
                next.transitioning = false;
                next.transition_key = self.transition_key.wrapping_add(1);
            }
        }
        next
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new(View::Home)
    }
}

impl Reducible for RouterState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CATEGORIES;

    fn navigate(state: &RouterState, seq: u64, request: NavRequest) -> RouterState {
        state
            .apply(NavAction::Begin { seq })
            .apply(NavAction::Commit { seq, view: request.target() })
    }

    #[test]
    fn category_request_opens_detail() {
        let category = &CATEGORIES[1];
        let state = navigate(&RouterState::default(), 1, NavRequest::category(category));
        assert_eq!(state.view, View::Category(category));
        assert_eq!(state.category(), Some(category));
        assert_eq!(state.selected, Some(category));
    }

    #[test]
    fn category_forces_detail_whatever_the_kind() {
        let category = &CATEGORIES[0];
        let request = NavRequest { kind: ViewKind::About, category: Some(category) };
        assert_eq!(request.target(), View::Category(category));
    }

    #[test]
    fn category_kind_without_category_goes_home() {
        assert_eq!(View::resolve(ViewKind::Category, None), View::Home);
    }

    #[test]
    fn home_makes_selected_category_irrelevant() {
        let category = &CATEGORIES[2];
        let state = navigate(&RouterState::default(), 1, NavRequest::category(category));
        let state = navigate(&state, 2, NavRequest::to(ViewKind::Home));
        assert_eq!(state.view, View::Home);
        assert_eq!(state.category(), None);
        assert_eq!(state.selected, Some(category));
    }

    #[test]
    fn begin_closes_menu_and_starts_fade() {
        let state = RouterState::default().apply(NavAction::ToggleMenu);
        assert!(state.menu_open);
        let state = state.apply(NavAction::Begin { seq: 1 });
        assert!(!state.menu_open);
        assert!(state.transitioning);
        assert_eq!(state.view, View::Home);
    }

    #[test]
    fn commit_bumps_transition_key() {
        let state = navigate(&RouterState::default(), 1, NavRequest::to(ViewKind::About));
        assert_eq!(state.transition_key, 1);
        assert!(!state.transitioning);
    }

    #[test]
    fn later_navigation_wins() {
        let state = RouterState::default()
            .apply(NavAction::Begin { seq: 1 })
            .apply(NavAction::Begin { seq: 2 })
            .apply(NavAction::Commit { seq: 1, view: View::About });
        assert_eq!(state.view, View::Home);
        assert!(state.transitioning);

        let state = state.apply(NavAction::Commit { seq: 2, view: View::Contact });
        assert_eq!(state.view, View::Contact);
        assert!(!state.transitioning);
        assert_eq!(state.transition_key, 1);
    }

    #[test]
    fn deep_link_starts_on_detail() {
        let category = &CATEGORIES[3];
        let state = RouterState::new(View::Category(category));
        assert_eq!(state.category(), Some(category));
        assert!(!state.transitioning);
    }
}
