// src/ui/shell.rs: app-wide shell state (sidebar, theme, active tool)

use std::rc::Rc;

use ctf_toolbox::catalog::ToolId;
use yew::prelude::*;

use super::browser::DESKTOP_MIN_WIDTH;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub theme: Theme,
    pub active: ToolId,
    pub viewport_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellAction {
    ToggleSidebar,
    OpenSidebar,
    CloseSidebar,
    ToggleTheme,
    Select(ToolId),
    Resize(f64),
}

impl ShellState {
    pub fn initial(viewport_width: f64, start_tool: ToolId) -> Self {
        Self {
            sidebar_open: viewport_width >= DESKTOP_MIN_WIDTH,
            theme: Theme::Dark,
            active: start_tool,
            viewport_width,
        }
    }

    pub fn is_desktop(&self) -> bool {
        self.viewport_width >= DESKTOP_MIN_WIDTH
    }

    pub fn apply(&self, action: ShellAction) -> Self {
        let mut next = self.clone();
        match action {
            ShellAction::ToggleSidebar => next.sidebar_open = !self.sidebar_open,
            ShellAction::OpenSidebar => next.sidebar_open = true,
            ShellAction::CloseSidebar => next.sidebar_open = false,
            ShellAction::ToggleTheme => next.theme = self.theme.toggled(),
            ShellAction::Select(id) => {
                next.active = id;
                if !self.is_desktop() {
                    next.sidebar_open = false;
                }
            }
            ShellAction::Resize(width) => {
                next.viewport_width = width;
                // Crossing the breakpoint resets the sidebar to that layout's default.
                if next.is_desktop() != self.is_desktop() {
                    next.sidebar_open = next.is_desktop();
                }
            }
        }
        next
    }
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

pub type ShellContext = UseReducerHandle<ShellState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_follows_viewport_at_start() {
        assert!(ShellState::initial(1280.0, ToolId::Converter).sidebar_open);
        assert!(!ShellState::initial(375.0, ToolId::Converter).sidebar_open);
        assert_eq!(ShellState::initial(375.0, ToolId::Diff).theme, Theme::Dark);
    }

    #[test]
    fn toggles() {
        let s = ShellState::initial(1280.0, ToolId::Converter);
        let s = s.apply(ShellAction::ToggleSidebar);
        assert!(!s.sidebar_open);
        let s = s.apply(ShellAction::OpenSidebar).apply(ShellAction::ToggleTheme);
        assert!(s.sidebar_open);
        assert_eq!(s.theme, Theme::Light);
        assert!(!s.apply(ShellAction::CloseSidebar).sidebar_open);
    }

    #[test]
    fn select_closes_sidebar_on_mobile_only() {
        let mobile = ShellState::initial(375.0, ToolId::Converter)
            .apply(ShellAction::OpenSidebar)
            .apply(ShellAction::Select(ToolId::Hash));
        assert_eq!(mobile.active, ToolId::Hash);
        assert!(!mobile.sidebar_open);

        let desktop = ShellState::initial(1280.0, ToolId::Converter).apply(ShellAction::Select(ToolId::Hash));
        assert!(desktop.sidebar_open);
    }

    #[test]
    fn resize_across_breakpoint() {
        let s = ShellState::initial(1280.0, ToolId::Converter);
        let narrow = s.apply(ShellAction::Resize(600.0));
        assert!(!narrow.sidebar_open);
        let still_narrow = narrow.apply(ShellAction::OpenSidebar).apply(ShellAction::Resize(700.0));
        assert!(still_narrow.sidebar_open);
        assert!(narrow.apply(ShellAction::Resize(1500.0)).sidebar_open);
    }

    #[test]
    fn reducer_wraps_apply() {
        let s = Rc::new(ShellState::initial(1280.0, ToolId::Converter));
        let next = s.clone().reduce(ShellAction::ToggleTheme);
        assert_eq!(*next, s.apply(ShellAction::ToggleTheme));
    }
}
