#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Site chrome state: dark mode and the mobile navigation drawer.
///
/// Provided as an `RwSignal` context from the root `App` component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_nav_open: bool,
}
