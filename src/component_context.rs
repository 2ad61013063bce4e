//! Shared component rendering context.
//!
//! Carries the UI metadata an app component may need while rendering or
//! handling events, so the `Component` trait does not grow ad-hoc boolean
//! parameters.

/// Context passed to `Component` trait methods describing UI state.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext {
    focused: bool,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }

    /// Whether the hosting window currently has focus.
    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(false)
    }
}
