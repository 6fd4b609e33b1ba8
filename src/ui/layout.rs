//! Responsive layout helpers.
//!
//! [`LayoutContext`] wraps the terminal size and answers the sizing
//! questions the views ask: compact labels, content column width.

/// Terminal breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Widest the content column gets, for readability on large terminals.
pub const MAX_CONTENT_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: use short labels and drop decoration.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Width of the centered content column.
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(2).min(MAX_CONTENT_WIDTH)
    }

    /// Rows for the notification bar: bordered unless extra small.
    pub fn notification_height(&self) -> u16 {
        if self.is_extra_small() {
            1
        } else {
            3
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
