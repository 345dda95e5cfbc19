//! Outbound message directives.
//!
//! ```rust
//! use xchat::Directive;
//!
//! let directive = Directive::new()
//!     .with_style()
//!     .with_repeat_count(3)
//!     .with_label()
//!     .with_trend();
//! assert_eq!(directive.transform("hi"), "$label, 3 prompts, $style, hi, $trend");
//! ```

use crate::ChatError;

pub const STYLE_MARKER: &str = "$style";
pub const LABEL_MARKER: &str = "$label";
pub const TREND_MARKER: &str = "$trend";

/// Flag set that rewrites the user's raw message before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub style: bool,
    pub label: bool,
    pub trend: bool,
    pub repeat_count: u32,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            style: false,
            label: false,
            trend: false,
            repeat_count: 1,
        }
    }
}

impl Directive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self) -> Self {
        self.style = true;
        self
    }

    pub fn with_label(mut self) -> Self {
        self.label = true;
        self
    }

    pub fn with_trend(mut self) -> Self {
        self.trend = true;
        self
    }

    pub fn with_repeat_count(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    pub fn validate(&self) -> Result<(), ChatError> {
        if self.repeat_count == 0 {
            return Err(ChatError::invalid_request("repeat_count must be at least 1"));
        }
        Ok(())
    }

    /// Each prefix lands in front of everything added before it.
    pub fn transform(&self, raw: &str) -> String {
        let mut message = raw.to_string();

        if self.style {
            message = format!("{STYLE_MARKER}, {message}");
        }

        if self.repeat_count > 1 {
            message = format!("{} prompts, {message}", self.repeat_count);
        }

        if self.label {
            message = format!("{LABEL_MARKER}, {message}");
        }

        if self.trend {
            message = format!("{message}, {TREND_MARKER}");
        }

        message
    }
}
