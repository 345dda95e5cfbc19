//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use xcommon::TemplateLabel;
//!
//! let label = TemplateLabel::from("haiku");
//! assert_eq!(label.as_str(), "haiku");
//! assert_eq!(label.to_string(), "haiku");
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use xcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Identifier newtypes shared across crates.
    //!
    //! ```rust
    //! use xcommon::TemplateLabel;
    //!
    //! let label = TemplateLabel::new("product-copy");
    //! assert!(!label.is_blank());
    //! assert!(TemplateLabel::new("   ").is_blank());
    //! ```

    use std::borrow::Borrow;
    use std::fmt::{Display, Formatter};

    /// Name of a stored prompt template. Also keys the template's conversation session.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct TemplateLabel(String);

    impl TemplateLabel {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }

        pub fn is_blank(&self) -> bool {
            self.0.trim().is_empty()
        }
    }

    impl Display for TemplateLabel {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl Borrow<str> for TemplateLabel {
        fn borrow(&self) -> &str {
            self.0.as_str()
        }
    }

    impl From<String> for TemplateLabel {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for TemplateLabel {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub use context::TemplateLabel;
pub use future::BoxFuture;
