//! # cssel - CSS selector builder
//!
//! A fluent, immutable builder for CSS selector strings. Fragments are
//! appended in the order CSS grammar fixes for a compound selector, with
//! duplicate and ordering violations reported as typed errors, and built
//! selectors can be joined with combinators into complex selectors.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssel::{Combinator, Selector, combine};
//!
//! # fn main() -> Result<(), cssel::SelectorError> {
//! let link = Selector::new()
//!     .element("a")?
//!     .attr("href$=\".png\"")?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.stringify(), "a[href$=\".png\"]:focus");
//!
//! let pair = combine(
//!     &Selector::new().element("div")?.id("main")?,
//!     Combinator::GeneralSibling,
//!     &Selector::new().element("span")?.class("x")?,
//! );
//! assert_eq!(pair.stringify(), "div#main ~ span.x");
//! # Ok(())
//! # }
//! ```
//!
//! ## Fragments
//!
//! - Type: `element("div")` - at most one per chain
//! - Id: `id("main")` - at most one per chain
//! - Class: `class("primary")` - repeatable
//! - Attribute: `attr("href")` - repeatable
//! - Pseudo-class: `pseudo_class("hover")` - repeatable
//! - Pseudo-element: `pseudo_element("before")` - at most one per chain
//!
//! ## Rules
//!
//! - Fragments must be appended in the order above; appending a category
//!   after a later one fails with [`SelectorError::OutOfOrder`].
//! - A second element, id, or pseudo-element fragment fails with
//!   [`SelectorError::DuplicateCategory`].
//! - Fragment values are passed through uninspected; this crate does not
//!   parse or validate CSS syntax inside a fragment.
//! - Every operation returns a new value; nothing is mutated, so chains may
//!   be branched from any intermediate selector.
//!
//! Rejected fragments are also reported through `log::debug!`; the library
//! installs no logger.
//!
//! ## Modules
//!
//! - [`selector`]: The [`Selector`] builder, [`ComplexSelector`], and
//!   [`combine`]
//! - [`category`]: Fragment categories and their presence set
//! - [`combinator`]: Combinator tokens
//! - [`error`]: Error types for rejected fragments

pub mod category;
pub mod combinator;
pub mod error;
pub mod selector;

// Re-export main types at crate root
pub use category::{Categories, Category};
pub use combinator::Combinator;
pub use error::SelectorError;
pub use selector::{ComplexSelector, Selector, combine};
