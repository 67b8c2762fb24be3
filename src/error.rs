//! Error types for selector construction.

use thiserror::Error;

use crate::category::Category;

/// Errors raised when a fragment cannot be appended to a selector chain.
///
/// Both kinds are raised synchronously at the offending call. The receiver
/// is left untouched and remains usable; the failed call produces no new
/// selector to continue from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A single-occurrence category appeared twice in one chain.
    ///
    /// Only element, id, and pseudo-element fragments are limited to one
    /// occurrence; class, attribute, and pseudo-class fragments may repeat.
    #[error("element, id and pseudo-element may occur at most once per selector (second {category})")]
    DuplicateCategory {
        /// The category that was appended a second time.
        category: Category,
    },

    /// A fragment arrived after a later-ordered category was already added.
    #[error("selector fragments must be added in order: element, id, class, attribute, pseudo-class, pseudo-element ({category} after {later})")]
    OutOfOrder {
        /// The category of the rejected fragment.
        category: Category,
        /// The earliest already-present category that outranks it.
        later: Category,
    },
}
