//! Fragment categories and the presence set tracked across a builder chain.
//!
//! CSS fixes the order in which the parts of a compound selector may appear:
//! type, id, class, attribute, pseudo-class, pseudo-element. [`Category`]
//! enumerates those six kinds in that order, and [`Categories`] records which
//! of them a chain already contains, so the ordering rule reduces to an
//! intersection against a suffix mask.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Bitflags recording which fragment categories a chain already contains.
    ///
    /// Flag positions follow the CSS grammar order, so "is any later category
    /// present" is a single intersection against [`Category::later`].
    ///
    /// # Example
    ///
    /// ```
    /// use cssel::{Categories, Category};
    ///
    /// let mut present = Categories::empty();
    /// present |= Category::Element.flag();
    /// present |= Category::Class.flag();
    ///
    /// assert!(present.contains(Categories::CLASS));
    /// assert!(!present.contains(Categories::ID));
    /// assert!(present.intersects(Category::Id.later()));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Categories: u8 {
        /// A type fragment (`div`)
        const ELEMENT        = 0b0000_0001;
        /// An id fragment (`#main`)
        const ID             = 0b0000_0010;
        /// A class fragment (`.primary`)
        const CLASS          = 0b0000_0100;
        /// An attribute fragment (`[href]`)
        const ATTRIBUTE      = 0b0000_1000;
        /// A pseudo-class fragment (`:hover`)
        const PSEUDO_CLASS   = 0b0001_0000;
        /// A pseudo-element fragment (`::before`)
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

/// One of the six fragment kinds a selector chain is built from.
///
/// Declaration order is the CSS grammar order and the derived `Ord` relies on
/// it: element < id < class < attribute < pseudo-class < pseudo-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// Type selector (`div`). At most one per chain.
    Element,
    /// Id selector (`#main`). At most one per chain.
    Id,
    /// Class selector (`.primary`). Repeatable.
    Class,
    /// Attribute selector (`[href]`). Repeatable.
    Attribute,
    /// Pseudo-class selector (`:hover`). Repeatable.
    PseudoClass,
    /// Pseudo-element selector (`::before`). At most one per chain.
    PseudoElement,
}

impl Category {
    /// All categories, in grammar order.
    pub const ALL: [Category; 6] = [
        Category::Element,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];

    /// The presence flag for this category.
    pub fn flag(self) -> Categories {
        match self {
            Category::Element => Categories::ELEMENT,
            Category::Id => Categories::ID,
            Category::Class => Categories::CLASS,
            Category::Attribute => Categories::ATTRIBUTE,
            Category::PseudoClass => Categories::PSEUDO_CLASS,
            Category::PseudoElement => Categories::PSEUDO_ELEMENT,
        }
    }

    /// Mask of every category at a strictly later grammar position.
    ///
    /// Empty for [`Category::PseudoElement`], which nothing may follow.
    pub fn later(self) -> Categories {
        Categories::from_bits_truncate(!0u8 << (self as u8 + 1))
    }

    /// True for categories limited to a single occurrence per chain.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            Category::Element | Category::Id | Category::PseudoElement
        )
    }

    /// Text prepended to a fragment value of this category.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Element => "",
            Category::Id => "#",
            Category::Class => ".",
            Category::Attribute => "[",
            Category::PseudoClass => ":",
            Category::PseudoElement => "::",
        }
    }

    /// Text appended after a fragment value of this category.
    pub fn suffix(self) -> &'static str {
        match self {
            Category::Attribute => "]",
            _ => "",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Element => "element",
            Category::Id => "id",
            Category::Class => "class",
            Category::Attribute => "attribute",
            Category::PseudoClass => "pseudo-class",
            Category::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}
