//! The immutable selector builder and selector combination.

use std::fmt;

use crate::category::{Categories, Category};
use crate::combinator::Combinator;
use crate::error::SelectorError;

/// A compound selector under construction.
///
/// Every fragment operation borrows the receiver and returns a new
/// `Selector`, so chains can be branched from any intermediate value without
/// affecting it:
///
/// ```
/// use cssel::Selector;
///
/// # fn main() -> Result<(), cssel::SelectorError> {
/// let base = Selector::new().element("input")?;
/// let checked = base.pseudo_class("checked")?;
/// let disabled = base.pseudo_class("disabled")?;
///
/// assert_eq!(checked.stringify(), "input:checked");
/// assert_eq!(disabled.stringify(), "input:disabled");
/// assert_eq!(base.stringify(), "input");
/// # Ok(())
/// # }
/// ```
///
/// Fragments must be appended in grammar order (element, id, class,
/// attribute, pseudo-class, pseudo-element), and element, id, and
/// pseudo-element may each appear at most once. Violations fail with
/// [`SelectorError`]; fragment *values* are passed through uninspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    text: String,
    present: Categories,
}

impl Selector {
    /// Create a new empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no fragments have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    /// The categories already present in this chain.
    pub fn categories(&self) -> Categories {
        self.present
    }

    /// Append a type fragment (`div`). At most one per chain.
    pub fn element(&self, value: &str) -> Result<Selector, SelectorError> {
        self.append(Category::Element, value)
    }

    /// Append an id fragment (`#main`). At most one per chain.
    pub fn id(&self, value: &str) -> Result<Selector, SelectorError> {
        self.append(Category::Id, value)
    }

    /// Append a class fragment (`.primary`). May repeat.
    pub fn class(&self, value: &str) -> Result<Selector, SelectorError> {
        self.append(Category::Class, value)
    }

    /// Append an attribute fragment (`[href$=".png"]`). May repeat.
    ///
    /// The value lands between the brackets as-is; attribute syntax is not
    /// validated here.
    pub fn attr(&self, value: &str) -> Result<Selector, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// Append a pseudo-class fragment (`:hover`). May repeat.
    pub fn pseudo_class(&self, value: &str) -> Result<Selector, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// Append a pseudo-element fragment (`::before`). At most one per chain.
    pub fn pseudo_element(&self, value: &str) -> Result<Selector, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Render the accumulated selector text.
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    fn append(&self, category: Category, value: &str) -> Result<Selector, SelectorError> {
        if category.is_unique() && self.present.contains(category.flag()) {
            log::debug!("rejected duplicate {category} fragment on `{}`", self.text);
            return Err(SelectorError::DuplicateCategory { category });
        }

        let trailing = self.present.intersection(category.later());
        if let Some(later) = Category::ALL.into_iter().find(|c| trailing.contains(c.flag())) {
            log::debug!(
                "rejected out-of-order {category} fragment after {later} on `{}`",
                self.text
            );
            return Err(SelectorError::OutOfOrder { category, later });
        }

        let mut text = String::with_capacity(
            self.text.len() + category.prefix().len() + value.len() + category.suffix().len(),
        );
        text.push_str(&self.text);
        text.push_str(category.prefix());
        text.push_str(value);
        text.push_str(category.suffix());

        Ok(Selector {
            text,
            present: self.present | category.flag(),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A complex selector produced by [`combine`].
///
/// Holds only the rendered text: combined selectors are terminal and accept
/// no further fragment operations, but may themselves be operands of another
/// [`combine`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    text: String,
}

impl ComplexSelector {
    /// Render the accumulated selector text.
    pub fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Selector> for ComplexSelector {
    fn from(selector: Selector) -> Self {
        ComplexSelector {
            text: selector.text,
        }
    }
}

impl From<&Selector> for ComplexSelector {
    fn from(selector: &Selector) -> Self {
        ComplexSelector {
            text: selector.text.clone(),
        }
    }
}

impl From<&ComplexSelector> for ComplexSelector {
    fn from(selector: &ComplexSelector) -> Self {
        selector.clone()
    }
}

/// Join two selectors with a combinator.
///
/// The output places a single space on each side of the combinator token.
/// The descendant token is itself a space, so descendant combination yields
/// three spaces between the operands.
///
/// ```
/// use cssel::{Combinator, Selector, combine};
///
/// # fn main() -> Result<(), cssel::SelectorError> {
/// let menu = Selector::new().element("ul")?.class("menu")?;
/// let item = Selector::new().element("li")?;
///
/// let complex = combine(&menu, Combinator::Child, &item);
/// assert_eq!(complex.stringify(), "ul.menu > li");
/// # Ok(())
/// # }
/// ```
pub fn combine(
    left: impl Into<ComplexSelector>,
    combinator: Combinator,
    right: impl Into<ComplexSelector>,
) -> ComplexSelector {
    let left = left.into();
    let right = right.into();
    ComplexSelector {
        text: format!("{} {} {}", left.text, combinator.token(), right.text),
    }
}
