//! Combinators joining two selectors into a complex selector.

use std::fmt;

/// A combinator token joining two selectors.
///
/// Tokens follow CSS: descendant (a space), child (`>`), adjacent sibling
/// (`+`), general sibling (`~`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Space. The right selector matches anywhere inside the left.
    Descendant,
    /// `>`. The right selector matches a direct child of the left.
    Child,
    /// `+`. The right selector matches the element immediately after the left.
    AdjacentSibling,
    /// `~`. The right selector matches any following sibling of the left.
    GeneralSibling,
}

impl Combinator {
    /// The CSS source token for this combinator.
    pub fn token(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
