//! Integration tests for the ordering and cardinality rules.
//!
//! A chain rejects a fragment when a strictly-later category is already
//! present, and rejects a second element, id, or pseudo-element anywhere in
//! the chain. The error payload names the offending category (and, for
//! ordering violations, the blocking one).

use cssel::{Category, Selector, SelectorError};

// ============================================================================
// OUT-OF-ORDER FRAGMENTS
// ============================================================================

#[test]
fn element_after_id() {
    let err = Selector::new().id("main").unwrap().element("a").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            category: Category::Element,
            later: Category::Id,
        }
    );
}

#[test]
fn id_after_class() {
    let err = Selector::new()
        .class("container")
        .unwrap()
        .id("main")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            category: Category::Id,
            later: Category::Class,
        }
    );
}

#[test]
fn class_after_attr() {
    let err = Selector::new()
        .attr("disabled")
        .unwrap()
        .class("primary")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            category: Category::Class,
            later: Category::Attribute,
        }
    );
}

#[test]
fn attr_after_pseudo_class() {
    let err = Selector::new()
        .pseudo_class("hover")
        .unwrap()
        .attr("lang")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            category: Category::Attribute,
            later: Category::PseudoClass,
        }
    );
}

#[test]
fn pseudo_class_after_pseudo_element() {
    let err = Selector::new()
        .pseudo_element("before")
        .unwrap()
        .pseudo_class("hover")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            category: Category::PseudoClass,
            later: Category::PseudoElement,
        }
    );
}

#[test]
fn nothing_may_follow_a_pseudo_element() {
    let built = Selector::new().pseudo_element("selection").unwrap();
    assert!(built.element("p").is_err());
    assert!(built.id("x").is_err());
    assert!(built.class("y").is_err());
    assert!(built.attr("z").is_err());
    assert!(built.pseudo_class("hover").is_err());
}

#[test]
fn error_names_earliest_blocking_category() {
    // Both class and pseudo-class outrank id; the diagnostic names class.
    let err = Selector::new()
        .class("a")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .id("main")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            category: Category::Id,
            later: Category::Class,
        }
    );
}

// ============================================================================
// DUPLICATE UNIQUE CATEGORIES
// ============================================================================

#[test]
fn second_element_rejected() {
    let err = Selector::new()
        .element("div")
        .unwrap()
        .element("span")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateCategory {
            category: Category::Element,
        }
    );
}

#[test]
fn second_id_rejected() {
    let err = Selector::new().id("a").unwrap().id("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateCategory {
            category: Category::Id,
        }
    );
}

#[test]
fn second_pseudo_element_rejected() {
    let err = Selector::new()
        .pseudo_element("before")
        .unwrap()
        .pseudo_element("after")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateCategory {
            category: Category::PseudoElement,
        }
    );
}

#[test]
fn duplicate_check_precedes_ordering_check() {
    // A second element after a class violates both rules; the duplicate is
    // reported.
    let err = Selector::new()
        .element("div")
        .unwrap()
        .class("x")
        .unwrap()
        .element("span")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateCategory {
            category: Category::Element,
        }
    );
}

// ============================================================================
// ERROR BEHAVIOR
// ============================================================================

#[test]
fn rejected_append_does_not_change_receiver() {
    let selector = Selector::new()
        .element("div")
        .unwrap()
        .class("panel")
        .unwrap();

    assert!(selector.id("main").is_err());
    assert_eq!(selector.stringify(), "div.panel");

    // The receiver stays valid for legal appends.
    let extended = selector.pseudo_class("hover").unwrap();
    assert_eq!(extended.stringify(), "div.panel:hover");
}

#[test]
fn duplicate_error_message() {
    let err = Selector::new()
        .element("div")
        .unwrap()
        .element("span")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "element, id and pseudo-element may occur at most once per selector (second element)"
    );
}

#[test]
fn out_of_order_error_message() {
    let err = Selector::new().id("main").unwrap().element("a").unwrap_err();
    assert_eq!(
        err.to_string(),
        "selector fragments must be added in order: element, id, class, attribute, \
         pseudo-class, pseudo-element (element after id)"
    );
}
