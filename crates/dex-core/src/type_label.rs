//! Type labels and the dashboard's type filter.

use crate::newtype_string::define_name;

define_name! {
    /// A category tag drawn from the type catalog (e.g. `fire`).
    ///
    /// Uniqueness in the store is on the literal string; the remote API
    /// already emits lowercase labels, so no case folding happens here.
    pub struct TypeLabel;
}

/// Sentinel shown in the type dropdown that disables type filtering.
pub const ANY_TYPE: &str = "(any)";

/// Type predicate applied to the listing query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    /// No type predicate.
    #[default]
    Any,
    /// Only entities associated with this label.
    Label(TypeLabel),
}

impl TypeFilter {
    /// Parse a widget value: blank input or [`ANY_TYPE`] means no filter.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ANY_TYPE) => TypeFilter::Any,
            Some(label) => TypeLabel::try_new(label).map_or(TypeFilter::Any, TypeFilter::Label),
        }
    }

    /// The label being filtered on, if any.
    pub fn label(&self) -> Option<&TypeLabel> {
        match self {
            TypeFilter::Any => None,
            TypeFilter::Label(label) => Some(label),
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::Any => f.write_str(ANY_TYPE),
            TypeFilter::Label(label) => write!(f, "{label}"),
        }
    }
}

#[cfg(test)]
#[path = "type_label_test.rs"]
mod tests;
