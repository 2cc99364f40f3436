use std::fmt;

/// The three kinds of inventory section: `[name]`, `[name:vars]` and
/// `[name:children]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Normal,
    Vars,
    Children,
}

impl GroupKind {
    /// Maps the suffix of a `[name:kind]` header to a kind.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "vars" => Some(GroupKind::Vars),
            "children" => Some(GroupKind::Children),
            _ => None,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Normal => write!(f, "hosts"),
            GroupKind::Vars => write!(f, "vars"),
            GroupKind::Children => write!(f, "children"),
        }
    }
}
