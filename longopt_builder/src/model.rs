/// How many value tokens an option consumes once matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    /// `--NAME` only; any inline or following value is ignored.
    NoArg,
    /// `--NAME [VALUE]`; the value is skipped when absent or flag-like.
    OptionalArg,
    /// `--NAME VALUE` or `--NAME=VALUE`.
    RequiredArg,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The element type held by a destination (or its sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ElementKind {
    Boolean,
    Integer,
    Float,
    Text,
}

impl ElementKind {
    pub(crate) fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "b" => Some(ElementKind::Boolean),
            "i" => Some(ElementKind::Integer),
            "f" => Some(ElementKind::Float),
            "s" => Some(ElementKind::Text),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ElementKind::Boolean => "bool",
            ElementKind::Integer => "i64",
            ElementKind::Float => "f64",
            ElementKind::Text => "String",
        };
        write!(f, "{name}")
    }
}

/// The full shape of a destination: its element kind, and whether it is a sequence of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shape {
    pub kind: ElementKind,
    pub sequence: bool,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sequence {
            write!(f, "Vec<{}>", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
