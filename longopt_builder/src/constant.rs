pub(crate) const OPTION_PREFIX: &str = "--";
pub(crate) const NEGATION_PREFIX: &str = "no";
pub(crate) const INLINE_SEPARATOR: char = '=';

// name, then an optional type (marker + letter), then an optional modifier.
pub(crate) const DESCRIPTOR_PATTERN: &str = r"^([-_a-zA-Z0-9]+)(?:([=:])([bifs]))?([!+@])?$";
