use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constant::DESCRIPTOR_PATTERN;
use crate::model::{ElementKind, Shape};
use crate::parser::ConfigError;

static DESCRIPTOR_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DESCRIPTOR_PATTERN).expect("static regex must compile"));

/// The single modifier a descriptor may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Modifier {
    Plain,
    /// `!`: also registers `--noNAME`.
    Negatable,
    /// `+`: each occurrence increments.
    Counting,
    /// `:`: the value may be omitted.
    Optional,
    /// `@`: each occurrence appends.
    Sequence,
}

/// The parsed form of an option descriptor such as `"length=i"` or `"verbose!"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Descriptor {
    name: String,
    declared: Option<ElementKind>,
    modifier: Modifier,
}

impl Descriptor {
    #[cfg(test)]
    pub(crate) fn new(
        name: impl Into<String>,
        declared: Option<ElementKind>,
        modifier: Modifier,
    ) -> Self {
        Self {
            name: name.into(),
            declared,
            modifier,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Check this descriptor may bind a destination of the given shape.
    pub(crate) fn reconcile(&self, shape: Shape) -> Result<(), ConfigError> {
        let mismatch = |reason: String| ConfigError::TypeMismatch {
            descriptor: self.name.clone(),
            reason,
        };

        if let Some(declared) = self.declared {
            if declared != shape.kind {
                return Err(mismatch(format!(
                    "declared {declared} but the destination is {shape}"
                )));
            }
        }

        match self.modifier {
            Modifier::Counting if shape.kind != ElementKind::Integer || shape.sequence => {
                return Err(mismatch(format!(
                    "counting requires an i64 destination, found {shape}"
                )));
            }
            Modifier::Negatable if shape.kind != ElementKind::Boolean || shape.sequence => {
                return Err(mismatch(format!(
                    "negatable requires a bool destination, found {shape}"
                )));
            }
            _ => {}
        };

        let sequence = self.modifier == Modifier::Sequence;

        if sequence != shape.sequence {
            return Err(mismatch(if sequence {
                format!("sequence descriptor bound to scalar {shape}")
            } else {
                format!("scalar descriptor bound to sequence {shape}")
            }));
        }

        if self.modifier == Modifier::Optional {
            if shape.sequence {
                return Err(mismatch(format!(
                    "optional value is not allowed on {shape}"
                )));
            }

            if shape.kind == ElementKind::Boolean {
                return Err(mismatch(
                    "optional value is not allowed on bool (use 'NAME' or 'NAME!')".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl FromStr for Descriptor {
    type Err = ConfigError;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedDescriptor(descriptor.to_string());
        let captures = DESCRIPTOR_GRAMMAR
            .captures(descriptor)
            .ok_or_else(malformed)?;
        let declared = captures
            .get(3)
            .map(|letter| ElementKind::from_letter(letter.as_str()).ok_or_else(malformed))
            .transpose()?;
        let marker = captures.get(2).map(|m| m.as_str());
        let suffix = captures.get(4).map(|m| m.as_str());

        let modifier = match (marker, suffix) {
            (None | Some("="), None) => Modifier::Plain,
            (Some(":"), None) => Modifier::Optional,
            (None, Some("!")) => Modifier::Negatable,
            (None, Some("+")) => Modifier::Counting,
            (None | Some("="), Some("@")) => Modifier::Sequence,
            // A type with '!' or '+', or an optional sequence.
            _ => return Err(malformed()),
        };

        if modifier == Modifier::Sequence && declared == Some(ElementKind::Boolean) {
            return Err(malformed());
        }

        Ok(Self {
            name: captures[1].to_string(),
            declared,
            modifier,
        })
    }
}
