use std::any::Any;

use crate::model::{ElementKind, Shape};

/// The caller-owned storage an option writes into.
///
/// Destinations are only written once the whole command line has been scanned successfully.
/// Construct one via `From` (ex: `Destination::from(&mut value)`), or via [`Destination::probe`] when the type is only known at runtime.
///
/// ### Example
/// ```
/// # use longopt_builder as longopt;
/// use longopt::Destination;
///
/// let mut length: i64 = 24;
/// let destination = Destination::from(&mut length);
/// assert!(matches!(destination, Destination::Integer(_)));
/// ```
#[derive(Debug)]
pub enum Destination<'a> {
    /// A `bool` flag.
    Boolean(&'a mut bool),
    /// A single `i64` value (or counter).
    Integer(&'a mut i64),
    /// An `i64` value per occurrence.
    IntegerSequence(&'a mut Vec<i64>),
    /// A single `f64` value.
    Float(&'a mut f64),
    /// An `f64` value per occurrence.
    FloatSequence(&'a mut Vec<f64>),
    /// A single `String` value.
    Text(&'a mut String),
    /// A `String` value per occurrence.
    TextSequence(&'a mut Vec<String>),
}

impl<'a> Destination<'a> {
    /// Classify a dynamically typed destination.
    /// Returns `None` when the storage is none of the supported kinds.
    ///
    /// ### Example
    /// ```
    /// # use longopt_builder as longopt;
    /// use longopt::Destination;
    ///
    /// let mut supported: Vec<f64> = Vec::default();
    /// let mut unsupported: u8 = 0;
    /// assert!(Destination::probe(&mut supported).is_some());
    /// assert!(Destination::probe(&mut unsupported).is_none());
    /// ```
    pub fn probe(value: &'a mut (dyn Any + 'static)) -> Option<Self> {
        if value.is::<bool>() {
            value.downcast_mut().map(Destination::Boolean)
        } else if value.is::<i64>() {
            value.downcast_mut().map(Destination::Integer)
        } else if value.is::<Vec<i64>>() {
            value.downcast_mut().map(Destination::IntegerSequence)
        } else if value.is::<f64>() {
            value.downcast_mut().map(Destination::Float)
        } else if value.is::<Vec<f64>>() {
            value.downcast_mut().map(Destination::FloatSequence)
        } else if value.is::<String>() {
            value.downcast_mut().map(Destination::Text)
        } else if value.is::<Vec<String>>() {
            value.downcast_mut().map(Destination::TextSequence)
        } else {
            None
        }
    }

    pub(crate) fn shape(&self) -> Shape {
        let (kind, sequence) = match self {
            Destination::Boolean(_) => (ElementKind::Boolean, false),
            Destination::Integer(_) => (ElementKind::Integer, false),
            Destination::IntegerSequence(_) => (ElementKind::Integer, true),
            Destination::Float(_) => (ElementKind::Float, false),
            Destination::FloatSequence(_) => (ElementKind::Float, true),
            Destination::Text(_) => (ElementKind::Text, false),
            Destination::TextSequence(_) => (ElementKind::Text, true),
        };
        Shape { kind, sequence }
    }
}

macro_rules! destination_from {
    ($type:ty, $variant:ident) => {
        impl<'a> From<&'a mut $type> for Destination<'a> {
            fn from(value: &'a mut $type) -> Self {
                Destination::$variant(value)
            }
        }
    };
}

destination_from!(bool, Boolean);
destination_from!(i64, Integer);
destination_from!(Vec<i64>, IntegerSequence);
destination_from!(f64, Float);
destination_from!(Vec<f64>, FloatSequence);
destination_from!(String, Text);
destination_from!(Vec<String>, TextSequence);
