use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use crate::model::Arity;
use crate::parser::ParseError;

// The same storage may be shared by several handlers (ex: `--flag` & `--noflag`), and by every committer they produce.
pub(crate) type Shared<'a, T> = Rc<RefCell<&'a mut T>>;

pub(crate) fn share<T>(variable: &mut T) -> Shared<'_, T> {
    Rc::new(RefCell::new(variable))
}

/// A deferred write of one converted value.
pub(crate) enum Update<'a, T> {
    Set(Shared<'a, T>, T),
    Append(Shared<'a, Vec<T>>, T),
}

impl<'a, T> Update<'a, T> {
    fn commit(self) {
        match self {
            Update::Set(variable, value) => **variable.borrow_mut() = value,
            Update::Append(variable, value) => variable.borrow_mut().push(value),
        }
    }
}

/// A pending mutation of a destination.
/// Created while scanning; applied only once the whole scan succeeds.
pub(crate) enum Committer<'a> {
    Increment(Shared<'a, i64>),
    Boolean(Update<'a, bool>),
    Integer(Update<'a, i64>),
    Float(Update<'a, f64>),
    Text(Update<'a, String>),
}

impl<'a> std::fmt::Debug for Committer<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Committer::Increment(_) => "Increment",
            Committer::Boolean(_) => "Boolean",
            Committer::Integer(_) => "Integer",
            Committer::Float(_) => "Float",
            Committer::Text(_) => "Text",
        };
        f.debug_struct("Committer")
            .field("kind", &kind)
            .finish_non_exhaustive()
    }
}

impl<'a> Committer<'a> {
    pub(crate) fn commit(self) {
        match self {
            Committer::Increment(variable) => {
                let mut count = variable.borrow_mut();
                **count = count.saturating_add(1);
            }
            Committer::Boolean(update) => update.commit(),
            Committer::Integer(update) => update.commit(),
            Committer::Float(update) => update.commit(),
            Committer::Text(update) => update.commit(),
        }
    }
}

enum Behaviour<'a> {
    Switch(Shared<'a, bool>, bool),
    Count(Shared<'a, i64>),
    Integer(Shared<'a, i64>),
    Float(Shared<'a, f64>),
    Text(Shared<'a, String>),
    IntegerSequence(Shared<'a, Vec<i64>>),
    FloatSequence(Shared<'a, Vec<f64>>),
    TextSequence(Shared<'a, Vec<String>>),
}

/// The runtime behaviour bound to one option name.
pub(crate) struct Handler<'a> {
    arity: Arity,
    behaviour: Behaviour<'a>,
}

impl<'a> std::fmt::Debug for Handler<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("arity", &self.arity)
            .finish()
    }
}

impl<'a> Handler<'a> {
    /// `--NAME` stores `target`.
    pub(crate) fn switch(variable: Shared<'a, bool>, target: bool) -> Self {
        Self {
            arity: Arity::NoArg,
            behaviour: Behaviour::Switch(variable, target),
        }
    }

    /// `--NAME` adds one.
    pub(crate) fn count(variable: Shared<'a, i64>) -> Self {
        Self {
            arity: Arity::NoArg,
            behaviour: Behaviour::Count(variable),
        }
    }

    pub(crate) fn integer(variable: Shared<'a, i64>, optional: bool) -> Self {
        Self::scalar(Behaviour::Integer(variable), optional)
    }

    pub(crate) fn float(variable: Shared<'a, f64>, optional: bool) -> Self {
        Self::scalar(Behaviour::Float(variable), optional)
    }

    pub(crate) fn text(variable: Shared<'a, String>, optional: bool) -> Self {
        Self::scalar(Behaviour::Text(variable), optional)
    }

    pub(crate) fn integer_sequence(variable: Shared<'a, Vec<i64>>) -> Self {
        Self::sequence(Behaviour::IntegerSequence(variable))
    }

    pub(crate) fn float_sequence(variable: Shared<'a, Vec<f64>>) -> Self {
        Self::sequence(Behaviour::FloatSequence(variable))
    }

    pub(crate) fn text_sequence(variable: Shared<'a, Vec<String>>) -> Self {
        Self::sequence(Behaviour::TextSequence(variable))
    }

    fn scalar(behaviour: Behaviour<'a>, optional: bool) -> Self {
        Self {
            arity: if optional {
                Arity::OptionalArg
            } else {
                Arity::RequiredArg
            },
            behaviour,
        }
    }

    fn sequence(behaviour: Behaviour<'a>) -> Self {
        Self {
            arity: Arity::RequiredArg,
            behaviour,
        }
    }

    pub(crate) fn arity(&self) -> Arity {
        self.arity
    }

    /// Convert the (possibly absent) value token into a pending update.
    /// Never touches the destination itself.
    pub(crate) fn handle(
        &self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Committer<'a>, ParseError> {
        let committer = match &self.behaviour {
            Behaviour::Switch(variable, target) => {
                Committer::Boolean(Update::Set(variable.clone(), *target))
            }
            Behaviour::Count(variable) => Committer::Increment(variable.clone()),
            Behaviour::Integer(variable) => {
                Committer::Integer(Update::Set(
                    variable.clone(),
                    convert_or_zero(name, value)?,
                ))
            }
            Behaviour::Float(variable) => {
                Committer::Float(Update::Set(
                    variable.clone(),
                    convert_or_zero(name, value)?,
                ))
            }
            Behaviour::Text(variable) => {
                Committer::Text(Update::Set(
                    variable.clone(),
                    convert_or_zero(name, value)?,
                ))
            }
            Behaviour::IntegerSequence(variable) => {
                Committer::Integer(Update::Append(
                    variable.clone(),
                    convert(name, value)?,
                ))
            }
            Behaviour::FloatSequence(variable) => {
                Committer::Float(Update::Append(
                    variable.clone(),
                    convert(name, value)?,
                ))
            }
            Behaviour::TextSequence(variable) => {
                Committer::Text(Update::Append(
                    variable.clone(),
                    convert(name, value)?,
                ))
            }
        };

        Ok(committer)
    }
}

// An absent value (only reachable for optional handlers) stores the zero value of the kind.
fn convert_or_zero<T: FromStr + Default>(
    name: &str,
    value: Option<&str>,
) -> Result<T, ParseError> {
    match value {
        Some(_) => convert(name, value),
        None => Ok(T::default()),
    }
}

fn convert<T: FromStr>(name: &str, value: Option<&str>) -> Result<T, ParseError> {
    let token = value.ok_or_else(|| ParseError::MissingArgument(name.to_string()))?;
    T::from_str(token).map_err(|_| ParseError::ConversionError {
        name: name.to_string(),
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}
