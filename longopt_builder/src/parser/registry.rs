use std::collections::HashMap;

use crate::api::{Descriptor, Destination, Modifier};
use crate::constant::NEGATION_PREFIX;
use crate::parser::{share, ConfigError, Handler};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

fn negated_name(name: &str) -> String {
    format!("{NEGATION_PREFIX}{name}")
}

/// Option name to handler.
#[derive(Debug, Default)]
pub(crate) struct Registry<'a> {
    handlers: HashMap<String, Handler<'a>>,
}

impl<'a> Registry<'a> {
    /// Bind the destination under the descriptor's name (and `noNAME` when negatable).
    pub(crate) fn register(
        &mut self,
        descriptor: Descriptor,
        destination: Destination<'a>,
    ) -> Result<(), ConfigError> {
        descriptor.reconcile(destination.shape())?;
        self.check_name_conflict(&descriptor)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registering '{}' ({:?}) for {}.",
                descriptor.name(),
                descriptor.modifier(),
                destination.shape()
            );
        }

        let name = descriptor.name().to_string();
        let optional = descriptor.modifier() == Modifier::Optional;

        // Reconciled above, so only the distinguishing modifiers need matching.
        match (destination, descriptor.modifier()) {
            (Destination::Boolean(variable), Modifier::Negatable) => {
                let variable = share(variable);
                let negated = negated_name(&name);
                self.handlers
                    .insert(name, Handler::switch(variable.clone(), true));
                self.handlers.insert(negated, Handler::switch(variable, false));
            }
            (Destination::Boolean(variable), _) => {
                self.handlers
                    .insert(name, Handler::switch(share(variable), true));
            }
            (Destination::Integer(variable), Modifier::Counting) => {
                self.handlers.insert(name, Handler::count(share(variable)));
            }
            (Destination::Integer(variable), _) => {
                self.handlers
                    .insert(name, Handler::integer(share(variable), optional));
            }
            (Destination::Float(variable), _) => {
                self.handlers
                    .insert(name, Handler::float(share(variable), optional));
            }
            (Destination::Text(variable), _) => {
                self.handlers
                    .insert(name, Handler::text(share(variable), optional));
            }
            (Destination::IntegerSequence(variable), _) => {
                self.handlers
                    .insert(name, Handler::integer_sequence(share(variable)));
            }
            (Destination::FloatSequence(variable), _) => {
                self.handlers
                    .insert(name, Handler::float_sequence(share(variable)));
            }
            (Destination::TextSequence(variable), _) => {
                self.handlers
                    .insert(name, Handler::text_sequence(share(variable)));
            }
        };

        Ok(())
    }

    fn check_name_conflict(&self, descriptor: &Descriptor) -> Result<(), ConfigError> {
        let name = descriptor.name();

        if self.handlers.contains_key(name) {
            return Err(ConfigError::NameConflict(name.to_string()));
        }

        if descriptor.modifier() == Modifier::Negatable {
            let negated = negated_name(name);

            if self.handlers.contains_key(&negated) {
                return Err(ConfigError::NameConflict(negated));
            }
        }

        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Handler<'a>> {
        self.handlers.get(name)
    }

    #[cfg(any(test, feature = "unit_test"))]
    pub(crate) fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Arity;
    use rstest::rstest;
    use std::str::FromStr;

    fn descriptor(value: &str) -> Descriptor {
        Descriptor::from_str(value).unwrap()
    }

    #[test]
    fn register_simple() {
        let mut flag = false;
        let mut registry = Registry::default();

        registry
            .register(descriptor("flag"), Destination::from(&mut flag))
            .unwrap();

        assert_eq!(registry.names(), vec!["flag".to_string()]);
        assert_eq!(registry.get("flag").unwrap().arity(), Arity::NoArg);
        assert_matches!(registry.get("noflag"), None);
    }

    #[test]
    fn register_negatable() {
        let mut flag = false;
        let mut registry = Registry::default();

        registry
            .register(descriptor("flag!"), Destination::from(&mut flag))
            .unwrap();

        assert_eq!(
            registry.names(),
            vec!["flag".to_string(), "noflag".to_string()]
        );
        assert_eq!(registry.get("noflag").unwrap().arity(), Arity::NoArg);
    }

    #[rstest]
    #[case("count+", Arity::NoArg)]
    #[case("value", Arity::RequiredArg)]
    #[case("value=i", Arity::RequiredArg)]
    #[case("value:i", Arity::OptionalArg)]
    fn register_integer(#[case] value: &str, #[case] expected: Arity) {
        let mut variable: i64 = 0;
        let mut registry = Registry::default();
        let descriptor = descriptor(value);
        let name = descriptor.name().to_string();

        registry
            .register(descriptor, Destination::from(&mut variable))
            .unwrap();

        assert_eq!(registry.get(&name).unwrap().arity(), expected);
    }

    #[test]
    fn register_mismatch() {
        let mut variable: i64 = 0;
        let mut registry = Registry::default();

        assert_matches!(
            registry.register(descriptor("flag!"), Destination::from(&mut variable)),
            Err(ConfigError::TypeMismatch { .. })
        );
        assert!(registry.names().is_empty());
    }

    fn register_twice(first: &str, second: &str) -> Result<(), ConfigError> {
        let mut a = false;
        let mut b = false;
        let mut registry = Registry::default();
        registry.register(descriptor(first), Destination::from(&mut a))?;
        registry.register(descriptor(second), Destination::from(&mut b))
    }

    #[rstest]
    #[case("flag", "flag", "flag")]
    #[case("flag!", "flag", "flag")]
    #[case("flag", "flag!", "flag")]
    #[case("flag!", "noflag", "noflag")]
    #[case("noflag", "flag!", "noflag")]
    #[case("flag!", "flag!", "flag")]
    #[case("noflag!", "nonoflag", "nonoflag")]
    fn register_conflict(#[case] first: &str, #[case] second: &str, #[case] conflict: &str) {
        assert_eq!(
            register_twice(first, second).unwrap_err(),
            ConfigError::NameConflict(conflict.to_string())
        );
    }

    #[rstest]
    #[case("flag", "noflag")]
    #[case("noflag", "flag")]
    #[case("flag", "flags")]
    #[case("flag!", "flags")]
    #[case("noflag!", "flag")]
    fn register_no_conflict(#[case] first: &str, #[case] second: &str) {
        register_twice(first, second).unwrap();
    }

    #[test]
    fn register_conflict_any_type() {
        let mut a: i64 = 0;
        let mut b: Vec<String> = Vec::default();
        let mut registry = Registry::default();

        registry
            .register(descriptor("value"), Destination::from(&mut a))
            .unwrap();

        assert_eq!(
            registry
                .register(descriptor("value@"), Destination::from(&mut b))
                .unwrap_err(),
            ConfigError::NameConflict("value".to_string())
        );
    }
}
