use std::str::FromStr;
use thiserror::Error;

use crate::api::{Descriptor, Destination};
use crate::constant::{INLINE_SEPARATOR, OPTION_PREFIX};
use crate::model::Arity;
use crate::parser::{Committer, Registry};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the configuration of the parser, detected when it is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The descriptor does not follow `NAME[(=|:)(b|i|f|s)][!|+|@]`.
    #[error("Config error: descriptor '{0}' not understood.")]
    MalformedDescriptor(String),
    /// The destination is not one of the supported storage types.
    #[error("Config error: destination for '{0}' is not a supported type.")]
    UnsupportedDestinationType(String),
    /// The descriptor cannot bind the destination it was paired with.
    #[error("Config error: descriptor type mismatch for '{descriptor}': {reason}.")]
    TypeMismatch {
        /// The option name.
        descriptor: String,
        /// What does not agree.
        reason: String,
    },
    /// The option name (or its negated form) already exists.
    #[error("Config error: option '{0}' already exists.")]
    NameConflict(String),
}

/// An error in the command line tokens.
/// None of the destinations are modified when this is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `--NAME` token which is not registered.
    #[error("Parse error: option '--{0}' not recognized.")]
    UnrecognizedOption(String),
    /// A value-taking option at the end of the tokens without a value.
    #[error("Parse error: missing required argument for '--{0}'.")]
    MissingArgument(String),
    /// The value cannot be converted into the destination's type.
    #[error("Parse error: '{token}' cannot convert to {type_name} for '--{name}'.")]
    ConversionError {
        /// The option name.
        name: String,
        /// The offending value token.
        token: String,
        /// The destination's element type.
        type_name: &'static str,
    },
}

/// Either kind of error, for the single-call [`get_options`](crate::get_options) api.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetoptError {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub(crate) type Binding<'a> = (String, Option<Destination<'a>>);

pub(crate) struct Parser<'a> {
    registry: Registry<'a>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'a> Parser<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default()).unwrap()
    }

    /// Register every binding, in order, stopping at the first failure.
    pub(crate) fn new(bindings: Vec<Binding<'a>>) -> Result<Self, ConfigError> {
        let mut registry = Registry::default();

        for (text, destination) in bindings.into_iter() {
            // Grammar errors take precedence over everything about the destination.
            let descriptor = Descriptor::from_str(&text)?;
            let destination = destination.ok_or_else(|| {
                ConfigError::UnsupportedDestinationType(descriptor.name().to_string())
            })?;
            registry.register(descriptor, destination)?;
        }

        Ok(Self { registry })
    }

    #[cfg(any(test, feature = "unit_test"))]
    pub(crate) fn names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Scan the tokens and, only if every option is valid, commit all the updates.
    /// Returns the unconsumed remainder, or the offset of the offending token along with the error.
    pub(crate) fn consume(self, tokens: &[&str]) -> Result<Vec<String>, (usize, ParseError)> {
        let (remaining, committers) = self.scan(tokens)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Committing {} update(s).", committers.len());
        }

        for committer in committers {
            committer.commit();
        }

        Ok(remaining)
    }

    fn scan(
        &self,
        tokens: &[&str],
    ) -> Result<(Vec<String>, Vec<Committer<'a>>), (usize, ParseError)> {
        let mut committers = Vec::default();
        let mut index = 0;

        while let Some(stripped) = tokens
            .get(index)
            .and_then(|token| token.strip_prefix(OPTION_PREFIX))
        {
            let option_offset = offset_of(tokens, index);
            index += 1;

            if stripped.is_empty() {
                // The explicit end-of-options marker `--` is consumed, but nothing after it is.
                break;
            }

            let (name, inline) = match stripped.split_once(INLINE_SEPARATOR) {
                Some((name, value)) => (name, Some(value)),
                None => (stripped, None),
            };
            let handler = self.registry.get(name).ok_or_else(|| {
                (
                    option_offset,
                    ParseError::UnrecognizedOption(name.to_string()),
                )
            })?;

            // The value and its offset (for error reporting).
            let value: Option<(usize, &str)> = match (handler.arity(), inline) {
                (Arity::NoArg, _) => None,
                (_, Some(value)) => Some((
                    // Skip past `--NAME=`.
                    option_offset + width(OPTION_PREFIX) + width(name) + 1,
                    value,
                )),
                (arity, None) => match tokens.get(index) {
                    None if arity == Arity::RequiredArg => {
                        return Err((
                            option_offset,
                            ParseError::MissingArgument(name.to_string()),
                        ));
                    }
                    None => None,
                    // Optional values never swallow a flag-like token.
                    Some(next)
                        if arity == Arity::OptionalArg && next.starts_with(OPTION_PREFIX) =>
                    {
                        None
                    }
                    Some(next) => {
                        let value_offset = offset_of(tokens, index);
                        index += 1;
                        Some((value_offset, *next))
                    }
                },
            };

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Matched '--{name}' ({}) with value {:?}.",
                    handler.arity(),
                    value.map(|(_, v)| v)
                );
            }

            let committer = handler
                .handle(name, value.map(|(_, v)| v))
                .map_err(|error| (value.map_or(option_offset, |(o, _)| o), error))?;
            committers.push(committer);
        }

        let remaining = tokens[index..].iter().map(|s| s.to_string()).collect();
        Ok((remaining, committers))
    }
}

// The offset as counted by `ErrorContext`: the characters of all the preceding tokens.
fn offset_of(tokens: &[&str], index: usize) -> usize {
    tokens[..index].iter().map(|token| width(token)).sum()
}

fn width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorContext;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn conversion_error(token: &str) -> ParseError {
        ParseError::ConversionError {
            name: "value".to_string(),
            token: token.to_string(),
            type_name: "i64",
        }
    }

    fn bind<'a>(descriptor: &str, destination: impl Into<Destination<'a>>) -> Binding<'a> {
        (descriptor.to_string(), Some(destination.into()))
    }

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parser_empty() {
        // Setup
        let parser = Parser::empty();

        // Execute
        let result = parser.consume(&[]).unwrap();

        // Verify
        assert_eq!(result, Vec::<String>::default());
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec!["notaflag", "also not a flag"], vec!["notaflag", "also not a flag"])]
    #[case(vec!["-x"], vec!["-x"])]
    #[case(vec!["--"], vec![])]
    #[case(vec!["--", "--x"], vec!["--x"])]
    fn parser_no_options(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let parser = Parser::empty();
        assert_eq!(parser.consume(tokens.as_slice()).unwrap(), strings(&expected));
    }

    #[rstest]
    #[case(vec!["--flag"], vec![])]
    #[case(vec!["--flag", "not a flag"], vec!["not a flag"])]
    #[case(vec!["--flag", "--", "x"], vec!["x"])]
    #[case(vec!["--flag", "--", "--flag"], vec!["--flag"])]
    #[case(vec!["--flag=ignored"], vec![])]
    #[case(vec!["--flag", "--flag"], vec![])]
    #[case(vec!["--flag", "-", "x"], vec!["-", "x"])]
    fn parser_flag(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let mut flag = false;
        let parser = Parser::new(vec![bind("flag", &mut flag)]).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice()).unwrap();

        // Verify
        assert_eq!(result, strings(&expected));
        assert!(flag);
    }

    #[rstest]
    #[case(vec!["--flag"], true)]
    #[case(vec!["--noflag"], false)]
    #[case(vec!["--noflag", "--flag"], true)]
    #[case(vec!["--flag", "--noflag"], false)]
    fn parser_negatable(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        let mut flag = !expected;
        let parser = Parser::new(vec![bind("flag!", &mut flag)]).unwrap();

        let result = parser.consume(tokens.as_slice()).unwrap();

        assert!(result.is_empty());
        assert_eq!(flag, expected);
    }

    #[rstest]
    #[case(vec!["--count"], 4)]
    #[case(vec!["--count", "--count", "--count"], 6)]
    #[case(vec!["--count=10"], 4)]
    fn parser_counting(#[case] tokens: Vec<&str>, #[case] expected: i64) {
        let mut count: i64 = 3;
        let parser = Parser::new(vec![bind("count+", &mut count)]).unwrap();

        parser.consume(tokens.as_slice()).unwrap();

        assert_eq!(count, expected);
    }

    #[rstest]
    #[case(vec!["--value", "5"], 5, vec![])]
    #[case(vec!["--value=5"], 5, vec![])]
    #[case(vec!["--value", "5", "not a flag"], 5, vec!["not a flag"])]
    #[case(vec!["--value=5", "not a flag"], 5, vec!["not a flag"])]
    #[case(vec!["--value=5", "7"], 5, vec!["7"])]
    #[case(vec!["--value", "-5"], -5, vec![])]
    #[case(vec!["--value", "1", "--value", "2"], 2, vec![])]
    fn parser_required(
        #[case] tokens: Vec<&str>,
        #[case] expected: i64,
        #[case] remaining: Vec<&str>,
    ) {
        let mut value: i64 = 3;
        let parser = Parser::new(vec![bind("value", &mut value)]).unwrap();

        let result = parser.consume(tokens.as_slice()).unwrap();

        assert_eq!(result, strings(&remaining));
        assert_eq!(value, expected);
    }

    #[test]
    fn parser_required_takes_flag_like() {
        // Only optional values refuse a flag-like token.
        let mut value = String::default();
        let mut flag = false;
        let parser =
            Parser::new(vec![bind("value=s", &mut value), bind("flag", &mut flag)]).unwrap();

        let result = parser.consume(&["--value", "--flag"]).unwrap();

        assert!(result.is_empty());
        assert_eq!(value, "--flag");
        assert!(!flag);
    }

    #[rstest]
    #[case(vec!["--value"], 0, false, vec![])]
    #[case(vec!["--value", "5"], 5, false, vec![])]
    #[case(vec!["--value=5"], 5, false, vec![])]
    #[case(vec!["--value", "--flag"], 0, true, vec![])]
    #[case(vec!["--value", "--flag", "not a flag"], 0, true, vec!["not a flag"])]
    #[case(vec!["--value", "--", "5"], 0, false, vec!["5"])]
    fn parser_optional(
        #[case] tokens: Vec<&str>,
        #[case] expected: i64,
        #[case] expected_flag: bool,
        #[case] remaining: Vec<&str>,
    ) {
        let mut value: i64 = 10;
        let mut flag = false;
        let parser =
            Parser::new(vec![bind("value:i", &mut value), bind("flag", &mut flag)]).unwrap();

        let result = parser.consume(tokens.as_slice()).unwrap();

        assert_eq!(result, strings(&remaining));
        assert_eq!(value, expected);
        assert_eq!(flag, expected_flag);
    }

    #[test]
    fn parser_sequence() {
        let mut values: Vec<i64> = Vec::default();
        let parser = Parser::new(vec![bind("value@", &mut values)]).unwrap();

        let result = parser.consume(&["--value", "5", "--value=3"]).unwrap();

        assert!(result.is_empty());
        assert_eq!(values, vec![5, 3]);
    }

    #[test]
    fn parser_mixed() {
        // Setup
        let mut length: i64 = 24;
        let mut data = "file.dat".to_string();
        let mut verbose = false;
        let mut ratios: Vec<f64> = vec![0.5];
        let parser = Parser::new(vec![
            bind("length=i", &mut length),
            bind("files=s", &mut data),
            bind("verbose", &mut verbose),
            bind("ratio=f@", &mut ratios),
        ])
        .unwrap();

        // Execute
        let result = parser
            .consume(&[
                "--files=hello.world",
                "--ratio",
                "1.5",
                "--length",
                "10",
                "--verbose",
                "rest",
                "--ratio=2",
            ])
            .unwrap();

        // Verify
        assert_eq!(result, strings(&["rest", "--ratio=2"]));
        assert_eq!(length, 10);
        assert_eq!(data, "hello.world");
        assert!(verbose);
        assert_eq!(ratios, vec![0.5, 1.5]);
    }

    #[rstest]
    #[case(vec!["--noflag"], 0, ParseError::UnrecognizedOption("noflag".to_string()))]
    #[case(vec!["--value", "5", "--other"], 8, ParseError::UnrecognizedOption("other".to_string()))]
    #[case(vec!["--value"], 0, ParseError::MissingArgument("value".to_string()))]
    #[case(vec!["--flag", "--value"], 6, ParseError::MissingArgument("value".to_string()))]
    #[case(
        vec!["--flag", "--value", "x"],
        13,
        conversion_error("x")
    )]
    #[case(
        vec!["--flag", "--value=x"],
        14,
        conversion_error("x")
    )]
    #[case(
        vec!["--value=", "1"],
        8,
        conversion_error("")
    )]
    fn parser_error(
        #[case] tokens: Vec<&str>,
        #[case] offset: usize,
        #[case] expected: ParseError,
    ) {
        // Setup
        let mut flag = false;
        let mut value: i64 = 3;
        let parser =
            Parser::new(vec![bind("flag", &mut flag), bind("value", &mut value)]).unwrap();

        // Execute
        let result = parser.consume(tokens.as_slice());

        // Verify
        assert_eq!(result.unwrap_err(), (offset, expected));
        assert!(!flag);
        assert_eq!(value, 3);
    }

    #[rstest]
    #[case(vec!["--name=ééé", "--value", "x"], 17)]
    #[case(vec!["--name", "日本語", "--value=x"], 17)]
    #[case(vec!["--name=ü", "--value", "5", "--ünknown"], 16)]
    fn parser_error_offset_multibyte(#[case] tokens: Vec<&str>, #[case] offset: usize) {
        // Setup
        let mut name = String::default();
        let mut value: i64 = 3;
        let parser =
            Parser::new(vec![bind("name=s", &mut name), bind("value", &mut value)]).unwrap();

        // Execute
        let (result, _) = parser.consume(tokens.as_slice()).unwrap_err();

        // Verify
        assert_eq!(result, offset);
        assert!(name.is_empty());
        assert_eq!(value, 3);
    }

    #[test]
    fn parser_error_context_multibyte() {
        // Setup
        let mut name = String::default();
        let mut value: i64 = 3;
        let tokens = ["--name=ééé", "--value", "x"];
        let parser =
            Parser::new(vec![bind("name=s", &mut name), bind("value", &mut value)]).unwrap();

        // Execute
        let (offset, _) = parser.consume(&tokens).unwrap_err();
        let context = ErrorContext::new(offset, &tokens).to_string();

        // Verify
        let (line, caret) = context.split_once('\n').unwrap();
        assert_eq!(line.chars().nth(caret.chars().count() - 1), Some('x'));
    }

    #[test]
    fn parser_error_atomic() {
        // Setup
        let mut flag = false;
        let mut count: i64 = 1;
        let mut values: Vec<String> = vec!["a".to_string()];
        let mut ratio: f64 = 0.25;
        let parser = Parser::new(vec![
            bind("flag!", &mut flag),
            bind("count+", &mut count),
            bind("value@", &mut values),
            bind("ratio", &mut ratio),
        ])
        .unwrap();

        // Execute
        let result = parser.consume(&[
            "--flag",
            "--count",
            "--value",
            "b",
            "--ratio",
            "0.5",
            "--ratio",
            "half",
        ]);

        // Verify
        assert_matches!(result, Err((_, ParseError::ConversionError { .. })));
        assert!(!flag);
        assert_eq!(count, 1);
        assert_eq!(values, vec!["a".to_string()]);
        assert_eq!(ratio, 0.25);
    }

    #[rstest]
    #[case("flag=b!")]
    #[case("value:i@")]
    #[case("")]
    fn parser_malformed(#[case] descriptor: &str) {
        let mut flag = false;
        let result = Parser::new(vec![bind(descriptor, &mut flag)]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MalformedDescriptor(descriptor.to_string())
        );
    }

    #[test]
    fn parser_unsupported() {
        let result = Parser::new(vec![("value".to_string(), None)]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::UnsupportedDestinationType("value".to_string())
        );
    }

    #[test]
    fn parser_unsupported_malformed() {
        let result = Parser::new(vec![("value=x".to_string(), None)]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MalformedDescriptor("value=x".to_string())
        );
    }

    #[test]
    fn parser_first_error_wins() {
        let mut a = false;
        let mut b: i64 = 0;
        let result = Parser::new(vec![
            bind("value=s", &mut b),
            bind("flag", &mut a),
            ("bad=".to_string(), None),
        ]);
        assert_matches!(result, Err(ConfigError::TypeMismatch { .. }));
    }

    #[test]
    fn parser_duplicate_option() {
        let mut a: i64 = 0;
        let mut b: i64 = 0;
        let result = Parser::new(vec![bind("value", &mut a), bind("value=i", &mut b)]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::NameConflict("value".to_string())
        );
    }

    #[test]
    fn parser_inline_equivalence() {
        for _ in 0..100 {
            let value: i64 = thread_rng().gen();
            let ratio: f64 = thread_rng().gen();
            let inline = [format!("--value={value}"), format!("--ratio={ratio}")];
            let separate = [
                "--value".to_string(),
                value.to_string(),
                "--ratio".to_string(),
                ratio.to_string(),
            ];

            let mut inline_value: i64 = 0;
            let mut inline_ratio: f64 = 0.0;
            let mut separate_value: i64 = 0;
            let mut separate_ratio: f64 = 0.0;

            Parser::new(vec![bind("value", &mut inline_value), bind("ratio", &mut inline_ratio)])
                .unwrap()
                .consume(&inline.iter().map(AsRef::as_ref).collect::<Vec<&str>>())
                .unwrap();
            Parser::new(vec![
                bind("value", &mut separate_value),
                bind("ratio", &mut separate_ratio),
            ])
            .unwrap()
            .consume(&separate.iter().map(AsRef::as_ref).collect::<Vec<&str>>())
            .unwrap();

            assert_eq!(inline_value, value);
            assert_eq!(separate_value, value);
            assert_eq!(inline_ratio, ratio);
            assert_eq!(separate_ratio, ratio);
        }
    }
}
