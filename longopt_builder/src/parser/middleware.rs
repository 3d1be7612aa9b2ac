use std::env;

use crate::parser::{ErrorContext, ParseError, Parser, UserInterface};

/// The configured command line parser.
/// Built via [`OptionParser::build`](crate::OptionParser::build) or [`OptionParser::build_parser`](crate::OptionParser::build_parser).
pub struct GeneralParser<'a> {
    parser: Parser<'a>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for GeneralParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(parser: Parser<'a>, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            parser,
            user_interface,
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// The option names this parser recognizes (including the `no` forms of negatable flags), sorted.
    ///
    /// ### Example
    /// ```
    /// # use longopt_builder as longopt;
    /// use longopt::OptionParser;
    ///
    /// let mut verbose = false;
    /// let parser = OptionParser::new()
    ///     .add("verbose!", &mut verbose)
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// assert_eq!(parser.registered_names(), vec!["noverbose", "verbose"]);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn registered_names(&self) -> Vec<String> {
        self.parser.names()
    }

    /// Run the parser against the input tokens, returning the tokens left over.
    ///
    /// Parsing happens in two phases:
    /// 1. Scanning matches each `--NAME` token to its option and converts its value.
    /// All tokens must scan successfully in order to proceed to the next phase.
    /// 2. Committing applies the converted values, in order.
    /// This phase is the only one which mutates your program variables.
    ///
    /// Scanning stops at the first token which does not start with `--`, or just after the token `--`.
    /// On error none of the variables are modified, and `tokens` is (naturally) left as is.
    ///
    /// ### Example
    /// ```
    /// # use longopt_builder as longopt;
    /// use longopt::OptionParser;
    ///
    /// let mut length: i64 = 24;
    /// let parser = OptionParser::new()
    ///     .add("length=i", &mut length)
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// let remaining = parser.parse_tokens(&["--length", "10", "rest"]).unwrap();
    ///
    /// assert_eq!(length, 10);
    /// assert_eq!(remaining, vec!["rest"]);
    /// ```
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Vec<String>, ParseError> {
        self.parser.consume(tokens).map_err(|(_, error)| error)
    }

    /// Run the parser against the Cli [`env::args`] (excluding the program name), returning the tokens left over.
    ///
    /// See [`GeneralParser::parse_tokens`] for the parsing semantics.
    /// The process arguments themselves are not modified; use the returned remainder instead.
    pub fn parse_env(self) -> Result<Vec<String>, ParseError> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Run the parser against the Cli [`env::args`] (excluding the program name), returning the tokens left over.
    ///
    /// See [`GeneralParser::parse_tokens`] for the parsing semantics.
    /// If the parser encounters an error, it prints the error along with where it occurred, and exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(self) -> Vec<String> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.invoke(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(remaining) => remaining,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    fn invoke(self, tokens: &[&str]) -> Result<Vec<String>, i32> {
        let GeneralParser {
            parser,
            user_interface,
        } = self;

        match parser.consume(tokens) {
            Ok(remaining) => Ok(remaining),
            Err((offset, parse_error)) => {
                user_interface.print_error(parse_error);
                user_interface.print_error_context(ErrorContext::new(offset, tokens));
                Err(1)
            }
        }
    }
}
