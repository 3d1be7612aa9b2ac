use std::any::Any;

use crate::api::Destination;
use crate::parser::{
    Binding, ConfigError, ConsoleInterface, GeneralParser, GetoptError, Parser, UserInterface,
};

/// The base command line parser.
///
/// Each option is configured by a *descriptor* paired with the variable it writes into.
/// A descriptor is `NAME[(=|:)TYPE][MODIFIER]`:
/// * `NAME` is made of `[-_a-zA-Z0-9]`, and is used on the Cli as `--NAME`.
/// * `=TYPE` declares a value is required, `:TYPE` declares it is optional.
/// `TYPE` is one of `b` (bool), `i` (i64), `f` (f64), or `s` (String), and must agree with the variable.
/// When omitted, the type is inferred from the variable.
/// * `MODIFIER` is one of `!` (negatable: also accept `--noNAME`), `+` (counting), or `@` (append each occurrence to a `Vec`).
///
/// ### Example
/// ```
/// # use longopt_builder as longopt;
/// use longopt::OptionParser;
///
/// let parser = OptionParser::new()
///     // Configure with OptionParser::add.
///     .build();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct OptionParser<'a> {
    bindings: Vec<Binding<'a>>,
}

impl<'a> Default for OptionParser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OptionParser<'a> {
    /// Create an option parser.
    pub fn new() -> Self {
        Self {
            bindings: Vec::default(),
        }
    }

    /// Add an option to the parser, bound to the `destination` variable.
    ///
    /// The variable is only written to once all the tokens have been parsed successfully.
    /// The order of options does not affect the parser semantics, but configuration errors are reported for the first offending option.
    ///
    /// ### Example
    /// ```
    /// # use longopt_builder as longopt;
    /// use longopt::OptionParser;
    ///
    /// let mut verbose = false;
    /// let mut level: i64 = 0;
    /// let mut paths: Vec<String> = Vec::default();
    /// let parser = OptionParser::new()
    ///     .add("verbose!", &mut verbose)
    ///     .add("level:i", &mut level)
    ///     .add("path=s@", &mut paths)
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// let remaining = parser
    ///     .parse_tokens(&["--path", "a", "--level", "--verbose", "--path=b", "c"])
    ///     .unwrap();
    ///
    /// assert!(verbose);
    /// assert_eq!(level, 0);
    /// assert_eq!(paths, vec!["a", "b"]);
    /// assert_eq!(remaining, vec!["c"]);
    /// ```
    pub fn add(
        mut self,
        descriptor: impl Into<String>,
        destination: impl Into<Destination<'a>>,
    ) -> Self {
        self.bindings
            .push((descriptor.into(), Some(destination.into())));
        self
    }

    /// Add an option to the parser, bound to a variable whose type is only known at runtime.
    ///
    /// If the variable is not one of the types supported by [`Destination`], [`OptionParser::build_parser`] fails with [`ConfigError::UnsupportedDestinationType`].
    ///
    /// ### Example
    /// ```
    /// # use longopt_builder as longopt;
    /// use longopt::{ConfigError, OptionParser};
    ///
    /// let mut small: u8 = 0;
    /// let result = OptionParser::new()
    ///     .add_any("small", &mut small)
    ///     .build_parser();
    ///
    /// assert!(matches!(result, Err(ConfigError::UnsupportedDestinationType(_))));
    /// ```
    pub fn add_any(
        mut self,
        descriptor: impl Into<String>,
        destination: &'a mut (dyn Any + 'static),
    ) -> Self {
        self.bindings
            .push((descriptor.into(), Destination::probe(destination)));
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        let parser = Parser::new(self.bindings)?;
        Ok(GeneralParser::new(parser, user_interface))
    }

    /// Build the option parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the option parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

/// Parse the `tokens` against the descriptor/destination pairs in one call, returning the tokens left over.
///
/// Equivalent to adding each pair to an [`OptionParser`], then `build_parser` and `parse_tokens`.
///
/// ### Example
/// ```
/// # use longopt_builder as longopt;
/// use longopt::{get_options, Destination, GetoptError, ParseError};
///
/// let mut length: i64 = 24;
/// let mut data = "file.dat".to_string();
/// let mut verbose = false;
/// let tokens = ["--files=hello.world", "--length", "10", "--verbose", "rest"];
///
/// let remaining = get_options(
///     &tokens,
///     [
///         ("length=i", Destination::from(&mut length)),
///         ("files=s", Destination::from(&mut data)),
///         ("verbose", Destination::from(&mut verbose)),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(remaining, vec!["rest"]);
/// assert_eq!((length, data.as_str(), verbose), (10, "hello.world", true));
///
/// let error = get_options(&["--oops"], [("flag", Destination::from(&mut verbose))]).unwrap_err();
/// assert_eq!(error, GetoptError::Parse(ParseError::UnrecognizedOption("oops".to_string())));
/// ```
pub fn get_options<'a, D>(
    tokens: &[&str],
    bindings: impl IntoIterator<Item = (D, Destination<'a>)>,
) -> Result<Vec<String>, GetoptError>
where
    D: Into<String>,
{
    let parser = bindings
        .into_iter()
        .fold(OptionParser::new(), |parser, (descriptor, destination)| {
            parser.add(descriptor, destination)
        })
        .build_parser()?;
    Ok(parser.parse_tokens(tokens)?)
}
