//! `longopt` is a descriptor driven, long-option command line parser for Rust.
//!
//! Each option is configured with a short textual *descriptor* (ex: `"length=i"`) and the program variable it writes into.
//! `longopt` is in the style of the classic `Getopt::Long` family of parsers, while prioritizing the following design concerns:
//! * *Type safe option parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! The option's type comes from the variable, and the descriptor may only restate (never contradict) it.
//! * *Transactional parsing*:
//! Either every option on the Cli is applied to its variable, or none are.
//! A parse error never leaves the program variables half updated.
//! * *Minimal surface*:
//! There are long options only (`--NAME`), with no help generation, bundling, or abbreviations.
//!
//! # Usage
//! This page includes a few demos on using `longopt`.
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_lengths.rs")]
//! ```
//!
//! The builder demo generates the following Cli program:
//! ```console
//! $ demo_lengths --length 10 --files=hello.world rest
//! length: 10, data: hello.world, verbose: false
//! remaining: ["rest"]
//!
//! $ demo_lengths --noverbose -- --length 10
//! length: 24, data: file.dat, verbose: false
//! remaining: ["--length", "10"]
//!
//! $ demo_lengths --length abc
//! Parse error: 'abc' cannot convert to i64 for '--length'.
//! --length abc
//!          ^
//!
//! $ demo_lengths --width 3
//! Parse error: option '--width' not recognized.
//! --width 3
//! ^
//! ```
//!
//! # Builder Api
//! Configure `longopt` by starting with an [`OptionParser`] and `add`ing descriptor/variable pairs.
//! Alternatively, use [`get_options`] to configure and parse in one call.
//!
//! ### Descriptors
//! A descriptor is `NAME[(=|:)TYPE][MODIFIER]`.
//! * `NAME` is made of the characters `[-_a-zA-Z0-9]`, and is matched on the Cli as `--NAME`.
//! * `=TYPE` declares the option takes a required value, while `:TYPE` declares the value is optional.
//! `TYPE` is one of `b` (bool), `i` (i64), `f` (f64), or `s` (String).
//! * `MODIFIER` is one of:
//!     * `!`: negatable; the flag also accepts `--noNAME`, which sets the variable to `false`.
//!     * `+`: counting; each occurrence increments the `i64` variable.
//!     * `@`: sequence; each occurrence appends to the `Vec` variable.
//!
//! The following combinations are malformed: a `TYPE` with `!` or `+`, `:` with `@`, and `b` with `@`.
//!
//! ### Variables
//! The variable (a [`Destination`]) determines the option's type:
//! ```console
//! Variable      | Default descriptor | Allowed descriptors
//! ---------------------------------------------------------------
//! bool          | flag               | NAME, NAME!, NAME=b
//! i64           | required i64 value | NAME=i, NAME:i, NAME+
//! f64           | required f64 value | NAME=f, NAME:f
//! String        | required text      | NAME=s, NAME:s
//! Vec<i64>      | append i64 values  | NAME=i@
//! Vec<f64>      | append f64 values  | NAME=f@
//! Vec<String>   | append text        | NAME=s@
//! ```
//!
//! Any other combination is reported as a [`ConfigError::TypeMismatch`].
//! An option with an optional value (`:`) that receives no value sets the variable to its zero value (`0`, `0.0`, or `""`).
//!
//! ### Defaults
//! `longopt` does not set defaults; they come from the variable initializations.
//! Variables for options absent from the Cli are left untouched, and sequences are appended to (not replaced).
//!
//! ```
//! let mut paths: Vec<String> = vec!["/etc".to_string()];
//! let remaining = longopt::OptionParser::new()
//!     .add("path=s@", &mut paths)
//!     .build_parser()
//!     .unwrap()
//!     .parse_tokens(&["--path", "/usr"])
//!     .unwrap();
//!
//! assert_eq!(paths, vec!["/etc", "/usr"]);
//! assert!(remaining.is_empty());
//! ```
//!
//! # Cli Semantics
//! `longopt` parses the Cli tokens according to the following set of rules.
//!
//! * Scanning starts at the first token and stops at the first token which does not start with `--`.
//! That token and everything after it is returned as the remainder, in order.
//! Notice, single dash tokens such as `-v` are not options; they stop the scan as well.
//! * The token `--` stops the scan and is itself consumed.
//! For example, `--verbose -- --length 3` returns the remainder `--length 3`.
//! * The value of an option may follow it as the next token, or be attached with `=`.
//! For example, `--length=10` is equivalent to `--length 10`.
//! Only the first `=` is a separator, so `--text=a=b` gives the value `a=b`.
//! * A required value consumes the next token whatever it looks like, so `--text --verbose` gives the value `--verbose`.
//! * An optional value never consumes a next token which starts with `--`.
//! * A flag (or counting option) takes no value; an attached `=VALUE` is ignored.
//! * Values are converted as the option is scanned, but only applied once the entire scan succeeds.
//! On error, all the variables are left as is.
//!
//! # Errors
//! [`ConfigError`]s are found when building the parser, while [`ParseError`]s are found when parsing the tokens.
//! [`get_options`] reports either as a [`GetoptError`].
//!
//! # Features
//! * `unit_test`: For features that help with unit testing (ex: [`GeneralParser::registered_names`]).
//! * `tracing_debug`: Emit `tracing` debug events as options are registered, scanned, and committed.
pub mod derive;
pub use longopt_builder::*;
