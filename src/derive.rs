//! Derive Api for `longopt` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a struct `S` of named fields with `#[derive(Default, Getopt)]`.
//! `S` may not have generic parameters.
//! This generates two functions:
//! * `S::getopt_parser(&mut self) -> OptionParser<'_>` which configures an option per field of `self`.
//! * `S::getopt_parse() -> (S, Vec<String>)` which parses the Cli over `S::default()`, returning the tokens left over.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ demo_derived --verbose --verbose --level --path a --path=b --ratio 0.5 rest
//! Parameters { verbose: 2, level: 0, paths: ["a", "b"], ratio: 0.5, dry_run: false, _internal: 0 }
//! remaining: ["rest"]
//!
//! $ demo_derived --dry-run --ratio x
//! Parse error: 'x' cannot convert to f64 for '--ratio'.
//! --dry-run --ratio x
//!                   ^
//! ```
//!
//! ### Field Configuration
//! Each field is configured with the field name as its descriptor, with every `_` replaced by `-` (ex: `dry_run` becomes `--dry-run`).
//! As in the builder Api, the field's type determines the option's type.
//! The following field attributes adjust this:
//! * `#[getopt("DESCRIPTOR")]` uses `DESCRIPTOR` in place of the field name.
//! This is how to configure modifiers and optional values.
//! * `#[getopt(skip)]` does not configure an option for the field.
//! Only one of these may be used on the same field.
//!
//! For example:
//! ```ignore
//! #[derive(Default, Getopt)]
//! struct Parameters {
//!     quiet: bool,
//!     // the above generates:
//!     //  .add("quiet", &mut self.quiet)
//!
//!     #[getopt("color!")]
//!     use_color: bool,
//!     // the above generates:
//!     //  .add("color!", &mut self.use_color)
//!
//!     #[getopt(skip)]
//!     cache: Cache,
//!     // the above does *not* configure an option
//! }
//! ```
//!
//! Since the parser borrows the fields, further options may be added before building it:
//! ```
//! use longopt::derive::*;
//!
//! #[derive(Default, Getopt)]
//! struct Parameters {
//!     max_depth: i64,
//! }
//!
//! let mut parameters = Parameters::default();
//! let mut extra = false;
//! let remaining = parameters
//!     .getopt_parser()
//!     .add("extra", &mut extra)
//!     .build_parser()
//!     .unwrap()
//!     .parse_tokens(&["--max-depth=3", "--extra", "file"])
//!     .unwrap();
//!
//! assert_eq!(parameters.max_depth, 3);
//! assert!(extra);
//! assert_eq!(remaining, vec!["file"]);
//! ```

pub use longopt_derive::*;
