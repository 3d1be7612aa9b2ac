//! Builder module for `longopt`.
//! See the `longopt` crate documentation root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use parser::{ConfigError, GeneralParser, GetoptError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
