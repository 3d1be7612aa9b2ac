mod base;
mod context;
mod handler;
mod interface;
mod middleware;
mod registry;

pub use base::*;
pub(crate) use context::*;
pub(crate) use handler::*;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use registry::*;
