mod core;
mod descriptor;
mod destination;

pub use self::core::*;
pub(crate) use descriptor::*;
pub use destination::*;
