//! Request handlers for the sync protocol.

mod identity;
mod sync;

pub use identity::*;
pub use sync::*;
