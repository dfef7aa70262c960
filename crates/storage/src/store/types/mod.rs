#![forbid(unsafe_code)]

mod agents;
mod masters;
mod users;

pub use agents::*;
pub use masters::*;
pub use users::*;
