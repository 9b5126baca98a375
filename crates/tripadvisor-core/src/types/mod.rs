mod common;
mod hours;
mod location;
mod photo;
mod review;

pub use common::*;
pub use hours::*;
pub use location::*;
pub use photo::*;
pub use review::*;
