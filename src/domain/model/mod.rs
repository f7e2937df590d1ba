mod batch;
mod identity;
mod tweet;

pub use batch::*;
pub use identity::*;
pub use tweet::*;
