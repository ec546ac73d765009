mod bounds;
mod meshbuffer;

pub use bounds::*;
pub use meshbuffer::*;
