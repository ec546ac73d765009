mod internal;

mod assets;
mod bird_model;

pub use assets::*;
pub use bird_model::*;
