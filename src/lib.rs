mod generic;
mod presentation;

pub use generic::*;
pub use presentation::*;
