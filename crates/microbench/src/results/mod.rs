mod compare;
mod interfaces;
mod reduce;

pub use compare::*;
pub use interfaces::*;
pub use reduce::*;
