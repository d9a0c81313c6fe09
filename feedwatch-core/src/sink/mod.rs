mod controls;
mod memory;
mod types;


pub use controls::*;
pub use memory::*;
pub use types::*;
