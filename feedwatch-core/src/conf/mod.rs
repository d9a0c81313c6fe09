mod error;
mod loader;
mod types;
mod validate;


pub use error::*;
pub use loader::*;
pub use types::*;
pub use validate::*;
