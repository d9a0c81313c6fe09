mod parse;
mod types;


pub use parse::*;
pub use types::*;
