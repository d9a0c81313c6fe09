mod builder;
mod feed_url;
mod form;
mod types;


pub use builder::*;
pub use feed_url::*;
pub use form::*;
pub use types::*;
