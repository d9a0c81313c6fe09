//! Feed connection lifecycle.
//!
//! A [`FeedManager`] owns at most one live push connection. Every new
//! connection closes the previous one first, and the [`ConnectionSlot`]
//! refuses a second concurrent guard should that ever be skipped.
//!
//! ```text
//! FilterSource -> build_query -> FeedManager::read_feed
//!   -> PushStream -> parse -> classify -> RenderSink
//! ```

mod connection;
mod error;
mod guard;
mod manager;
mod slot;
pub mod sse;
mod transport;
mod viewer;

#[cfg(test)]
mod tests;

pub use connection::*;
pub use error::*;
pub use guard::*;
pub use manager::*;
pub use slot::*;
pub use transport::*;
pub use viewer::*;
