//! Server-Sent Events (`text/event-stream`) transport.

mod client;
mod decoder;

#[cfg(test)]
mod tests;

pub use client::*;
pub use decoder::*;
