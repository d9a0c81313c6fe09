pub mod feed_server;
pub mod tracing;

pub use feed_server::{FeedServer, RecordedRequest, Reply};
pub use tracing::{CapturedEvent, captured, init_test_tracing};
