pub mod classify;
pub mod conf;
pub mod event;
pub mod feed;
pub mod logging;
pub mod query;
pub mod sink;
