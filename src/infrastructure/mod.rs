pub mod feeds;
pub mod market;
pub mod notify;
pub mod translate;
