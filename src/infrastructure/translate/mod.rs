pub mod google;
pub mod noop;
