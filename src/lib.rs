// Library exports for testing
pub mod constants;
pub mod generator;
pub mod thumbnail;
