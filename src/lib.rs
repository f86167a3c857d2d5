pub mod config;
pub mod constants;
pub mod download;
pub mod error;
pub mod fetch;
pub mod output;
pub mod params;
