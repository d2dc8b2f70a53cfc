// CityPulse monitoring API core library.
//
// Serves precomputed analytics over collected social posts and news
// articles, plus filtered search, citizen-engagement metrics, a knowledge
// base, and a summarization proxy to an external generative model.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::Config;
