pub mod config;
pub mod keytimes;
pub mod levels;
pub mod scoring;
pub mod session;
pub mod transition;
