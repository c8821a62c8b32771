pub mod clock;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod language;
pub mod logger;
pub mod policy;
pub mod result_type;
pub mod runtime;

#[cfg(test)]
mod tests;
