//! Pinlist library exports for testing

pub mod core;
pub mod quote;
pub mod tui;

#[cfg(test)]
pub mod test_support;
