//! Service implementations for the monitor

pub mod order_provider;

#[cfg(test)]
mod tests;

pub use order_provider::HttpOrderProvider;
