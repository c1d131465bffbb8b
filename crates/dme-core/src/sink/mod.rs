//! Order sinks.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpOrderSink;

use std::io::Write;

use crate::error::SinkError;

/// Delivers a serialized order to its destination.
pub trait OrderSink {
    /// Submit `order_json` to `destination`. Implementations do not retry.
    fn submit(&self, order_json: &str, destination: &str) -> Result<(), SinkError>;
}

/// Writes orders to standard output instead of submitting them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOrderSink;

impl OrderSink for StdoutOrderSink {
    fn submit(&self, order_json: &str, _destination: &str) -> Result<(), SinkError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", order_json)?;
        stdout.flush()?;
        Ok(())
    }
}
