//! Schema handlers for the supported NUnit dialects.

mod legacy;
mod modern;

pub use legacy::LegacyHandler;
pub use modern::ModernHandler;
