//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use matriz::prelude::*;
//! ```

pub use crate::diagnostics::{CollectingHandler, ConsoleHandler, DiagnosticHandler};
pub use crate::error::{MatrizError, Result};
pub use crate::primitives::{Matrix, Vector};
