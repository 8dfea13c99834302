//! Matriz: dense matrix and vector arithmetic primitives.
//!
//! Matriz provides two independent value types — [`Matrix`] and
//! [`Vector`] — with elementwise and product arithmetic, elementary
//! row/column operations, and the basic vector geometry kit (norm,
//! normalize, dot, cross, projection).
//!
//! Shape and index violations surface as [`MatrizError`] from the checked
//! methods; the operator impls instead degrade and continue, reporting
//! through [`diagnostics`] and keeping the left operand's values, so
//! interactive exploration never aborts mid-derivation.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![1.0, 2.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0],
//! ]).expect("rows are rectangular");
//!
//! // Pure transform: the source matrix is untouched.
//! let scaled = m.column_scaled(0, -1.0).expect("column 0 exists");
//! assert_eq!(scaled.get(0, 0).unwrap(), -1.0);
//! assert_eq!(m.get(0, 0).unwrap(), 1.0);
//!
//! let v = Vector::from_slice(&[3.0, 4.0]);
//! assert_eq!(v.norm(), 5.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error taxonomy and the crate [`Result`] alias
//! - [`diagnostics`]: Pluggable sink for degrade-and-continue reports
//! - [`prelude`]: Convenience re-exports

pub mod diagnostics;
pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, Vector};
