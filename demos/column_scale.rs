//! Build a 3x3 matrix, derive a column-scaled copy, print both.
//!
//! Run with: cargo run --example column_scale

use matriz::prelude::*;

fn main() -> Result<()> {
    let m = Matrix::from_rows(vec![
        vec![1.0, 2.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ])?;
    m.print();

    let scaled = m.column_scaled(0, -1.0)?;
    m.print();
    scaled.print();

    Ok(())
}
