//! Forward elimination as a chain of pure row transforms.
//!
//! Run with: cargo run --example row_reduce

use matriz::prelude::*;

fn main() -> Result<()> {
    let a = Matrix::from_rows(vec![
        vec![2.0, 1.0, -1.0],
        vec![-3.0, -1.0, 2.0],
        vec![-2.0, 1.0, 2.0],
    ])?;
    println!("A =");
    a.print();

    let step1 = a.row_added(1, 0, 1.5)?;
    let step2 = step1.row_added(2, 0, 1.0)?;
    let u = step2.row_added(2, 1, -4.0)?;

    println!("U =");
    u.print();

    let v = Vector::from_slice(&[3.0, 4.0]);
    println!("|{v}| = {}", v.norm());

    Ok(())
}
