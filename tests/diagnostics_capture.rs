//! The degrade-and-continue paths report through the installed handler.

use std::sync::Arc;

use matriz::diagnostics;
use matriz::prelude::*;

#[test]
fn operator_fallbacks_report_to_installed_handler() {
    let handler = Arc::new(CollectingHandler::new());
    diagnostics::install(handler.clone());

    // Shape mismatch: the sum degrades to the left operand.
    let a = Matrix::from_vec(2, 2, vec![1.0_f64, 2.0, 3.0, 4.0]).expect("sized");
    let b = Matrix::from_vec(3, 3, vec![0.0_f64; 9]).expect("sized");
    let sum = &a + &b;
    assert_eq!(sum, a);

    // Out-of-range access: degrades to the element at (0,0).
    assert!((a.at(5, 5) - 1.0).abs() < 1e-12);

    // Vector dimension mismatch through the assigning operator.
    let mut u = Vector::from_slice(&[1.0_f64, 2.0]);
    let before = u.clone();
    u += &Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    assert_eq!(u, before);

    let messages = handler.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].contains("dimension mismatch"));
    assert!(messages[1].contains("out of range"));
    assert!(messages[1].contains("(5,5)"));
    assert!(messages[2].contains("dimension mismatch"));

    diagnostics::reset();
}
