//! Integration tests for PrintOptions and formatted output.

use mini_numpy::math::{Matrix, Vector};
use mini_numpy::PrintOptions;

// ---------------------------------------------------------------------------
// PrintOptions parsing / serde
// ---------------------------------------------------------------------------

#[test]
fn print_options_default_is_plain() {
    let opts = PrintOptions::default();
    assert_eq!(opts.precision, None);
    assert_eq!(opts.max_rows, None);
    assert_eq!(opts.max_cols, None);
}

#[test]
fn print_options_from_str() {
    let opts: PrintOptions = "precision=2, max_rows=3".parse().unwrap();
    assert_eq!(opts, PrintOptions::new(Some(2), Some(3), None));
    assert_eq!("".parse::<PrintOptions>().unwrap(), PrintOptions::default());
}

#[test]
fn print_options_from_str_unknown_errors() {
    let result: Result<PrintOptions, _> = "linewidth=80".parse();
    assert!(result.is_err());
    assert!("precision=two".parse::<PrintOptions>().is_err());
    assert!("precision".parse::<PrintOptions>().is_err());
}

#[test]
fn print_options_round_trips_json() {
    let opts = PrintOptions::new(Some(3), None, Some(4));
    let json = serde_json::to_string(&opts).unwrap();
    assert!(json.contains("precision"));
    let back: PrintOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opts);
}

#[test]
fn print_options_partial_json_uses_defaults() {
    let opts: PrintOptions = serde_json::from_str(r#"{"max_cols": 2}"#).unwrap();
    assert_eq!(opts, PrintOptions::new(None, None, Some(2)));
}

// ---------------------------------------------------------------------------
// Formatted output
// ---------------------------------------------------------------------------

#[test]
fn matrix_display_with_precision() {
    let m = Matrix::new(vec![vec![1.0, 2.5], vec![-0.126, 4.0]]).unwrap();
    let opts = PrintOptions::default().with_precision(2);
    assert_eq!(
        m.display_with(&opts).to_string(),
        "Matrix([[1.00, 2.50], [-0.13, 4.00]])"
    );
}

#[test]
fn vector_display_elides_long_vectors() {
    let v: Vector<i32> = (0..10).collect();
    let opts = PrintOptions::new(None, None, Some(2));
    assert_eq!(v.display_with(&opts).to_string(), "Vector(0, 1, ..., 8, 9)");
    // Short vectors are printed in full.
    let short = Vector::new(vec![1, 2, 3, 4]);
    assert_eq!(short.display_with(&opts).to_string(), "Vector(1, 2, 3, 4)");
}
