use super::*;

#[test]
fn confidence_renders_two_decimals() {
    assert_eq!(confidence_percent(0.8734), "87.34%");
}

#[test]
fn confidence_bounds_render() {
    assert_eq!(confidence_percent(0.0), "0.00%");
    assert_eq!(confidence_percent(1.0), "100.00%");
}

#[test]
fn confidence_rounds_to_hundredths() {
    assert_eq!(confidence_percent(0.123_456), "12.35%");
}

#[test]
fn out_of_range_confidence_passes_through() {
    assert_eq!(confidence_percent(1.5), "150.00%");
    assert_eq!(confidence_percent(-0.25), "-25.00%");
}

#[test]
fn in_range_check() {
    assert!(confidence_in_range(0.0));
    assert!(confidence_in_range(0.5));
    assert!(confidence_in_range(1.0));
    assert!(!confidence_in_range(1.000_1));
    assert!(!confidence_in_range(-0.1));
    assert!(!confidence_in_range(f64::NAN));
    assert!(!confidence_in_range(f64::INFINITY));
}

#[test]
fn file_size_in_kilobytes() {
    assert_eq!(file_size_kb(0), "0.00 KB");
    assert_eq!(file_size_kb(1024), "1.00 KB");
    assert_eq!(file_size_kb(12_800), "12.50 KB");
}
