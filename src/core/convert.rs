//! Linear formulas between the Celsius and Fahrenheit scales.
//!
//! Both functions are total over `f64` and apply no rounding; formatting to a
//! fixed precision happens only when a result is rendered.

/// Convert a Celsius temperature to Fahrenheit: `(c * 9/5) + 32`.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

/// Convert a Fahrenheit temperature to Celsius: `(f - 32) * 5/9`.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
