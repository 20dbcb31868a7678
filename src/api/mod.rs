//! High-level, ergonomic API for temperature conversion.
//!
//! `convert` pairs a value with its source `Scale`, runs the matching formula
//! from `core::convert`, and returns a `Conversion` record that knows how to
//! render itself as the human-readable line or as JSON.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::core::convert::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use crate::error::Result;
use crate::types::Scale;

/// Outcome of converting one value from one scale to the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub from: Scale,
    pub to: Scale,
    pub input: f64,
    pub result: f64,
}

impl Conversion {
    /// Human-readable line, e.g. `0.0°C = 32.00°F`.
    pub fn line(&self) -> String {
        self.to_string()
    }

    /// Single-line JSON rendering of the record.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the text line (or JSON when `json` is set) followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W, json: bool) -> Result<()> {
        if json {
            writeln!(out, "{}", self.to_json()?)?;
        } else {
            writeln!(out, "{}", self)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug keeps the trailing ".0" on integral inputs
        write!(
            f,
            "{:?}{} = {:.2}{}",
            self.input,
            self.from.symbol(),
            self.result,
            self.to.symbol()
        )
    }
}

/// Convert `value`, expressed in `from`, into the other scale.
pub fn convert(from: Scale, value: f64) -> Conversion {
    let result = match from {
        Scale::Celsius => celsius_to_fahrenheit(value),
        Scale::Fahrenheit => fahrenheit_to_celsius(value),
    };
    let to = from.target();
    debug!("Converted {} {} -> {} {}", value, from, result, to);
    Conversion {
        from,
        to,
        input: value,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_zero_line() {
        assert_eq!(convert(Scale::Celsius, 0.0).line(), "0.0°C = 32.00°F");
    }

    #[test]
    fn fahrenheit_lines() {
        assert_eq!(convert(Scale::Fahrenheit, 212.0).line(), "212.0°F = 100.00°C");
        assert_eq!(convert(Scale::Fahrenheit, -40.0).line(), "-40.0°F = -40.00°C");
        assert_eq!(convert(Scale::Fahrenheit, 100.0).line(), "100.0°F = 37.78°C");
    }

    #[test]
    fn fractional_input_keeps_its_digits() {
        assert_eq!(convert(Scale::Celsius, 36.6).line(), "36.6°C = 97.88°F");
    }

    #[test]
    fn convert_sets_target_scale() {
        let c = convert(Scale::Celsius, 25.0);
        assert_eq!(c.from, Scale::Celsius);
        assert_eq!(c.to, Scale::Fahrenheit);
        assert_eq!(c.result, 77.0);
    }

    #[test]
    fn json_record() {
        let json = convert(Scale::Celsius, 0.0).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"from":"celsius","to":"fahrenheit","input":0.0,"result":32.0}"#
        );
    }

    #[test]
    fn write_to_appends_newline() {
        let mut buf = Vec::new();
        convert(Scale::Celsius, 100.0).write_to(&mut buf, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "100.0°C = 212.00°F\n");
    }
}
