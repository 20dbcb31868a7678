use clap::{Args, Parser};

use tempconv::Scale;

#[derive(Parser, Debug)]
#[command(name = "tempconv", version, about = "Convert temperatures between scales")]
pub struct CliArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the conversion as a JSON record instead of a text line
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Exactly one source temperature must be supplied.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Convert from Celsius to Fahrenheit
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub celsius: Option<f64>,

    /// Convert from Fahrenheit to Celsius
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub fahrenheit: Option<f64>,
}

impl InputArgs {
    /// The supplied value tagged with its scale.
    pub fn reading(&self) -> Option<(Scale, f64)> {
        match (self.celsius, self.fahrenheit) {
            (Some(c), _) => Some((Scale::Celsius, c)),
            (None, Some(f)) => Some((Scale::Fahrenheit, f)),
            (None, None) => None,
        }
    }
}
