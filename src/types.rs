//! Shared types used across tempconv.
//! Currently just `Scale`, the tag carried by every temperature value.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Unit symbol appended to rendered values.
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
        }
    }

    /// The scale a value of this scale is converted into.
    pub fn target(self) -> Scale {
        match self {
            Scale::Celsius => Scale::Fahrenheit,
            Scale::Fahrenheit => Scale::Celsius,
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Celsius => write!(f, "Celsius"),
            Scale::Fahrenheit => write!(f, "Fahrenheit"),
        }
    }
}
