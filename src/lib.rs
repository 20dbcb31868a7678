#![doc = r#"
tempconv — convert a temperature between the Celsius and Fahrenheit scales.

The crate powers the `tempconv` CLI and can be embedded directly. Only the two
scales are supported; there is no Kelvin support and no physical bound check
(values below absolute zero convert like any other number).

Quick start
-----------
```rust
use tempconv::{convert, Scale};

let c = convert(Scale::Celsius, 0.0);
assert_eq!(c.result, 32.0);
assert_eq!(c.line(), "0.0°C = 32.00°F");
```

Raw formulas
------------
```rust
use tempconv::{celsius_to_fahrenheit, fahrenheit_to_celsius};

assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
```

Useful modules
--------------
- [`api`] — `convert` and the `Conversion` record.
- [`core`] — the pure conversion formulas.
- [`types`] — the `Scale` enum.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use api::{Conversion, convert};
pub use core::convert::{celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use error::{Error, Result};
pub use types::Scale;
