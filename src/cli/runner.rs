use std::io;

use tracing::{debug, info};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    debug!("Parsed arguments: {:?}", args);

    let (scale, value) = args.input.reading().ok_or(AppError::MissingArgument {
        arg: "--celsius or --fahrenheit".to_string(),
    })?;

    info!("Converting {} from {} to {}", value, scale, scale.target());
    let conversion = tempconv::convert(scale, value);

    conversion
        .write_to(io::stdout().lock(), args.json)
        .map_err(AppError::from)?;

    Ok(())
}
