use std::path::PathBuf;

use clap::Parser;

use esp32_cam_codegen::generate;

/// Default document name, looked up in the working directory.
const DEFAULT_CONFIG: &str = "config.json";

/// Generate ESP32-CAM sensor initialization code from a JSON settings document.
#[derive(Debug, Parser)]
#[command(
    version,
    after_help = "EXAMPLES:\n    \
                  esp32-cam-codegen\n    \
                  esp32-cam-codegen camera.json > sensor_init.inc\n\n\
                  Settings missing from the document use built-in defaults.\n\
                  Set RUST_LOG=esp32_cam_codegen=debug to see where each value came from."
)]
struct Cli {
    /// Path to the JSON settings document
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG)]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("esp32_cam_codegen=warn"),
    )
    .init();

    let cli = Cli::parse();
    let code = generate(&cli.config)?;
    println!("{}", code);

    Ok(())
}
