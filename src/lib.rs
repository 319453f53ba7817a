//! ESP32-CAM sensor initialization code generator.
//!
//! Turns a JSON settings document into the sequence of `esp_camera` sensor
//! calls (plus the flash LED `analogWrite`) that configures an OV-series
//! sensor. Settings missing from the document fall back to built-in
//! defaults, then to `0`.
//!
//! # Quick Start
//!
//! ```no_run
//! use esp32_cam_codegen::generate;
//!
//! let code = generate("config.json")?;
//! println!("{}", code);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Documents that are already in memory go through [`UserSettings`]:
//!
//! ```
//! use esp32_cam_codegen::{generate_from_settings, UserSettings};
//!
//! let user: UserSettings = r#"{"quality": 5}"#.parse()?;
//! let code = generate_from_settings(&user);
//! assert_eq!(code.line_for("quality"), Some("s->set_quality(s, 5);"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod generator;
mod settings;

pub use error::{CodegenError, ErrorKind};
pub use generator::{
    generate, generate_from_settings, resolve, GeneratedCode, Resolved, UserSettings, ValueSource,
};
pub use settings::{
    default_for, render, template_for, value_text, CodeTemplate, CODE_TEMPLATES, DEFAULT_SETTINGS,
    PLACEHOLDER,
};
