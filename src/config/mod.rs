pub mod cli;
pub mod toml_config;

use crate::domain::model::RenderSettings;

#[cfg(feature = "cli")]
pub use self::command_line::CliConfig;

pub const VCARD_OUTPUT_DIR: &str = "QR Codes";
pub const LINK_OUTPUT_DIR: &str = "Dynamic qr";

/// 由 TOML 設定檔解析出的外觀設定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSettings {
    pub render: RenderSettings,
    pub phone_prefix: String,
}

#[cfg(feature = "cli")]
mod command_line {
    use super::{AppSettings, LINK_OUTPUT_DIR, VCARD_OUTPUT_DIR};
    use crate::core::ConfigProvider;
    use crate::domain::model::{PayloadMode, RenderSettings};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "staff-qr")]
    #[command(about = "Generate employee QR codes from a contact spreadsheet")]
    pub struct CliConfig {
        /// CSV export of the contact spreadsheet
        #[arg(long, default_value = "contacts.csv")]
        pub input_path: String,

        /// Output directory (defaults to "QR Codes", or "Dynamic qr" in link mode)
        #[arg(long)]
        pub output_path: Option<String>,

        #[arg(long, default_value = "logo.jpg")]
        pub logo_path: String,

        #[arg(long, value_enum, default_value_t = PayloadMode::VCard)]
        pub mode: PayloadMode,

        /// Base URL embedded in link-mode codes
        #[arg(long, default_value = "http://localhost:5000")]
        pub base_url: String,

        /// Serve the employee lookup endpoint after generating
        #[arg(long)]
        pub serve: bool,

        #[arg(long, default_value = "127.0.0.1:5000")]
        pub bind: String,

        /// Optional TOML file with render settings
        #[arg(long)]
        pub config: Option<String>,

        #[arg(long, help = "Emit JSON logs")]
        pub json_logs: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log process CPU and memory per phase")]
        pub monitor: bool,

        #[arg(skip)]
        pub settings: AppSettings,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_path("input_path", &self.input_path)?;
            validation::validate_path("output_path", self.output_path())?;
            validation::validate_path("logo_path", &self.logo_path)?;
            validation::validate_url("base_url", &self.base_url)?;
            validation::validate_socket_addr("bind", &self.bind)?;
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn output_path(&self) -> &str {
            match (&self.output_path, self.mode) {
                (Some(path), _) => path.as_str(),
                (None, PayloadMode::VCard) => VCARD_OUTPUT_DIR,
                (None, PayloadMode::Link) => LINK_OUTPUT_DIR,
            }
        }

        fn logo_path(&self) -> &str {
            &self.logo_path
        }

        fn payload_mode(&self) -> PayloadMode {
            self.mode
        }

        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn phone_prefix(&self) -> &str {
            &self.settings.phone_prefix
        }

        fn render_settings(&self) -> &RenderSettings {
            &self.settings.render
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults_reproduce_fixed_behavior() {
            let config = CliConfig::parse_from(["staff-qr"]);
            assert_eq!(config.input_path(), "contacts.csv");
            assert_eq!(config.output_path(), "QR Codes");
            assert_eq!(config.logo_path(), "logo.jpg");
            assert_eq!(config.payload_mode(), PayloadMode::VCard);
            assert!(!config.serve);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_link_mode_uses_dynamic_directory() {
            let config = CliConfig::parse_from(["staff-qr", "--mode", "link", "--serve"]);
            assert_eq!(config.output_path(), "Dynamic qr");
            assert!(config.serve);
        }

        #[test]
        fn test_explicit_output_path_wins() {
            let config =
                CliConfig::parse_from(["staff-qr", "--mode", "link", "--output-path", "badges"]);
            assert_eq!(config.output_path(), "badges");
        }

        #[test]
        fn test_invalid_bind_fails_validation() {
            let config = CliConfig::parse_from(["staff-qr", "--bind", "nowhere"]);
            assert!(config.validate().is_err());
        }
    }
}
