use crate::config::AppSettings;
use crate::domain::model::RenderSettings;
use crate::utils::error::{Result, StaffQrError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的外觀設定檔，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub render: RenderSection,
    pub logo: LogoSection,
    pub vcard: VCardSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    pub version: i16,
    pub fit: bool,
    pub module_size: u32,
    pub border: u32,
    pub dark_color: String,
    pub light_color: String,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            version: 2,
            fit: true,
            module_size: 10,
            border: 4,
            dark_color: "#284181".to_string(),
            light_color: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSection {
    pub max_width_ratio: f64,
    pub padding_ratio: f64,
}

impl Default for LogoSection {
    fn default() -> Self {
        Self {
            max_width_ratio: 0.25,
            padding_ratio: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VCardSection {
    pub phone_prefix: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StaffQrError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StaffQrError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PHONE_PREFIX})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StaffQrError::ProcessingError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證後轉成執行時使用的設定
    pub fn to_settings(&self) -> Result<AppSettings> {
        self.validate()?;

        Ok(AppSettings {
            render: RenderSettings {
                version: self.render.version,
                fit: self.render.fit,
                module_size: self.render.module_size,
                border: self.render.border,
                dark_color: validation::parse_hex_color("render.dark_color", &self.render.dark_color)?,
                light_color: validation::parse_hex_color(
                    "render.light_color",
                    &self.render.light_color,
                )?,
                logo_max_ratio: self.logo.max_width_ratio,
                logo_padding_ratio: self.logo.padding_ratio,
            },
            phone_prefix: self.vcard.phone_prefix.clone(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("render.version", self.render.version, 1, 40)?;
        validation::validate_range("render.module_size", self.render.module_size, 1, 100)?;
        validation::validate_range("render.border", self.render.border, 0, 64)?;
        validation::parse_hex_color("render.dark_color", &self.render.dark_color)?;
        validation::parse_hex_color("render.light_color", &self.render.light_color)?;
        validation::validate_ratio("logo.max_width_ratio", self.logo.max_width_ratio)?;
        validation::validate_ratio("logo.padding_ratio", self.logo.padding_ratio)?;
        Ok(())
    }
}
