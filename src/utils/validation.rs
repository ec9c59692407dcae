use crate::utils::error::{Result, StaffQrError};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(StaffQrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(StaffQrError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(StaffQrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StaffQrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StaffQrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| StaffQrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StaffQrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 比例必須落在 (0, 1]
pub fn validate_ratio(field_name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(StaffQrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Ratio must be greater than 0 and at most 1".to_string(),
        });
    }
    Ok(())
}

/// 解析 `#RRGGBB` 格式的顏色
pub fn parse_hex_color(field_name: &str, value: &str) -> Result<[u8; 3]> {
    let invalid = |reason: &str| StaffQrError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let hex = value
        .strip_prefix('#')
        .ok_or_else(|| invalid("Color must start with '#'"))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("Color must be in #RRGGBB format"));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid("Invalid hex digit"))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "http://localhost:5000").is_ok());
        assert!(validate_url("base_url", "https://staff.example.com").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "localhost:5000/employees").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "QR Codes").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("bind", "127.0.0.1:5000").is_ok());
        assert!(validate_socket_addr("bind", "localhost").is_err());
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio("logo.max_width_ratio", 0.25).is_ok());
        assert!(validate_ratio("logo.max_width_ratio", 1.0).is_ok());
        assert!(validate_ratio("logo.max_width_ratio", 0.0).is_err());
        assert!(validate_ratio("logo.max_width_ratio", 1.5).is_err());
        assert!(validate_ratio("logo.max_width_ratio", f64::NAN).is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("render.dark_color", "#284181").unwrap(),
            [0x28, 0x41, 0x81]
        );
        assert_eq!(
            parse_hex_color("render.light_color", "#ffffff").unwrap(),
            [255, 255, 255]
        );
        assert!(parse_hex_color("render.dark_color", "284181").is_err());
        assert!(parse_hex_color("render.dark_color", "#2841").is_err());
        assert!(parse_hex_color("render.dark_color", "#zz4181").is_err());
    }
}
