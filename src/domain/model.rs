use std::collections::BTreeMap;

/// 試算表中的一列原始資料，key 為欄位標題，空白儲存格為空字串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub data: BTreeMap<String, String>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.data.get(column).map(String::as_str)
    }
}

/// 欄位存在且非空時回傳其內容
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub pen: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub org: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub office_address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
}

impl ContactRecord {
    pub fn from_record(record: &Record) -> Self {
        let field = |column: &str| record.get(column).map(str::to_string);

        Self {
            pen: field("PEN"),
            first_name: field("first_name"),
            last_name: field("last_name"),
            designation: field("designation"),
            department: field("department"),
            org: field("org"),
            phone: field("phone"),
            email: field("email"),
            linkedin: field("linkedin"),
            office_address: field("office_address"),
            city: field("city"),
            region: field("region"),
            // 試算表把郵遞區號存成數字時匯出會變成 "12345.0"
            postal_code: record.get("postal_code").map(|raw| {
                raw.strip_suffix(".0").unwrap_or(raw).to_string()
            }),
            country: field("country"),
            website: field("website"),
        }
    }

    pub fn pen_or_empty(&self) -> &str {
        self.pen.as_deref().unwrap_or_default()
    }

    pub fn first_name_or_empty(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }

    pub fn last_name_or_empty(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }
}

/// vCard 內容，每個元素為一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayload {
    lines: Vec<String>,
}

impl CardPayload {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PayloadMode {
    /// 直接編碼 vCard 聯絡人資料
    #[default]
    #[cfg_attr(feature = "cli", value(name = "vcard"))]
    VCard,
    /// 編碼指向查詢服務的連結
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub pen: String,
    pub file_name: String,
    pub payload: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub jobs: Vec<RenderJob>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub version: i16,
    pub fit: bool,
    pub module_size: u32,
    pub border: u32,
    pub dark_color: [u8; 3],
    pub light_color: [u8; 3],
    pub logo_max_ratio: f64,
    pub logo_padding_ratio: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            version: 2,
            fit: true,
            module_size: 10,
            border: 4,
            dark_color: [0x28, 0x41, 0x81],
            light_color: [0xFF, 0xFF, 0xFF],
            logo_max_ratio: 0.25,
            logo_padding_ratio: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        Record {
            data: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_present_treats_empty_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("Acme".to_string())), Some("Acme"));
    }

    #[test]
    fn test_from_record_keeps_missing_columns_as_none() {
        let contact = ContactRecord::from_record(&record(&[("PEN", "001"), ("org", "")]));
        assert_eq!(contact.pen.as_deref(), Some("001"));
        assert_eq!(contact.org.as_deref(), Some(""));
        assert_eq!(contact.city, None);
    }

    #[test]
    fn test_postal_code_float_suffix_is_stripped() {
        let contact = ContactRecord::from_record(&record(&[("postal_code", "94107.0")]));
        assert_eq!(contact.postal_code.as_deref(), Some("94107"));

        let contact = ContactRecord::from_record(&record(&[("postal_code", "SW1A 1AA")]));
        assert_eq!(contact.postal_code.as_deref(), Some("SW1A 1AA"));
    }

    #[test]
    fn test_float_suffix_only_stripped_from_postal_code() {
        let contact = ContactRecord::from_record(&record(&[("phone", "5551234.0")]));
        assert_eq!(contact.phone.as_deref(), Some("5551234.0"));
    }

    #[test]
    fn test_card_payload_joins_with_newlines() {
        let payload = CardPayload::new(vec!["BEGIN:VCARD".into(), "END:VCARD".into()]);
        assert_eq!(payload.to_text(), "BEGIN:VCARD\nEND:VCARD");
        assert_eq!(payload.lines().len(), 2);
    }
}
