//! vCard 3.0 payload construction and output naming.

use crate::domain::model::{present, CardPayload, ContactRecord};

pub fn build_vcard(contact: &ContactRecord, phone_prefix: &str) -> CardPayload {
    let first = contact.first_name_or_empty();
    let last = contact.last_name_or_empty();

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", last, first),
        format!("FN:{} {}", first, last),
    ];

    // ORG:公司;部門，沒有公司時保留空白的第一段
    match (present(&contact.org), present(&contact.department)) {
        (Some(org), Some(department)) => lines.push(format!("ORG:{};{}", org, department)),
        (Some(org), None) => lines.push(format!("ORG:{}", org)),
        (None, Some(department)) => lines.push(format!("ORG:;{}", department)),
        (None, None) => {}
    }

    if let Some(designation) = present(&contact.designation) {
        lines.push(format!("TITLE:{}", designation));
    }

    if let Some(address) = work_address(contact) {
        lines.push(address);
    }

    if let Some(phone) = present(&contact.phone) {
        lines.push(format!("TEL;CELL:{}{}", phone_prefix, phone));
    }

    if let Some(email) = present(&contact.email) {
        lines.push(format!("EMAIL:{}", email));
    }

    if let Some(website) = present(&contact.website) {
        lines.push(format!("URL:{}", website));
    }

    if let Some(linkedin) = present(&contact.linkedin) {
        lines.push(format!("URL:{}", linkedin));
    }

    lines.push("END:VCARD".to_string());
    CardPayload::new(lines)
}

fn work_address(contact: &ContactRecord) -> Option<String> {
    let parts = [
        present(&contact.office_address),
        present(&contact.city),
        present(&contact.region),
        present(&contact.postal_code),
        present(&contact.country),
    ];

    if parts.iter().all(Option::is_none) {
        return None;
    }

    let fields: Vec<&str> = parts.iter().map(|p| p.unwrap_or_default()).collect();
    Some(format!("ADR;TYPE=WORK:;;{}", fields.join(";")))
}

pub fn lookup_link(base_url: &str, pen: &str) -> String {
    format!("{}/employees/{}", base_url.trim_end_matches('/'), pen)
}

pub fn output_file_name(contact: &ContactRecord) -> String {
    format!(
        "{} - {} {}.png",
        contact.pen_or_empty(),
        contact.first_name_or_empty(),
        contact.last_name_or_empty()
    )
}
