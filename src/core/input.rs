use crate::core::{Record, Storage};
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// 將含標題列的 CSV 內容解析為 Record，缺少的儲存格補空字串
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = row?;
        let data: BTreeMap<String, String> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                (
                    header.to_string(),
                    row.get(i).unwrap_or_default().to_string(),
                )
            })
            .collect();
        records.push(Record { data });
    }

    Ok(records)
}

pub async fn load_records<S: Storage>(storage: &S, path: &str) -> Result<Vec<Record>> {
    tracing::debug!("Reading contacts from: {}", path);
    let data = storage.read_file(path).await?;
    let records = parse_records(&data)?;
    tracing::debug!("Parsed {} rows from {}", records.len(), path);
    Ok(records)
}
