use crate::core::Record;
use std::collections::HashMap;

const KEY_COLUMN: &str = "PEN";

/// 依 PEN 查詢員工資料的唯讀表，啟動時建立一次
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    rows: HashMap<String, Record>,
}

impl EmployeeDirectory {
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut rows = HashMap::with_capacity(records.len());

        for record in records {
            let pen = match record.get(KEY_COLUMN) {
                Some(pen) if !pen.is_empty() => pen.to_string(),
                _ => {
                    tracing::debug!("Skipping row without {}", KEY_COLUMN);
                    continue;
                }
            };

            // 重複的 PEN 以第一筆為準
            if rows.contains_key(&pen) {
                tracing::warn!("Duplicate {} '{}', keeping first row", KEY_COLUMN, pen);
                continue;
            }
            rows.insert(pen, record);
        }

        Self { rows }
    }

    pub fn get(&self, pen: &str) -> Option<&Record> {
        self.rows.get(pen)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::parse_records;

    fn directory() -> EmployeeDirectory {
        let csv = "PEN,first_name\n001,Ada\n002,Alan\n001,Duplicate\n,Nobody\n";
        EmployeeDirectory::from_records(parse_records(csv.as_bytes()).unwrap())
    }

    #[test]
    fn test_lookup_by_pen() {
        let dir = directory();
        assert_eq!(dir.get("002").unwrap().get("first_name"), Some("Alan"));
        assert!(dir.get("999").is_none());
    }

    #[test]
    fn test_first_duplicate_wins_and_blank_keys_skipped() {
        let dir = directory();
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get("001").unwrap().get("first_name"), Some("Ada"));
        assert!(dir.get("").is_none());
    }
}
