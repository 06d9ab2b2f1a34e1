use std::collections::BTreeMap;

/// Fixed run configuration: sheet layout, column → field mapping, the
/// listing-status code table, and the artifact filenames. Constructed once
/// at the top level and passed into each component.
#[derive(Debug, Clone)]
pub struct ReconConfig {
    /// Name of the sheet holding the prospect export.
    pub sheet_name: String,
    /// First data row (1-based); everything above is header.
    pub data_start_row: u32,
    /// 0-based column of the company name identifying field.
    pub name_column: u16,
    /// 0-based column of the telephone identifying field.
    pub phone_column: u16,
    /// Number of leading columns excluded from the update mapping.
    pub skip_columns: u16,
    /// Authoritative table updated by the generated script.
    pub table_name: String,
    /// Column letter whose value is translated through the listing code
    /// table instead of being quoted verbatim.
    pub code_column: String,
    /// Listing-status selection labels; the stored code is the label's
    /// index, index 0 being the null-valued "未選択" entry.
    pub listing_labels: Vec<String>,
    /// Column letter → store field name for every updatable column.
    pub column_fields: BTreeMap<String, String>,
    /// Filename of the unmatched-rows workbook artifact.
    pub unmatched_file: String,
    /// Filename of the UPDATE script artifact.
    pub script_file: String,
}

impl Default for ReconConfig {
    fn default() -> Self {
        let column_fields = [
            ("F", "email"),
            ("G", "main_business_sector"),
            ("H", "other_business_sector"),
            ("I", "ipo_type"),
            ("J", "office_number"),
            ("K", "office_name"),
            ("L", "office_type_name1"),
            ("M", "office_type_name2"),
            ("N", "url"),
        ]
        .into_iter()
        .map(|(letter, field)| (letter.to_string(), field.to_string()))
        .collect();

        Self {
            sheet_name: "Sheet1".to_string(),
            data_start_row: 2,
            name_column: 2,
            phone_column: 3,
            skip_columns: 5,
            table_name: "companies".to_string(),
            code_column: "I".to_string(),
            listing_labels: [
                "未選択",
                "未上場",
                "上場準備",
                "東証プライム",
                "東証スタンダード",
                "東証グロース",
                "その他市場",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            column_fields,
            unmatched_file: "not_match.xlsx".to_string(),
            script_file: "update.sql".to_string(),
        }
    }
}

impl ReconConfig {
    /// Resolves a column letter to its store field name.
    pub fn field_for(&self, letter: &str) -> Option<&str> {
        self.column_fields.get(letter).map(String::as_str)
    }

    /// Translates a listing-status display text into its stored code.
    /// Unrecognized text and the "未選択" selection at index 0 both yield
    /// `None`, emitted as SQL null.
    pub fn listing_code(&self, text: &str) -> Option<i64> {
        match self.listing_labels.iter().position(|label| label == text) {
            Some(0) | None => None,
            Some(index) => Some(index as i64),
        }
    }
}

/// Converts a 0-based column index into its spreadsheet letter (A, B, ...,
/// Z, AA, ...).
pub fn column_letter(index: u16) -> String {
    let mut index = index as i32;
    let mut letters = String::new();
    loop {
        letters.insert(0, (b'A' + (index % 26) as u8) as char);
        index = index / 26 - 1;
        if index < 0 {
            break;
        }
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::{ReconConfig, column_letter};

    #[test]
    fn column_letters_cover_single_and_double_width() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(5), "F");
        assert_eq!(column_letter(13), "N");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
    }

    #[test]
    fn listing_code_uses_selection_index() {
        let config = ReconConfig::default();
        assert_eq!(config.listing_code("東証プライム"), Some(3));
        assert_eq!(config.listing_code("東証グロース"), Some(5));
    }

    #[test]
    fn unselected_and_unknown_labels_yield_null() {
        let config = ReconConfig::default();
        assert_eq!(config.listing_code("未選択"), None);
        assert_eq!(config.listing_code("マザーズ"), None);
        assert_eq!(config.listing_code(""), None);
    }

    #[test]
    fn default_mapping_covers_every_update_column() {
        let config = ReconConfig::default();
        for letter in ["F", "G", "H", "I", "J", "K", "L", "M", "N"] {
            assert!(config.field_for(letter).is_some(), "missing {letter}");
        }
        assert!(config.field_for("E").is_none());
        assert!(config.field_for("O").is_none());
    }
}
