use crate::config::{ReconConfig, column_letter};
use crate::error::{ReconError, Result};
use crate::model::{MatchResult, RawRow, SheetGrid};

const SAFE_UPDATES_OFF: &str = "SET SQL_SAFE_UPDATES = 0;";
const SAFE_UPDATES_ON: &str = "SET SQL_SAFE_UPDATES = 1;";

/// Builds the UPDATE script for the matched rows, in row order, wrapped in
/// the safety-toggle preamble/postamble. Each statement is keyed by the
/// row's normalized identifying values, not by a store row id.
///
/// Values are embedded without quote escaping; input data must not contain
/// unescaped single quotes (or be sanitized upstream).
pub fn build_update_script(
    grid: &SheetGrid,
    matched: &[MatchResult],
    config: &ReconConfig,
) -> Result<String> {
    let mut script = String::new();
    script.push_str(SAFE_UPDATES_OFF);
    script.push('\n');

    for result in matched {
        if let Some(row) = grid.row(result.row) {
            script.push_str(&build_statement(row, result, config)?);
            script.push('\n');
        }
    }

    script.push_str(SAFE_UPDATES_ON);
    script.push('\n');
    Ok(script)
}

fn build_statement(row: &RawRow, result: &MatchResult, config: &ReconConfig) -> Result<String> {
    let mut assignments = Vec::new();

    for (index, cell) in row.cells.iter().enumerate().skip(config.skip_columns as usize) {
        let letter = column_letter(index as u16);
        let field = config
            .field_for(&letter)
            .ok_or_else(|| ReconError::UnmappedColumn {
                column: letter.clone(),
                row: result.row,
            })?;

        // Hyperlink cells contribute their display text, never the target.
        let text = cell.display_text();
        let assignment = if letter == config.code_column {
            match config.listing_code(text) {
                Some(code) => format!("{field}={code}"),
                None => format!("{field}=null"),
            }
        } else {
            format!("{field}='{text}'")
        };
        assignments.push(assignment);
    }

    Ok(format!(
        "UPDATE {} SET {} WHERE name = '{}' OR tel = '{}';",
        config.table_name,
        assignments.join(", "),
        result.name,
        result.tel
    ))
}

#[cfg(test)]
mod tests {
    use super::build_update_script;
    use crate::config::ReconConfig;
    use crate::error::ReconError;
    use crate::model::{CellValue, MatchResult, RawRow, SheetGrid};

    fn text(value: &str) -> CellValue {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }

    fn source_row(number: u32, listing: &str) -> RawRow {
        let cells = vec![
            text("1"),
            text("担当者"),
            text("株式会社サンプル"),
            text("03-1234-5678"),
            text("備考"),
            text("info@example.co.jp"),
            text("製造業"),
            text(""),
            text(listing),
            text("01"),
            text("本社"),
            text("営業所"),
            text(""),
            text("https://example.co.jp"),
        ];
        RawRow { number, cells }
    }

    fn matched(row: u32) -> MatchResult {
        MatchResult {
            row,
            name: "サンプル".to_string(),
            tel: "0312345678".to_string(),
            candidates: vec![crate::model::CandidateRecord::new("サンプル商事", "0312345678")],
        }
    }

    #[test]
    fn script_wraps_statements_in_safety_toggle() {
        let grid = SheetGrid::new(vec![source_row(2, "未選択")]);
        let script =
            build_update_script(&grid, &[matched(2)], &ReconConfig::default()).expect("script");

        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines.first(), Some(&"SET SQL_SAFE_UPDATES = 0;"));
        assert_eq!(lines.last(), Some(&"SET SQL_SAFE_UPDATES = 1;"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn listing_status_is_code_translated() {
        let grid = SheetGrid::new(vec![source_row(2, "東証プライム")]);
        let script =
            build_update_script(&grid, &[matched(2)], &ReconConfig::default()).expect("script");
        assert!(script.contains("ipo_type=3"), "{script}");

        let grid = SheetGrid::new(vec![source_row(2, "未選択")]);
        let script =
            build_update_script(&grid, &[matched(2)], &ReconConfig::default()).expect("script");
        assert!(script.contains("ipo_type=null"), "{script}");

        let grid = SheetGrid::new(vec![source_row(2, "謎の市場")]);
        let script =
            build_update_script(&grid, &[matched(2)], &ReconConfig::default()).expect("script");
        assert!(script.contains("ipo_type=null"), "{script}");
    }

    #[test]
    fn statement_is_keyed_by_normalized_identifying_values() {
        let grid = SheetGrid::new(vec![source_row(2, "未選択")]);
        let script =
            build_update_script(&grid, &[matched(2)], &ReconConfig::default()).expect("script");
        assert!(
            script.contains("WHERE name = 'サンプル' OR tel = '0312345678';"),
            "{script}"
        );
    }

    #[test]
    fn empty_cells_are_emitted_as_empty_strings() {
        let grid = SheetGrid::new(vec![source_row(2, "未選択")]);
        let script =
            build_update_script(&grid, &[matched(2)], &ReconConfig::default()).expect("script");
        assert!(script.contains("other_business_sector=''"), "{script}");
        assert!(script.contains("office_type_name2=''"), "{script}");
    }

    #[test]
    fn hyperlink_cells_use_their_display_text() {
        let mut row = source_row(2, "未選択");
        row.cells[5] = CellValue::Hyperlink {
            text: "a@b.com".to_string(),
            target: "mailto:a@b.com".to_string(),
        };
        let grid = SheetGrid::new(vec![row]);
        let script =
            build_update_script(&grid, &[matched(2)], &ReconConfig::default()).expect("script");
        assert!(script.contains("email='a@b.com'"), "{script}");
        assert!(!script.contains("mailto:"), "{script}");
    }

    #[test]
    fn unmapped_column_aborts_the_run() {
        let mut row = source_row(2, "未選択");
        row.cells.push(text("はみ出し"));
        let grid = SheetGrid::new(vec![row]);

        let error = build_update_script(&grid, &[matched(2)], &ReconConfig::default())
            .expect_err("column O has no mapping");
        match error {
            ReconError::UnmappedColumn { column, row } => {
                assert_eq!(column, "O");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn statements_follow_row_order_and_output_is_deterministic() {
        let grid = SheetGrid::new(vec![source_row(2, "未選択"), source_row(5, "東証グロース")]);
        let matched_rows = [matched(2), matched(5)];
        let config = ReconConfig::default();

        let first = build_update_script(&grid, &matched_rows, &config).expect("script");
        let second = build_update_script(&grid, &matched_rows, &config).expect("script");
        assert_eq!(first, second);

        let updates: Vec<usize> = ["ipo_type=null", "ipo_type=5"]
            .iter()
            .map(|needle| first.find(needle).expect("both statements present"))
            .collect();
        assert!(updates[0] < updates[1]);
    }
}
