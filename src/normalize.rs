use crate::model::CellValue;

/// Corporate-prefix token stripped from name fields before matching. The
/// token is removed wherever it appears, not only as a prefix.
pub const CORPORATE_PREFIX: &str = "株式会社";

/// Semantics applied when canonicalizing an identifying field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Phone,
}

/// Canonicalizes a raw cell for matching. Empty cells normalize to the
/// empty string without running the transform; hyperlink cells contribute
/// their display text only.
pub fn normalize(cell: &CellValue, kind: FieldKind) -> String {
    let text = cell.display_text();
    if text.is_empty() {
        return String::new();
    }
    match kind {
        FieldKind::Name => text.replace(CORPORATE_PREFIX, ""),
        FieldKind::Phone => text.replace('-', ""),
    }
}
