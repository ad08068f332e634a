//! Human-readable status strings for the grid chrome

use super::state::PresentationMode;

/// Format a count with comma thousands separators (`10000` → `"10,000"`)
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Header line under the loaded-file title
pub fn summary_line(rows: usize, edited_cells: usize) -> String {
    let edits = if edited_cells > 0 {
        format!("{edited_cells} edited cells")
    } else {
        "No edits".to_string()
    };
    format!("{} rows • {}", format_count(rows), edits)
}

/// Filter bar counter
pub fn showing_line(filtered: usize, total: usize) -> String {
    format!(
        "Showing {} of {} rows",
        format_count(filtered),
        format_count(total)
    )
}

/// Label next to the export action
pub fn edited_label(edited_cells: usize) -> String {
    match edited_cells {
        0 => "No changes made".to_string(),
        1 => "1 cell edited".to_string(),
        n => format!("{n} cells edited"),
    }
}

/// Footer hint, which depends on how cells are opened for editing
pub fn edit_hint(mode: PresentationMode) -> &'static str {
    match mode {
        PresentationMode::Cards => {
            "Tap any cell to edit • Use filters to narrow down data • Use sort controls above"
        }
        PresentationMode::Table => {
            "Double-click any cell to edit • Use filters to narrow down data • Click column headers to sort"
        }
    }
}
