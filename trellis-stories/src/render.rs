//! Plain-text drawing of table and field views.

use trellis::field::{FieldView, InputType};
use trellis::table::{CellContent, TableView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MASK: char = '•';
const FAULT_MARK: &str = "!";

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        result.push(ch);
        width += w;
    }
    result.push('…');
    result
}

/// Truncate or right-pad `s` to exactly `width` columns.
pub fn fit(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&out));
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Draw a table view as a grid of text lines.
pub fn table_lines(view: &TableView) -> Vec<String> {
    let selectable = view.select_all.is_some();

    let header_labels: Vec<String> = view
        .headers
        .iter()
        .map(|h| match h.indicator {
            Some(indicator) => format!("{} {}", h.label, indicator),
            None => h.label.clone(),
        })
        .collect();

    let cell_text = |content: &CellContent| match content {
        CellContent::Text(s) => s.clone(),
        CellContent::Fault(_) => FAULT_MARK.to_string(),
    };

    let widths: Vec<usize> = view
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| match h.width {
            Some(w) => usize::from(w),
            None => view
                .rows
                .iter()
                .filter_map(|r| r.cells.get(i))
                .map(|c| display_width(&cell_text(&c.content)))
                .chain(std::iter::once(display_width(&header_labels[i])))
                .max()
                .unwrap_or(0),
        })
        .collect();

    let join = |leading: Option<&str>, cells: Vec<String>| {
        let mut parts: Vec<String> = leading.map(str::to_string).into_iter().collect();
        parts.extend(cells);
        parts.join(" │ ").trim_end().to_string()
    };

    let mut lines = Vec::new();

    let header: Vec<String> = header_labels
        .iter()
        .zip(&widths)
        .map(|(label, w)| fit(label, *w))
        .collect();
    lines.push(join(view.select_all.map(checkbox), header));

    let rule_len = widths.iter().sum::<usize>()
        + 3 * widths.len().saturating_sub(1)
        + if selectable { 6 } else { 0 };
    lines.push("─".repeat(rule_len));

    for row in &view.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| fit(&cell_text(&c.content), *w))
            .collect();
        lines.push(join(row.selected.map(checkbox), cells));
    }

    if let Some(empty) = &view.empty {
        lines.push(empty.message.clone());
    }

    if let Some(label) = view.loading_label {
        lines.push(format!("⟳ {}", label));
    }

    lines
}

/// Draw a field view as label, input box and note lines.
pub fn field_lines(view: &FieldView) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(label) = &view.label {
        lines.push(label.clone());
    }

    let shown = if view.value.is_empty() {
        view.placeholder.clone().unwrap_or_default()
    } else if view.input_type == InputType::Password {
        view.value.chars().map(|_| MASK).collect()
    } else {
        view.value.clone()
    };

    let mut input = format!("[ {} ]", fit(&shown, 24));
    if view.show_spinner {
        input.push_str(" ⟳");
    }
    if view.show_clear {
        input.push_str(" (×)");
    }
    if view.show_reveal_toggle {
        let icon = if view.input_type == InputType::Password { "show" } else { "hide" };
        input.push_str(&format!(" ({})", icon));
    }

    let mut flags = vec![view.size.as_str(), view.variant.as_str()];
    if view.disabled {
        flags.push("disabled");
    }
    if view.aria_invalid == Some(true) {
        flags.push("invalid");
    }
    lines.push(format!("{}  <{}>", input, flags.join(", ")));

    if let Some(error) = &view.error {
        lines.push(format!("✗ {}", error.text));
    } else if let Some(helper) = &view.helper {
        lines.push(helper.text.clone());
    }

    lines
}
