use crate::core::ExchangeState;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Highlight,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Highlight => style(text).green().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Cell for a lookup that may be missing; `None` renders as a grey "N/A".
pub fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or(Cell::new("N/A").fg(Color::DarkGrey), Cell::new)
}

/// Formats with the currency symbol, or with the code for currencies that
/// only arrived through an import and so have no symbol.
pub fn display_amount(
    state: &ExchangeState,
    amount: f64,
    code: &str,
    decimal_places: usize,
) -> crate::core::Result<String> {
    match state.format_amount(amount, code, true, decimal_places) {
        Ok(formatted) => Ok(formatted),
        Err(_) if state.is_supported(code) => {
            state.format_amount(amount, code, false, decimal_places)
        }
        Err(e) => Err(e),
    }
}
