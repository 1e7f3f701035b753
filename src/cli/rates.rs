use super::ui;
use crate::core::ExchangeState;
use comfy_table::Cell;

/// Table of every known currency with its rate against the base.
pub fn render_rates(state: &ExchangeState) -> String {
    let base = state.base_currency();
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
        ui::header_cell(&format!("Rate (per {base})")),
    ]);

    for (code, rate) in state.all_rates() {
        table.add_row(vec![
            Cell::new(&code),
            ui::optional_cell(state.currency_name(code.as_str()).ok()),
            ui::optional_cell(state.currency_symbol(code.as_str()).ok()),
            ui::number_cell(format!("{rate:.4}")),
        ]);
    }

    let updated = state.last_updated().format("%Y-%m-%d %H:%M:%S UTC");
    format!(
        "{}\n\n{table}\n\n{}",
        ui::style_text(&format!("Exchange rates (base {base})"), ui::StyleType::Title),
        ui::style_text(&format!("Last updated: {updated}"), ui::StyleType::Subtle)
    )
}
