use super::ui;
use crate::core::{ExchangeState, Result};
use comfy_table::Cell;

/// One-line summary of a single conversion.
pub fn render_conversion(
    state: &ExchangeState,
    amount: f64,
    from: &str,
    to: &str,
    decimal_places: usize,
) -> Result<String> {
    let converted = state.convert(amount, from, to)?;
    let rate = state.exchange_rate(from, to)?;

    Ok(format!(
        "{} = {} {}",
        ui::display_amount(state, amount, from, decimal_places)?,
        ui::style_text(
            &ui::display_amount(state, converted, to, decimal_places)?,
            ui::StyleType::Highlight
        ),
        ui::style_text(&format!("(rate {rate:.4})"), ui::StyleType::Subtle)
    ))
}

pub fn render_comparison<S: AsRef<str>>(
    state: &ExchangeState,
    amount: f64,
    base: &str,
    targets: &[S],
    decimal_places: usize,
) -> Result<String> {
    let comparison = state.compare(amount, base, targets)?;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Name"),
        ui::header_cell("Amount"),
        ui::header_cell(&format!("Rate (per {})", base.to_uppercase())),
    ]);

    for (code, entry) in &comparison {
        table.add_row(vec![
            Cell::new(code),
            ui::optional_cell(state.currency_name(code.as_str()).ok()),
            ui::number_cell(state.format_amount(
                entry.amount,
                code.as_str(),
                true,
                decimal_places,
            )?),
            ui::number_cell(format!("{:.4}", entry.rate)),
        ]);
    }

    let title = format!(
        "Comparing {}",
        ui::display_amount(state, amount, base, decimal_places)?
    );
    Ok(format!(
        "{}\n\n{table}",
        ui::style_text(&title, ui::StyleType::Title)
    ))
}

pub fn render_best<S: AsRef<str>>(
    state: &ExchangeState,
    amount: f64,
    from: &str,
    targets: &[S],
) -> Result<String> {
    let best = state.find_best(amount, from, targets)?;
    Ok(format!(
        "Best option: {} ({}) at rate {:.4}",
        ui::style_text(&best.formatted, ui::StyleType::Highlight),
        best.currency,
        best.rate
    ))
}
