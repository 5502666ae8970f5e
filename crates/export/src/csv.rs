//! CSV rendering of the lot table.

use inventory::lot::Lot;

/// Fixed column order.
pub const CSV_HEADER: &str = "ID,Quadra,Lote,Tamanho,Valor Total,Entrada,Parcela,Status,Comprador";

/// Render the full lot list as a comma-separated table, one row per lot in
/// registry order. The buyer column is empty for available lots.
pub fn lots_to_csv(lots: &[Lot]) -> String {
    let mut out = String::from(CSV_HEADER);
    for lot in lots {
        out.push('\n');
        out.push_str(&csv_row(lot));
    }
    out
}

fn csv_row(lot: &Lot) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}",
        lot.id,
        lot.quadra,
        lot.lote,
        format_number(f64::from(lot.tamanho)),
        format_number(lot.valor_total),
        format_number(lot.entrada),
        format_number(lot.parcela),
        lot.status.as_key(),
        lot.comprador.as_deref().unwrap_or(""),
    )
}

/// Integral values print without a decimal point, matching the source data.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
