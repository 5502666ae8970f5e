//! Lot edit dialog, opened from a map pin click or a table row.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use inventory::lot::{Lot, LotStatus};
use inventory::registry::LotRegistry;
use mapview::status::StatusMessage;

use crate::widgets::{format_brl, status_badge};

/// Edit buffers for the open lot, if any. Text buffers keep half-typed
/// numbers out of the registry until a save passes validation.
#[derive(Resource, Default)]
pub struct LotEditor {
    target: Option<String>,
    quadra: String,
    lote: String,
    tamanho: String,
    valor_total: String,
    entrada: String,
    parcela: String,
    status: LotStatus,
    comprador: String,
    error: Option<String>,
}

impl LotEditor {
    pub fn open(&mut self, lot: &Lot) {
        *self = Self {
            target: Some(lot.id.clone()),
            quadra: lot.quadra.clone(),
            lote: lot.lote.clone(),
            tamanho: lot.tamanho.to_string(),
            valor_total: lot.valor_total.to_string(),
            entrada: lot.entrada.to_string(),
            parcela: lot.parcela.to_string(),
            status: lot.status,
            comprador: lot.comprador.clone().unwrap_or_default(),
            error: None,
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Validate the buffers against the lot being edited. Numeric fields
    /// must parse and be non-negative; the buyer is kept only for reserved
    /// or sold lots. Id and coordinates are never editable here.
    fn build_lot(&self, original: &Lot) -> Result<Lot, String> {
        let tamanho = parse_non_negative(&self.tamanho, "Tamanho")? as f32;
        let valor_total = parse_non_negative(&self.valor_total, "Valor Total")?;
        let entrada = parse_non_negative(&self.entrada, "Entrada")?;
        let parcela = parse_non_negative(&self.parcela, "Parcela")?;

        let comprador = match self.status {
            LotStatus::Disponivel => None,
            LotStatus::Reservado | LotStatus::Vendido => {
                let name = self.comprador.trim();
                (!name.is_empty()).then(|| name.to_string())
            }
        };

        Ok(Lot {
            id: original.id.clone(),
            quadra: self.quadra.trim().to_string(),
            lote: self.lote.trim().to_string(),
            tamanho,
            valor_total,
            entrada,
            parcela,
            status: self.status,
            comprador,
            coordenadas: original.coordenadas,
        })
    }
}

/// Accepts both `1234.5` and the pt-BR comma form `1234,5`.
fn parse_non_negative(text: &str, field: &str) -> Result<f64, String> {
    let cleaned = text.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(format!("{field} deve ser um número não negativo")),
    }
}

pub fn lot_editor_ui(
    mut contexts: EguiContexts,
    mut editor: ResMut<LotEditor>,
    mut registry: ResMut<LotRegistry>,
    mut status_msg: ResMut<StatusMessage>,
) {
    let Some(id) = editor.target.clone() else {
        return;
    };
    let Some(original) = registry.get(&id).cloned() else {
        editor.close();
        return;
    };

    let mut open = true;
    let mut saved = false;
    let mut cancelled = false;

    egui::Window::new(format!("Editar Lote {id}"))
        .open(&mut open)
        .default_width(340.0)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                status_badge(ui, editor.status);
                ui.weak(format!(
                    "X: {:.0}, Y: {:.0}",
                    original.coordenadas.x, original.coordenadas.y
                ));
            });
            ui.separator();

            egui::Grid::new("lot_editor_fields")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Quadra");
                    ui.text_edit_singleline(&mut editor.quadra);
                    ui.end_row();

                    ui.label("Lote");
                    ui.text_edit_singleline(&mut editor.lote);
                    ui.end_row();

                    ui.label("Tamanho (m²)");
                    ui.text_edit_singleline(&mut editor.tamanho);
                    ui.end_row();

                    ui.label("Valor Total");
                    ui.text_edit_singleline(&mut editor.valor_total);
                    ui.end_row();

                    ui.label("Entrada");
                    ui.text_edit_singleline(&mut editor.entrada);
                    ui.end_row();

                    ui.label("Parcela Mensal");
                    ui.text_edit_singleline(&mut editor.parcela);
                    ui.end_row();

                    ui.label("Status");
                    egui::ComboBox::from_id_salt("lot_editor_status")
                        .selected_text(editor.status.label())
                        .show_ui(ui, |ui| {
                            for status in LotStatus::all() {
                                ui.selectable_value(&mut editor.status, status, status.label());
                            }
                        });
                    ui.end_row();

                    if editor.status != LotStatus::Disponivel {
                        ui.label("Comprador");
                        ui.add(
                            egui::TextEdit::singleline(&mut editor.comprador)
                                .hint_text("Nome do comprador"),
                        );
                        ui.end_row();
                    }
                });

            if let Ok(valor) = parse_non_negative(&editor.valor_total, "Valor Total") {
                ui.weak(format_brl(valor));
            }

            if let Some(err) = &editor.error {
                ui.colored_label(egui::Color32::from_rgb(220, 70, 60), err);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancelar").clicked() {
                    cancelled = true;
                }
                if ui.button("Salvar Alterações").clicked() {
                    saved = true;
                }
            });
        });

    if saved {
        match editor.build_lot(&original) {
            Ok(lot) => {
                registry.update(lot);
                status_msg.set(format!("Lote {id} atualizado"), false);
                editor.close();
            }
            Err(err) => editor.error = Some(err),
        }
    } else if cancelled || !open {
        editor.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory::seed;

    fn editor_for(lot: &Lot) -> LotEditor {
        let mut editor = LotEditor::default();
        editor.open(lot);
        editor
    }

    #[test]
    fn test_open_and_close() {
        let lots = seed::initial_lots();
        let mut editor = editor_for(&lots[0]);
        assert!(editor.is_open());
        editor.close();
        assert!(!editor.is_open());
    }

    #[test]
    fn test_parse_accepts_comma_decimals() {
        assert_eq!(parse_non_negative("850,5", "Parcela").unwrap(), 850.5);
        assert_eq!(parse_non_negative(" 240 ", "Tamanho").unwrap(), 240.0);
    }

    #[test]
    fn test_parse_rejects_garbage_and_negatives() {
        assert!(parse_non_negative("abc", "Valor Total").is_err());
        assert!(parse_non_negative("", "Valor Total").is_err());
        assert!(parse_non_negative("-1", "Valor Total").is_err());
        assert!(parse_non_negative("NaN", "Valor Total").is_err());
        assert!(parse_non_negative("inf", "Valor Total").is_err());
    }

    #[test]
    fn test_build_lot_round_trips_unchanged_buffers() {
        let lots = seed::initial_lots();
        let editor = editor_for(&lots[1]);
        let rebuilt = editor.build_lot(&lots[1]).unwrap();
        assert_eq!(rebuilt, lots[1]);
    }

    #[test]
    fn test_build_lot_drops_buyer_when_available() {
        let lots = seed::initial_lots();
        let mut editor = editor_for(&lots[1]);
        assert_eq!(editor.status, LotStatus::Reservado);
        editor.status = LotStatus::Disponivel;

        let rebuilt = editor.build_lot(&lots[1]).unwrap();
        assert_eq!(rebuilt.status, LotStatus::Disponivel);
        assert_eq!(rebuilt.comprador, None);
    }

    #[test]
    fn test_build_lot_preserves_id_and_coordinates() {
        let lots = seed::initial_lots();
        let mut editor = editor_for(&lots[0]);
        editor.quadra = "Q7".to_string();
        editor.valor_total = "48000".to_string();

        let rebuilt = editor.build_lot(&lots[0]).unwrap();
        assert_eq!(rebuilt.id, lots[0].id);
        assert_eq!(rebuilt.coordenadas, lots[0].coordenadas);
        assert_eq!(rebuilt.quadra, "Q7");
        assert_eq!(rebuilt.valor_total, 48000.0);
    }

    #[test]
    fn test_build_lot_rejects_bad_numbers() {
        let lots = seed::initial_lots();
        let mut editor = editor_for(&lots[0]);
        editor.tamanho = "muito grande".to_string();
        assert!(editor.build_lot(&lots[0]).is_err());
    }

    #[test]
    fn test_empty_buyer_name_becomes_none() {
        let lots = seed::initial_lots();
        let mut editor = editor_for(&lots[1]);
        editor.comprador = "   ".to_string();
        let rebuilt = editor.build_lot(&lots[1]).unwrap();
        assert_eq!(rebuilt.comprador, None);
    }
}
