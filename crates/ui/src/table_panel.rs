//! Table view: search, status filters, CSV export, and the lot grid.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use export::ExportRequested;
use inventory::filters::{FilterState, FilteredLots, StatusFilter};
use inventory::registry::LotRegistry;
use mapview::status::StatusMessage;

use crate::lot_editor::LotEditor;
use crate::navigation::ActiveTab;
use crate::widgets::{format_brl, status_badge};

#[allow(clippy::too_many_arguments)]
pub fn table_panel_ui(
    mut contexts: EguiContexts,
    tab: Res<ActiveTab>,
    registry: Res<LotRegistry>,
    filtered: Res<FilteredLots>,
    mut filter: ResMut<FilterState>,
    mut editor: ResMut<LotEditor>,
    mut export_requests: EventWriter<ExportRequested>,
    mut status: ResMut<StatusMessage>,
) {
    if *tab != ActiveTab::Tabela {
        return;
    }
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.heading("Tabela de Lotes");
        ui.label("Gerencie todos os lotes em formato de tabela");
        ui.add_space(8.0);

        controls_row(ui, &mut filter, &mut export_requests, &mut status);
        ui.add_space(8.0);

        lots_grid(ui, &filtered, &registry, &mut editor);
    });
}

fn controls_row(
    ui: &mut egui::Ui,
    filter: &mut ResMut<FilterState>,
    export_requests: &mut EventWriter<ExportRequested>,
    status: &mut ResMut<StatusMessage>,
) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut filter.search)
                .hint_text("Buscar por ID, quadra, lote ou comprador...")
                .desired_width(280.0),
        );
        for facet in StatusFilter::all() {
            if ui
                .selectable_label(filter.status == facet, facet.label())
                .clicked()
            {
                filter.status = facet;
            }
        }
        ui.separator();
        if ui.button("Exportar CSV").clicked() {
            export_requests.send(ExportRequested);
        }
        if ui
            .button("Importar")
            .on_hover_text("Importação de planilha")
            .clicked()
        {
            status.set("Importação ainda não implementada", true);
        }
    });
}

fn lots_grid(
    ui: &mut egui::Ui,
    filtered: &FilteredLots,
    registry: &LotRegistry,
    editor: &mut LotEditor,
) {
    if filtered.0.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label("Nenhum lote encontrado com os filtros aplicados.");
        });
        return;
    }

    egui::ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("lots_table")
            .striped(true)
            .num_columns(10)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                for header in [
                    "ID",
                    "Quadra",
                    "Lote",
                    "Tamanho (m²)",
                    "Valor Total",
                    "Entrada",
                    "Parcela",
                    "Status",
                    "Comprador",
                    "",
                ] {
                    ui.strong(header);
                }
                ui.end_row();

                for lot in &filtered.0 {
                    ui.strong(&lot.id);
                    ui.label(&lot.quadra);
                    ui.label(&lot.lote);
                    ui.label(format!("{}m²", lot.tamanho));
                    ui.label(format_brl(lot.valor_total));
                    ui.label(format_brl(lot.entrada));
                    ui.label(format_brl(lot.parcela));
                    status_badge(ui, lot.status);
                    ui.label(lot.comprador.as_deref().unwrap_or("-"));
                    if ui.button("Editar").clicked() {
                        // Re-read from the registry so stale filtered clones
                        // can never seed the editor.
                        if let Some(current) = registry.get(&lot.id) {
                            editor.open(current);
                        }
                    }
                    ui.end_row();
                }
            });
    });
}
