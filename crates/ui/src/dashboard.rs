//! Dashboard view: stat cards, status distribution, and financial totals.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use inventory::lot::LotStatus;
use inventory::stats::LotStatistics;

use crate::navigation::ActiveTab;
use crate::widgets::{format_brl, legend_dot, status_color, value_bar};

pub fn dashboard_ui(mut contexts: EguiContexts, tab: Res<ActiveTab>, stats: Res<LotStatistics>) {
    if *tab != ActiveTab::Dashboard {
        return;
    }
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.heading("Dashboard");
        ui.label("Visão geral do loteamento");
        ui.add_space(12.0);

        stat_cards(ui, &stats);
        ui.add_space(16.0);

        ui.columns(2, |cols| {
            distribution_section(&mut cols[0], &stats);
            financial_section(&mut cols[1], &stats);
        });
    });
}

fn stat_cards(ui: &mut egui::Ui, stats: &LotStatistics) {
    ui.horizontal_wrapped(|ui| {
        stat_card(
            ui,
            "Total de Lotes",
            stats.total.to_string(),
            egui::Color32::WHITE,
            None,
        );
        stat_card(
            ui,
            "Disponíveis",
            stats.disponiveis.to_string(),
            status_color(LotStatus::Disponivel),
            None,
        );
        stat_card(
            ui,
            "Reservados",
            stats.reservados.to_string(),
            status_color(LotStatus::Reservado),
            None,
        );
        stat_card(
            ui,
            "Vendidos",
            stats.vendidos.to_string(),
            status_color(LotStatus::Vendido),
            Some(format!("{}% do total", stats.percentual_vendido)),
        );
        stat_card(
            ui,
            "Faturamento",
            format_brl(stats.valor_total_vendido),
            egui::Color32::from_rgb(100, 160, 220),
            Some("Vendido".to_string()),
        );
    });
}

fn stat_card(
    ui: &mut egui::Ui,
    title: &str,
    value: String,
    color: egui::Color32,
    footnote: Option<String>,
) {
    ui.group(|ui| {
        ui.set_min_width(140.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).small());
            ui.label(egui::RichText::new(value).heading().color(color));
            if let Some(note) = footnote {
                ui.label(egui::RichText::new(note).small().weak());
            }
        });
    });
}

fn distribution_section(ui: &mut egui::Ui, stats: &LotStatistics) {
    ui.group(|ui| {
        ui.heading("Distribuição de Lotes");
        ui.label("Status atual dos lotes");
        ui.add_space(8.0);

        stacked_status_bar(ui, stats);
        ui.add_space(8.0);

        for (count, status) in [
            (stats.disponiveis, LotStatus::Disponivel),
            (stats.reservados, LotStatus::Reservado),
            (stats.vendidos, LotStatus::Vendido),
        ] {
            ui.horizontal(|ui| {
                legend_dot(
                    ui,
                    status_color(status),
                    &format!("{}: {}", status.label(), count),
                );
            });
        }
    });
}

/// One bar, three segments, proportional to the status counts.
fn stacked_status_bar(ui: &mut egui::Ui, stats: &LotStatistics) {
    let width = ui.available_width().min(320.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 20.0), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 3.0, egui::Color32::from_gray(40));

    if stats.total == 0 {
        return;
    }
    let total = stats.total as f32;
    let mut x = rect.min.x;
    for (count, status) in [
        (stats.disponiveis, LotStatus::Disponivel),
        (stats.reservados, LotStatus::Reservado),
        (stats.vendidos, LotStatus::Vendido),
    ] {
        let w = rect.width() * count as f32 / total;
        let segment =
            egui::Rect::from_min_size(egui::pos2(x, rect.min.y), egui::vec2(w, rect.height()));
        painter.rect_filled(segment, 0.0, status_color(status));
        x += w;
    }
}

fn financial_section(ui: &mut egui::Ui, stats: &LotStatistics) {
    ui.group(|ui| {
        ui.heading("Valores Financeiros");
        ui.label("Vendido vs. A Receber");
        ui.add_space(8.0);

        let max = stats.valor_total_vendido.max(stats.valor_a_receber).max(1.0);
        value_bar(
            ui,
            "Vendido",
            (stats.valor_total_vendido / max) as f32,
            &format_brl(stats.valor_total_vendido),
            status_color(LotStatus::Vendido),
        );
        value_bar(
            ui,
            "A Receber",
            (stats.valor_a_receber / max) as f32,
            &format_brl(stats.valor_a_receber),
            status_color(LotStatus::Reservado),
        );
    });
}
