//! Shared widgets and formatting helpers.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use inventory::lot::LotStatus;
use mapview::status::StatusMessage;

/// Status colors shared by map pins, badges, and the dashboard bars.
pub fn status_color(status: LotStatus) -> egui::Color32 {
    match status {
        LotStatus::Disponivel => egui::Color32::from_rgb(60, 180, 90),
        LotStatus::Reservado => egui::Color32::from_rgb(230, 170, 40),
        LotStatus::Vendido => egui::Color32::from_rgb(220, 70, 60),
    }
}

/// Small colored status badge.
pub fn status_badge(ui: &mut egui::Ui, status: LotStatus) {
    ui.label(
        egui::RichText::new(status.label())
            .color(egui::Color32::BLACK)
            .background_color(status_color(status)),
    );
}

/// pt-BR currency formatting: `R$ 45.000,00`.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut digits = whole.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped.insert_str(0, &format!(".{}", &digits[split..]));
        digits.truncate(split);
    }
    grouped.insert_str(0, &digits);

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Horizontal proportion bar with a trailing value label.
pub fn value_bar(ui: &mut egui::Ui, label: &str, fraction: f32, text: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(format!("{label:>10}"));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(200.0, 16.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 2.0, egui::Color32::from_gray(40));
        let fill_rect = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * fraction.clamp(0.0, 1.0), rect.height()),
        );
        painter.rect_filled(fill_rect, 2.0, color);
        ui.label(text);
    });
}

/// Colored dot followed by a label, used in legends.
pub fn legend_dot(ui: &mut egui::Ui, color: egui::Color32, label: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter_at(rect).circle_filled(rect.center(), 5.0, color);
    ui.label(label);
}

/// Render the transient status toast while its timer runs.
pub fn status_toast_ui(mut contexts: EguiContexts, status: Res<StatusMessage>) {
    if !status.active() {
        return;
    }
    let color = if status.is_error {
        egui::Color32::from_rgb(220, 70, 60)
    } else {
        egui::Color32::from_rgb(120, 200, 120)
    };
    egui::Area::new(egui::Id::new("status_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.colored_label(color, &status.text);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_round_values() {
        assert_eq!(format_brl(45000.0), "R$ 45.000,00");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(850.0), "R$ 850,00");
    }

    #[test]
    fn test_format_brl_grouping_and_cents() {
        assert_eq!(format_brl(1234567.5), "R$ 1.234.567,50");
        assert_eq!(format_brl(999.99), "R$ 999,99");
        assert_eq!(format_brl(1000.0), "R$ 1.000,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(-45000.0), "-R$ 45.000,00");
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let colors: Vec<_> = LotStatus::all().iter().map(|s| status_color(*s)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
