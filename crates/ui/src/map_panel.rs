//! Interactive map: pannable/zoomable canvas with one draggable pin per lot.
//!
//! Pointer input is routed through the [`MapGesture`] state machine so a
//! single press resolves to exactly one of: canvas pan, pin drag, pin click.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use inventory::filters::{FilterState, StatusFilter};
use inventory::lot::{Lot, LotStatus};
use inventory::registry::LotRegistry;
use mapview::gesture::{pin_hit, MapGesture, ReleaseOutcome, PIN_RADIUS};
use mapview::view::MapView;

use crate::lot_editor::LotEditor;
use crate::navigation::ActiveTab;
use crate::widgets::{legend_dot, status_color};

/// Spacing of the plat grid lines, in logical map units.
const GRID_SPACING: f32 = 50.0;

pub fn map_panel_ui(
    mut contexts: EguiContexts,
    tab: Res<ActiveTab>,
    mut registry: ResMut<LotRegistry>,
    mut filter: ResMut<FilterState>,
    mut view: ResMut<MapView>,
    mut gesture: ResMut<MapGesture>,
    mut editor: ResMut<LotEditor>,
) {
    if *tab != ActiveTab::Mapa {
        return;
    }
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        header_controls(ui, &mut view);
        filter_row(ui, &registry, &mut filter);
        ui.horizontal(|ui| {
            ui.label("Legenda:");
            for status in LotStatus::all() {
                legend_dot(ui, status_color(status), status.label());
            }
        });
        ui.add_space(4.0);
        let status_filter = filter.status;
        canvas(
            ui,
            &mut registry,
            status_filter,
            &mut view,
            &mut gesture,
            &mut editor,
        );
    });
}

fn header_controls(ui: &mut egui::Ui, view: &mut MapView) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Mapa Interativo");
            ui.label("Clique nos pontos para editar ou arraste para reposicionar");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟲").on_hover_text("Redefinir visão").clicked() {
                view.reset();
            }
            if ui.button("−").on_hover_text("Reduzir zoom").clicked() {
                view.zoom_out();
            }
            if ui.button("+").on_hover_text("Ampliar zoom").clicked() {
                view.zoom_in();
            }
            ui.label(format!("{:.0}%", view.zoom * 100.0));
        });
    });
}

/// Status filter buttons with live counts. Only the status facet applies on
/// the map; the search term never filters pins.
fn filter_row(ui: &mut egui::Ui, registry: &LotRegistry, filter: &mut ResMut<FilterState>) {
    ui.horizontal(|ui| {
        ui.label("Filtro:");
        for facet in StatusFilter::all() {
            let count = match facet.status() {
                None => registry.len(),
                Some(status) => registry.all().iter().filter(|l| l.status == status).count(),
            };
            let label = format!("{} ({})", facet.label(), count);
            if ui.selectable_label(filter.status == facet, label).clicked() {
                filter.status = facet;
            }
        }
    });
}

fn canvas(
    ui: &mut egui::Ui,
    registry: &mut ResMut<LotRegistry>,
    status_filter: StatusFilter,
    view: &mut MapView,
    gesture: &mut MapGesture,
    editor: &mut LotEditor,
) {
    let size = egui::vec2(
        ui.available_width(),
        ui.available_height().max(200.0),
    );
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    let origin = to_vec(rect.min);

    // Pins shown under the current status facet, in registry order.
    let visible: Vec<Lot> = registry
        .all()
        .iter()
        .filter(|lot| status_filter.matches(lot.status))
        .cloned()
        .collect();

    let pointer = ui.input(|i| i.pointer.latest_pos());
    let pressed = ui.input(|i| i.pointer.primary_pressed());
    let released = ui.input(|i| i.pointer.primary_released());

    if let Some(pos) = pointer {
        let p = to_vec(pos);
        if pressed && response.contains_pointer() {
            match pin_hit(visible.iter(), view, origin, p) {
                Some(lot) => gesture.press_pin(lot.id.clone(), p),
                None => gesture.press_canvas(p, view),
            }
        }
        gesture.pointer_moved(p, view);
        if released {
            match gesture.release(p, origin, view) {
                Some(ReleaseOutcome::OpenEditor(id)) => {
                    if let Some(lot) = registry.get(&id) {
                        editor.open(lot);
                    }
                }
                Some(ReleaseOutcome::Reposition { id, logical }) => {
                    registry.update_coordinates(&id, logical.into());
                }
                None => {}
            }
        }
        if !rect.contains(pos) {
            gesture.pointer_left();
        }
    } else {
        gesture.pointer_left();
    }

    draw_background(&painter, rect, view);

    let hovered = pointer
        .filter(|pos| rect.contains(*pos))
        .and_then(|pos| pin_hit(visible.iter(), view, origin, to_vec(pos)))
        .map(|lot| lot.id.clone());

    for lot in &visible {
        let center = view.map_to_screen(lot.coordenadas.into(), origin);
        let active = gesture.active_pin() == Some(lot.id.as_str());
        let radius = if active { PIN_RADIUS * 1.25 } else { PIN_RADIUS };

        painter.circle_filled(to_pos(center), radius, status_color(lot.status));
        painter.circle_stroke(
            to_pos(center),
            radius,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        );

        if active || hovered.as_deref() == Some(lot.id.as_str()) {
            painter.text(
                to_pos(center - Vec2::new(0.0, radius + 4.0)),
                egui::Align2::CENTER_BOTTOM,
                &lot.id,
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }
    }
}

fn draw_background(painter: &egui::Painter, rect: egui::Rect, view: &MapView) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(31, 41, 35));

    let stroke = egui::Stroke::new(0.5, egui::Color32::from_rgb(45, 58, 49));
    let spacing = GRID_SPACING * view.zoom;

    let mut x = rect.min.x + view.pan.x.rem_euclid(spacing);
    while x < rect.max.x {
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            stroke,
        );
        x += spacing;
    }
    let mut y = rect.min.y + view.pan.y.rem_euclid(spacing);
    while y < rect.max.y {
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            stroke,
        );
        y += spacing;
    }
}

fn to_vec(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}
