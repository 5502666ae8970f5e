use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Which of the three main views fills the central panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Dashboard,
    Mapa,
    Tabela,
}

impl ActiveTab {
    pub fn all() -> [ActiveTab; 3] {
        [ActiveTab::Dashboard, ActiveTab::Mapa, ActiveTab::Tabela]
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Dashboard => "Dashboard",
            ActiveTab::Mapa => "Mapa Interativo",
            ActiveTab::Tabela => "Tabela de Lotes",
        }
    }
}

/// Top navigation bar with the three view tabs.
pub fn navigation_ui(mut contexts: EguiContexts, mut tab: ResMut<ActiveTab>) {
    egui::TopBottomPanel::top("navigation").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.heading("LoteMap");
            ui.separator();
            for candidate in ActiveTab::all() {
                if ui
                    .selectable_label(*tab == candidate, candidate.label())
                    .clicked()
                {
                    *tab = candidate;
                }
            }
        });
    });
}

/// Number keys 1-3 switch tabs when no text field has focus.
pub fn tab_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut tab: ResMut<ActiveTab>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Digit1) {
        *tab = ActiveTab::Dashboard;
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        *tab = ActiveTab::Mapa;
    }
    if keyboard.just_pressed(KeyCode::Digit3) {
        *tab = ActiveTab::Tabela;
    }
}
