use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod dashboard;
pub mod lot_editor;
pub mod map_panel;
pub mod navigation;
pub mod table_panel;
pub mod theme;
pub mod widgets;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<navigation::ActiveTab>()
            .init_resource::<lot_editor::LotEditor>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (
                    navigation::tab_keybinds,
                    navigation::navigation_ui,
                    dashboard::dashboard_ui,
                    map_panel::map_panel_ui,
                    table_panel::table_panel_ui,
                    lot_editor::lot_editor_ui,
                    widgets::status_toast_ui,
                )
                    .chain(),
            );
    }
}
