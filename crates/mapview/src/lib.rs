use bevy::prelude::*;

pub mod gesture;
pub mod status;
pub mod view;

pub struct MapViewPlugin;

impl Plugin for MapViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<view::MapView>()
            .init_resource::<gesture::MapGesture>()
            .init_resource::<status::StatusMessage>()
            .add_systems(Startup, view::setup_camera)
            .add_systems(Update, status::tick_status_message);
    }
}
