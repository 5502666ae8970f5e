use bevy::prelude::*;

pub mod filters;
pub mod lot;
pub mod registry;
pub mod seed;
pub mod stats;

use filters::{update_filtered_lots, FilterState, FilteredLots};
use registry::LotRegistry;
use stats::{update_statistics, LotStatistics};

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LotRegistry::seeded())
            .init_resource::<LotStatistics>()
            .init_resource::<FilterState>()
            .init_resource::<FilteredLots>()
            .add_systems(Update, (update_statistics, update_filtered_lots));
    }
}
