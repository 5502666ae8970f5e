use std::path::{Path, PathBuf};

use bevy::prelude::*;

pub mod csv;
pub mod filename;

use inventory::registry::LotRegistry;
use mapview::status::StatusMessage;

/// Fired by the UI when the user asks for a CSV export.
#[derive(Event, Default)]
pub struct ExportRequested;

/// Directory export files land in, relative to the working directory.
const EXPORT_DIR: &str = "exports";

pub struct ExportPlugin;

impl Plugin for ExportPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExportRequested>()
            .add_systems(Update, handle_export_requests);
    }
}

/// The export always serializes the full registry, not the filtered view.
fn handle_export_requests(
    mut requests: EventReader<ExportRequested>,
    registry: Res<LotRegistry>,
    mut status: ResMut<StatusMessage>,
) {
    for _ in requests.read() {
        match write_export(&registry) {
            Ok(path) => {
                info!("exported {} lots to {}", registry.len(), path.display());
                status.set(format!("Exportado: {}", path.display()), false);
            }
            Err(err) => {
                warn!("CSV export failed: {err}");
                status.set(format!("Falha ao exportar: {err}"), true);
            }
        }
    }
}

fn write_export(registry: &LotRegistry) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(EXPORT_DIR)?;
    let epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let path = Path::new(EXPORT_DIR).join(filename::export_filename(epoch));
    std::fs::write(&path, csv::lots_to_csv(registry.all()))?;
    Ok(path)
}
