use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lot::{Lot, LotStatus};
use crate::registry::LotRegistry;

/// Aggregate view of the lot list. Derived, never hand-mutated: the
/// recompute system rebuilds it from scratch whenever the registry changes.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotStatistics {
    pub total: u32,
    pub disponiveis: u32,
    pub reservados: u32,
    pub vendidos: u32,
    /// Whole-percent share of sold lots; 0 for an empty list.
    pub percentual_vendido: u32,
    /// Sum of `valor_total` over sold lots.
    pub valor_total_vendido: f64,
    /// Sum of `valor_total` over reserved lots.
    pub valor_a_receber: f64,
}

/// Single pass over the full (unfiltered) list.
pub fn compute_statistics(lots: &[Lot]) -> LotStatistics {
    let mut stats = LotStatistics::default();
    for lot in lots {
        stats.total += 1;
        match lot.status {
            LotStatus::Disponivel => stats.disponiveis += 1,
            LotStatus::Reservado => {
                stats.reservados += 1;
                stats.valor_a_receber += lot.valor_total;
            }
            LotStatus::Vendido => {
                stats.vendidos += 1;
                stats.valor_total_vendido += lot.valor_total;
            }
        }
    }
    if stats.total > 0 {
        stats.percentual_vendido =
            (stats.vendidos as f64 / stats.total as f64 * 100.0).round() as u32;
    }
    stats
}

/// Recompute statistics whenever the registry changed.
pub fn update_statistics(registry: Res<LotRegistry>, mut stats: ResMut<LotStatistics>) {
    if !registry.is_changed() {
        return;
    }
    *stats = compute_statistics(registry.all());
}
