use bevy::prelude::*;

use crate::lot::{Coordenadas, Lot};
use crate::seed;

/// Owns the lot list. Every other component reads through [`all`]/[`get`]
/// and mutates through [`update`]/[`update_coordinates`] in direct response
/// to a user event; there is no other writer.
///
/// [`all`]: LotRegistry::all
/// [`get`]: LotRegistry::get
/// [`update`]: LotRegistry::update
/// [`update_coordinates`]: LotRegistry::update_coordinates
#[derive(Resource, Debug, Clone, Default)]
pub struct LotRegistry {
    lots: Vec<Lot>,
}

impl LotRegistry {
    pub fn seeded() -> Self {
        Self {
            lots: seed::initial_lots(),
        }
    }

    pub fn from_lots(lots: Vec<Lot>) -> Self {
        Self { lots }
    }

    /// Read-only view in stable source order.
    pub fn all(&self) -> &[Lot] {
        &self.lots
    }

    pub fn get(&self, id: &str) -> Option<&Lot> {
        self.lots.iter().find(|lot| lot.id == id)
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Replace the entry whose id matches `updated.id`, leaving the rest
    /// untouched. Unknown ids are a silent no-op.
    pub fn update(&mut self, updated: Lot) {
        if let Some(slot) = self.lots.iter_mut().find(|lot| lot.id == updated.id) {
            *slot = updated;
        }
    }

    /// Replace only the coordinates of the matching entry. Unknown ids are
    /// a silent no-op.
    pub fn update_coordinates(&mut self, id: &str, coordenadas: Coordenadas) {
        if let Some(lot) = self.lots.iter_mut().find(|lot| lot.id == id) {
            lot.coordenadas = coordenadas;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::LotStatus;

    #[test]
    fn test_update_replaces_matching_entry_only() {
        let mut registry = LotRegistry::seeded();
        let mut edited = registry.get("Q1-L01").unwrap().clone();
        edited.status = LotStatus::Reservado;
        edited.comprador = Some("Lucas Rocha".to_string());

        let before: Vec<Lot> = registry.all().to_vec();
        registry.update(edited.clone());

        assert_eq!(registry.get("Q1-L01"), Some(&edited));
        for (old, new) in before.iter().zip(registry.all()) {
            if old.id != "Q1-L01" {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut registry = LotRegistry::seeded();
        let before: Vec<Lot> = registry.all().to_vec();

        let mut ghost = before[0].clone();
        ghost.id = "Q9-L99".to_string();
        registry.update(ghost);

        assert_eq!(registry.all(), before.as_slice());
    }

    #[test]
    fn test_update_coordinates_touches_nothing_else() {
        let mut registry = LotRegistry::seeded();
        let before: Vec<Lot> = registry.all().to_vec();

        registry.update_coordinates("Q1-L01", Coordenadas::new(200.0, 140.0));

        for (old, new) in before.iter().zip(registry.all()) {
            if old.id == "Q1-L01" {
                assert_eq!(new.coordenadas, Coordenadas::new(200.0, 140.0));
                let mut expected = old.clone();
                expected.coordenadas = new.coordenadas;
                assert_eq!(new, &expected);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_update_coordinates_unknown_id_is_noop() {
        let mut registry = LotRegistry::seeded();
        let before: Vec<Lot> = registry.all().to_vec();
        registry.update_coordinates("Q9-L99", Coordenadas::new(1.0, 2.0));
        assert_eq!(registry.all(), before.as_slice());
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(LotRegistry::seeded().get("nope").is_none());
    }
}
