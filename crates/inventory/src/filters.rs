use bevy::prelude::*;

use crate::lot::{Lot, LotStatus};
use crate::registry::LotRegistry;

/// Status facet of the table and map filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Todos,
    Disponivel,
    Reservado,
    Vendido,
}

impl StatusFilter {
    pub fn all() -> [StatusFilter; 4] {
        [
            StatusFilter::Todos,
            StatusFilter::Disponivel,
            StatusFilter::Reservado,
            StatusFilter::Vendido,
        ]
    }

    /// The status this facet narrows to, if any.
    pub fn status(self) -> Option<LotStatus> {
        match self {
            StatusFilter::Todos => None,
            StatusFilter::Disponivel => Some(LotStatus::Disponivel),
            StatusFilter::Reservado => Some(LotStatus::Reservado),
            StatusFilter::Vendido => Some(LotStatus::Vendido),
        }
    }

    pub fn matches(self, status: LotStatus) -> bool {
        match self.status() {
            None => true,
            Some(wanted) => status == wanted,
        }
    }

    /// Filter button label.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::Todos => "Todos",
            StatusFilter::Disponivel => "Disponíveis",
            StatusFilter::Reservado => "Reservados",
            StatusFilter::Vendido => "Vendidos",
        }
    }
}

/// Process-wide filter state; resets on restart.
#[derive(Resource, Debug, Clone, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    pub search: String,
}

/// Derived subsequence of the registry that passes both filter facets.
/// Holds clones; the list is tens of entries and a full rebuild is cheaper
/// than tracking indices through in-place edits.
#[derive(Resource, Debug, Clone, Default)]
pub struct FilteredLots(pub Vec<Lot>);

/// True when the lot passes the status facet AND the search term. The term
/// matches case-insensitively against id, quadra, lote, and the buyer name
/// when present.
pub fn lot_matches(lot: &Lot, filter: StatusFilter, term: &str) -> bool {
    if !filter.matches(lot.status) {
        return false;
    }
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    lot.id.to_lowercase().contains(&term)
        || lot.quadra.to_lowercase().contains(&term)
        || lot.lote.to_lowercase().contains(&term)
        || lot
            .comprador
            .as_ref()
            .is_some_and(|c| c.to_lowercase().contains(&term))
}

/// Stable filter: source order is preserved, nothing is sorted.
pub fn filter_lots(lots: &[Lot], filter: StatusFilter, term: &str) -> Vec<Lot> {
    lots.iter()
        .filter(|lot| lot_matches(lot, filter, term))
        .cloned()
        .collect()
}

/// Recompute the filtered view whenever the registry or the filters changed.
pub fn update_filtered_lots(
    registry: Res<LotRegistry>,
    filter: Res<FilterState>,
    mut filtered: ResMut<FilteredLots>,
) {
    if !registry.is_changed() && !filter.is_changed() {
        return;
    }
    filtered.0 = filter_lots(registry.all(), filter.status, &filter.search);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_todos_with_empty_term_passes_everything() {
        let lots = seed::initial_lots();
        assert_eq!(filter_lots(&lots, StatusFilter::Todos, "").len(), lots.len());
    }

    #[test]
    fn test_status_facet_narrows() {
        let lots = seed::initial_lots();
        let reserved = filter_lots(&lots, StatusFilter::Reservado, "");
        assert_eq!(reserved.len(), 2);
        assert!(reserved.iter().all(|l| l.status == LotStatus::Reservado));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lots = seed::initial_lots();
        let by_id = filter_lots(&lots, StatusFilter::Todos, "q1-l01");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "Q1-L01");

        let by_buyer = filter_lots(&lots, StatusFilter::Todos, "joão");
        assert_eq!(by_buyer.len(), 1);
        assert_eq!(by_buyer[0].comprador.as_deref(), Some("João Silva"));
    }

    #[test]
    fn test_search_matches_quadra_and_lote() {
        let lots = seed::initial_lots();
        assert_eq!(filter_lots(&lots, StatusFilter::Todos, "q2").len(), 5);
        // "L01" appears in both quadras.
        assert_eq!(filter_lots(&lots, StatusFilter::Todos, "l01").len(), 2);
    }

    #[test]
    fn test_missing_buyer_never_matches() {
        let lots = seed::initial_lots();
        let hits = filter_lots(&lots, StatusFilter::Todos, "silva");
        assert!(hits.iter().all(|l| l.comprador.is_some()));
    }

    #[test]
    fn test_search_narrows_never_widens() {
        let lots = seed::initial_lots();
        let reserved = filter_lots(&lots, StatusFilter::Reservado, "");
        let narrowed = filter_lots(&lots, StatusFilter::Reservado, "ana");
        assert!(narrowed.len() <= reserved.len());
        assert!(narrowed.iter().all(|l| reserved.contains(l)));
    }

    #[test]
    fn test_order_is_preserved() {
        let lots = seed::initial_lots();
        let filtered = filter_lots(&lots, StatusFilter::Disponivel, "");
        let expected: Vec<&str> = lots
            .iter()
            .filter(|l| l.status == LotStatus::Disponivel)
            .map(|l| l.id.as_str())
            .collect();
        let got: Vec<&str> = filtered.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_whitespace_only_term_is_ignored() {
        let lots = seed::initial_lots();
        assert_eq!(filter_lots(&lots, StatusFilter::Todos, "   ").len(), lots.len());
    }
}
