use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Sales status of a lot. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LotStatus {
    #[default]
    Disponivel,
    Reservado,
    Vendido,
}

impl LotStatus {
    pub fn all() -> [LotStatus; 3] {
        [
            LotStatus::Disponivel,
            LotStatus::Reservado,
            LotStatus::Vendido,
        ]
    }

    /// Stable machine key, also the CSV status column value.
    pub fn as_key(self) -> &'static str {
        match self {
            LotStatus::Disponivel => "disponivel",
            LotStatus::Reservado => "reservado",
            LotStatus::Vendido => "vendido",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            LotStatus::Disponivel => "Disponível",
            LotStatus::Reservado => "Reservado",
            LotStatus::Vendido => "Vendido",
        }
    }
}

/// Logical pin position on the map canvas, independent of zoom/pan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordenadas {
    pub x: f32,
    pub y: f32,
}

impl Coordenadas {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Coordenadas> for Vec2 {
    fn from(c: Coordenadas) -> Vec2 {
        Vec2::new(c.x, c.y)
    }
}

impl From<Vec2> for Coordenadas {
    fn from(v: Vec2) -> Coordenadas {
        Coordenadas { x: v.x, y: v.y }
    }
}

/// One parcel of land in the subdivision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// Unique, stable identifier (e.g. "Q1-L01"). Never reassigned.
    pub id: String,
    pub quadra: String,
    pub lote: String,
    /// Area in square meters.
    pub tamanho: f32,
    pub valor_total: f64,
    pub entrada: f64,
    pub parcela: f64,
    pub status: LotStatus,
    /// Buyer name; meaningful only while the lot is reserved or sold.
    pub comprador: Option<String>,
    pub coordenadas: Coordenadas,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_keys_are_stable() {
        assert_eq!(LotStatus::Disponivel.as_key(), "disponivel");
        assert_eq!(LotStatus::Reservado.as_key(), "reservado");
        assert_eq!(LotStatus::Vendido.as_key(), "vendido");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(LotStatus::Disponivel.label(), "Disponível");
        assert_eq!(LotStatus::Reservado.label(), "Reservado");
        assert_eq!(LotStatus::Vendido.label(), "Vendido");
    }

    #[test]
    fn test_coordenadas_vec2_round_trip() {
        let coords = Coordenadas::new(150.0, 120.0);
        let vec: Vec2 = coords.into();
        assert_eq!(Coordenadas::from(vec), coords);
    }

    #[test]
    fn test_lot_serde_round_trip() {
        let lot = Lot {
            id: "Q1-L02".to_string(),
            quadra: "Q1".to_string(),
            lote: "L02".to_string(),
            tamanho: 240.0,
            valor_total: 45000.0,
            entrada: 4500.0,
            parcela: 850.0,
            status: LotStatus::Reservado,
            comprador: Some("João Silva".to_string()),
            coordenadas: Coordenadas::new(180.0, 120.0),
        };
        let json = serde_json::to_string(&lot).unwrap();
        let back: Lot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lot);
    }
}
