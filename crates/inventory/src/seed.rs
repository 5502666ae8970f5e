//! Fixed startup dataset. The registry is seeded once from this list; the
//! UI never creates or deletes entries, only edits them in place.

use crate::lot::{Coordenadas, Lot, LotStatus};

#[allow(clippy::too_many_arguments)]
fn lot(
    quadra: &str,
    lote: &str,
    tamanho: f32,
    valor_total: f64,
    entrada: f64,
    parcela: f64,
    status: LotStatus,
    comprador: Option<&str>,
    x: f32,
    y: f32,
) -> Lot {
    Lot {
        id: format!("{quadra}-{lote}"),
        quadra: quadra.to_string(),
        lote: lote.to_string(),
        tamanho,
        valor_total,
        entrada,
        parcela,
        status,
        comprador: comprador.map(str::to_string),
        coordenadas: Coordenadas::new(x, y),
    }
}

/// The ten lots of the pilot subdivision: two quadras of five lots each.
pub fn initial_lots() -> Vec<Lot> {
    use LotStatus::{Disponivel, Reservado, Vendido};

    vec![
        lot("Q1", "L01", 240.0, 45000.0, 4500.0, 850.0, Disponivel, None, 150.0, 120.0),
        lot("Q1", "L02", 240.0, 45000.0, 4500.0, 850.0, Reservado, Some("João Silva"), 180.0, 120.0),
        lot("Q1", "L03", 240.0, 45000.0, 4500.0, 850.0, Vendido, Some("Maria Santos"), 210.0, 120.0),
        lot("Q1", "L04", 300.0, 55000.0, 5500.0, 950.0, Disponivel, None, 240.0, 120.0),
        lot("Q1", "L05", 300.0, 55000.0, 5500.0, 950.0, Vendido, Some("Carlos Oliveira"), 270.0, 120.0),
        lot("Q2", "L01", 280.0, 50000.0, 5000.0, 900.0, Disponivel, None, 150.0, 180.0),
        lot("Q2", "L02", 280.0, 50000.0, 5000.0, 900.0, Reservado, Some("Ana Costa"), 180.0, 180.0),
        lot("Q2", "L03", 280.0, 50000.0, 5000.0, 900.0, Disponivel, None, 210.0, 180.0),
        lot("Q2", "L04", 320.0, 60000.0, 6000.0, 1000.0, Vendido, Some("Pedro Lima"), 240.0, 180.0),
        lot("Q2", "L05", 320.0, 60000.0, 6000.0, 1000.0, Disponivel, None, 270.0, 180.0),
    ]
}
