//! Pointer gesture interpretation for the map canvas.
//!
//! A single enum tracks the interaction, so canvas panning and pin dragging
//! are mutually exclusive and a press resolves to exactly one of: pan,
//! pin drag, pin click.

use bevy::prelude::*;

use inventory::lot::Lot;

use crate::view::MapView;

/// Pixels of movement before a pin press becomes a drag instead of a click.
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Pin hit radius in screen pixels.
pub const PIN_RADIUS: f32 = 8.0;

#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub enum MapGesture {
    #[default]
    Idle,
    /// Canvas pan; `grab` is the pointer position offset by the pan at
    /// press time, so `pan = pointer - grab` while the button is held.
    Panning { grab: Vec2 },
    /// A pin is pressed but has not moved beyond [`DRAG_THRESHOLD`].
    PinPressed { id: String, start: Vec2 },
    /// A pin is being repositioned.
    PinDragging { id: String },
}

/// What a pointer release resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// Pin clicked without dragging: open the editor.
    OpenEditor(String),
    /// Pin dragged: store the de-transformed logical coordinate.
    Reposition { id: String, logical: Vec2 },
}

impl MapGesture {
    /// Pointer-down on empty canvas. Ignored while another interaction runs.
    pub fn press_canvas(&mut self, pointer: Vec2, view: &MapView) {
        if *self == MapGesture::Idle {
            *self = MapGesture::Panning {
                grab: pointer - view.pan,
            };
        }
    }

    /// Pointer-down on a pin. Ignored while another interaction runs.
    pub fn press_pin(&mut self, id: impl Into<String>, pointer: Vec2) {
        if *self == MapGesture::Idle {
            *self = MapGesture::PinPressed {
                id: id.into(),
                start: pointer,
            };
        }
    }

    /// Pointer movement: pans the view, or upgrades a pin press to a drag
    /// once the pointer travels past the threshold.
    pub fn pointer_moved(&mut self, pointer: Vec2, view: &mut MapView) {
        match self {
            MapGesture::Panning { grab } => view.pan = pointer - *grab,
            MapGesture::PinPressed { id, start } => {
                if (pointer - *start).length() > DRAG_THRESHOLD {
                    let id = std::mem::take(id);
                    *self = MapGesture::PinDragging { id };
                }
            }
            MapGesture::Idle | MapGesture::PinDragging { .. } => {}
        }
    }

    /// Pointer-up anywhere, over the canvas or not. Always returns to idle.
    pub fn release(
        &mut self,
        pointer: Vec2,
        origin: Vec2,
        view: &MapView,
    ) -> Option<ReleaseOutcome> {
        match std::mem::take(self) {
            MapGesture::PinPressed { id, .. } => Some(ReleaseOutcome::OpenEditor(id)),
            MapGesture::PinDragging { id } => Some(ReleaseOutcome::Reposition {
                id,
                logical: view.screen_to_map(pointer, origin),
            }),
            MapGesture::Idle | MapGesture::Panning { .. } => None,
        }
    }

    /// Pointer left the canvas: a pan stops, a pin drag survives until the
    /// button is released.
    pub fn pointer_left(&mut self) {
        if matches!(self, MapGesture::Panning { .. }) {
            *self = MapGesture::Idle;
        }
    }

    /// The pin currently pressed or dragged, if any.
    pub fn active_pin(&self) -> Option<&str> {
        match self {
            MapGesture::PinPressed { id, .. } | MapGesture::PinDragging { id } => Some(id),
            MapGesture::Idle | MapGesture::Panning { .. } => None,
        }
    }
}

/// Topmost pin (last drawn) whose screen-projected center lies within
/// [`PIN_RADIUS`] of the pointer.
pub fn pin_hit<'a>(
    lots: impl DoubleEndedIterator<Item = &'a Lot>,
    view: &MapView,
    origin: Vec2,
    pointer: Vec2,
) -> Option<&'a Lot> {
    lots.rev().find(|lot| {
        view.map_to_screen(lot.coordenadas.into(), origin)
            .distance(pointer)
            <= PIN_RADIUS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory::lot::Coordenadas;
    use inventory::registry::LotRegistry;

    #[test]
    fn test_press_and_release_without_motion_is_a_click() {
        let view = MapView::default();
        let mut gesture = MapGesture::default();
        let pointer = Vec2::new(150.0, 120.0);

        gesture.press_pin("Q1-L01", pointer);
        let outcome = gesture.release(pointer, Vec2::ZERO, &view);

        assert_eq!(outcome, Some(ReleaseOutcome::OpenEditor("Q1-L01".into())));
        assert_eq!(gesture, MapGesture::Idle);
    }

    #[test]
    fn test_small_jitter_still_resolves_to_click() {
        let mut view = MapView::default();
        let mut gesture = MapGesture::default();
        let start = Vec2::new(150.0, 120.0);

        gesture.press_pin("Q1-L01", start);
        gesture.pointer_moved(start + Vec2::new(2.0, -2.0), &mut view);
        let outcome = gesture.release(start + Vec2::new(2.0, -2.0), Vec2::ZERO, &view);

        assert_eq!(outcome, Some(ReleaseOutcome::OpenEditor("Q1-L01".into())));
    }

    #[test]
    fn test_drag_repositions_at_identity_view() {
        let mut view = MapView::default();
        let mut gesture = MapGesture::default();
        let origin = Vec2::ZERO;

        gesture.press_pin("Q1-L01", Vec2::new(150.0, 120.0));
        gesture.pointer_moved(Vec2::new(200.0, 140.0), &mut view);
        let outcome = gesture.release(Vec2::new(200.0, 140.0), origin, &view);

        assert_eq!(
            outcome,
            Some(ReleaseOutcome::Reposition {
                id: "Q1-L01".into(),
                logical: Vec2::new(200.0, 140.0),
            })
        );

        // Applying the outcome stores the logical coordinate.
        let mut registry = LotRegistry::seeded();
        if let Some(ReleaseOutcome::Reposition { id, logical }) = outcome {
            registry.update_coordinates(&id, logical.into());
        }
        assert_eq!(
            registry.get("Q1-L01").unwrap().coordenadas,
            Coordenadas::new(200.0, 140.0)
        );
    }

    #[test]
    fn test_drop_is_independent_of_zoom_and_pan() {
        let mut view = MapView {
            zoom: 2.0,
            pan: Vec2::new(30.0, -10.0),
        };
        let origin = Vec2::new(8.0, 48.0);
        let mut gesture = MapGesture::default();

        let press_at = view.map_to_screen(Vec2::new(150.0, 120.0), origin);
        let drop_at = view.map_to_screen(Vec2::new(200.0, 140.0), origin);

        gesture.press_pin("Q1-L01", press_at);
        gesture.pointer_moved(drop_at, &mut view);
        let outcome = gesture.release(drop_at, origin, &view).unwrap();

        let ReleaseOutcome::Reposition { logical, .. } = outcome else {
            panic!("expected a reposition");
        };
        assert!((logical - Vec2::new(200.0, 140.0)).length() < 1e-3);
    }

    #[test]
    fn test_canvas_pan_follows_pointer() {
        let mut view = MapView::default();
        let mut gesture = MapGesture::default();

        gesture.press_canvas(Vec2::new(100.0, 100.0), &view);
        gesture.pointer_moved(Vec2::new(130.0, 80.0), &mut view);
        assert_eq!(view.pan, Vec2::new(30.0, -20.0));

        let outcome = gesture.release(Vec2::new(130.0, 80.0), Vec2::ZERO, &view);
        assert_eq!(outcome, None);
        assert_eq!(gesture, MapGesture::Idle);
    }

    #[test]
    fn test_pan_resumes_from_existing_offset() {
        let mut view = MapView {
            zoom: 1.0,
            pan: Vec2::new(10.0, 10.0),
        };
        let mut gesture = MapGesture::default();

        gesture.press_canvas(Vec2::new(100.0, 100.0), &view);
        gesture.pointer_moved(Vec2::new(100.0, 100.0), &mut view);
        // No motion yet: the pan must be unchanged.
        assert_eq!(view.pan, Vec2::new(10.0, 10.0));
        gesture.pointer_moved(Vec2::new(105.0, 100.0), &mut view);
        assert_eq!(view.pan, Vec2::new(15.0, 10.0));
    }

    #[test]
    fn test_pointer_leave_cancels_pan_but_not_pin_drag() {
        let mut view = MapView::default();
        let mut gesture = MapGesture::default();

        gesture.press_canvas(Vec2::new(50.0, 50.0), &view);
        gesture.pointer_left();
        assert_eq!(gesture, MapGesture::Idle);

        gesture.press_pin("Q2-L04", Vec2::new(240.0, 180.0));
        gesture.pointer_moved(Vec2::new(280.0, 200.0), &mut view);
        gesture.pointer_left();
        assert_eq!(
            gesture,
            MapGesture::PinDragging {
                id: "Q2-L04".into()
            }
        );
    }

    #[test]
    fn test_press_is_ignored_while_interaction_runs() {
        let mut view = MapView::default();
        let mut gesture = MapGesture::default();

        gesture.press_pin("Q1-L01", Vec2::new(150.0, 120.0));
        gesture.pointer_moved(Vec2::new(200.0, 140.0), &mut view);
        gesture.press_canvas(Vec2::new(0.0, 0.0), &view);
        gesture.press_pin("Q1-L02", Vec2::new(180.0, 120.0));

        assert_eq!(gesture.active_pin(), Some("Q1-L01"));
    }

    #[test]
    fn test_pin_hit_prefers_topmost() {
        let view = MapView::default();
        let mut lots = inventory::seed::initial_lots();
        // Stack the second lot exactly on the first.
        let first = lots[0].coordenadas;
        lots[1].coordenadas = first;

        let hit = pin_hit(lots.iter(), &view, Vec2::ZERO, first.into()).unwrap();
        assert_eq!(hit.id, lots[1].id);
    }

    #[test]
    fn test_pin_hit_respects_radius_and_view() {
        let view = MapView {
            zoom: 2.0,
            pan: Vec2::new(5.0, 5.0),
        };
        let lots = inventory::seed::initial_lots();
        let origin = Vec2::new(20.0, 20.0);
        let center = view.map_to_screen(lots[0].coordenadas.into(), origin);

        assert!(pin_hit(lots.iter(), &view, origin, center).is_some());
        let miss = center + Vec2::new(PIN_RADIUS + 1.0, 0.0);
        let hit = pin_hit(lots.iter(), &view, origin, miss);
        assert!(hit.is_none_or(|lot| lot.id != lots[0].id));
    }
}
