//! Hover- und Drag-Logik für die primären Kontrollpunkte.
//!
//! Framework-frei: arbeitet auf [`AppState`] und Zeiger-Positionen in
//! Zeichenflächen-Koordinaten. Der Aufrufer stößt nach jedem gemeldeten
//! Koordinaten-Update die Neuberechnung an — die Auswertung liest so nie
//! einen halb aktualisierten Punkt.

use super::state::{AppState, CONTROL_POINT_SIZE};
use crate::core::Point;
use glam::Vec2;

/// Hover-/Drag-Zustand des Zeigers über der Zeichenfläche
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Index des Kontrollpunkts unter dem Zeiger
    pub hovering: Option<usize>,
    /// Index des gerade gegriffenen Kontrollpunkts
    pub dragging: Option<usize>,
}

impl PointerState {
    /// true wenn gerade ein Punkt gegriffen ist
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}

/// Achsenparalleler Boxtest: liegt `point` innerhalb von ±`padding`
/// um `pointer` (beide Achsen)?
pub fn hit_test(point: Point, pointer: Vec2, padding: f32) -> bool {
    point.x >= pointer.x - padding
        && point.x <= pointer.x + padding
        && point.y >= pointer.y - padding
        && point.y <= pointer.y + padding
}

/// Index des Kontrollpunkts unter dem Zeiger (Griff-Größe als Padding)
pub fn hovered_point(points: &[Point], pointer: Vec2) -> Option<usize> {
    points
        .iter()
        .position(|p| hit_test(*p, pointer, CONTROL_POINT_SIZE))
}

/// Verarbeitet eine Zeigerbewegung.
///
/// Während eines Drags folgt der gegriffene Punkt dem Zeiger; sonst wird
/// nur der Hover-Zustand aktualisiert. Gibt true zurück wenn sich ein
/// Kontrollpunkt geändert hat und neu berechnet werden muss.
pub fn on_pointer_move(state: &mut AppState, pointer: Vec2) -> bool {
    if let Some(index) = state.pointer.dragging {
        if let Some(point) = state.control_points.get_mut(index) {
            *point = Point::from(pointer);
            return true;
        }
        return false;
    }

    state.pointer.hovering = hovered_point(&state.control_points, pointer);
    false
}

/// Startet einen Drag auf dem aktuell gehoverten Punkt.
/// Gibt true zurück wenn ein Punkt gegriffen wurde.
pub fn on_drag_start(state: &mut AppState) -> bool {
    if let Some(index) = state.pointer.hovering {
        state.pointer.dragging = Some(index);
        true
    } else {
        false
    }
}

/// Beendet einen aktiven Drag.
pub fn on_drag_end(state: &mut AppState) {
    state.pointer.dragging = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_points(points: &[Point]) -> AppState {
        let mut state = AppState::new();
        state.control_points = points.to_vec();
        state
    }

    #[test]
    fn test_hit_test_box_semantics() {
        let p = Point::new(100.0, 100.0);

        assert!(hit_test(p, Vec2::new(100.0, 100.0), 10.0));
        assert!(hit_test(p, Vec2::new(109.0, 91.0), 10.0));
        // Kanten zählen als Treffer
        assert!(hit_test(p, Vec2::new(110.0, 100.0), 10.0));
        // Außerhalb auf einer Achse reicht zum Verfehlen
        assert!(!hit_test(p, Vec2::new(111.0, 100.0), 10.0));
        assert!(!hit_test(p, Vec2::new(100.0, 80.0), 10.0));
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut state = state_with_points(&[Point::new(50.0, 50.0), Point::new(200.0, 50.0)]);

        assert!(!on_pointer_move(&mut state, Vec2::new(204.0, 47.0)));
        assert_eq!(state.pointer.hovering, Some(1));

        assert!(!on_pointer_move(&mut state, Vec2::new(120.0, 120.0)));
        assert_eq!(state.pointer.hovering, None);
    }

    #[test]
    fn test_drag_lifecycle_moves_point() {
        let mut state = state_with_points(&[Point::new(50.0, 50.0), Point::new(200.0, 50.0)]);

        on_pointer_move(&mut state, Vec2::new(50.0, 50.0));
        assert!(on_drag_start(&mut state));
        assert_eq!(state.pointer.dragging, Some(0));

        // Bewegung während des Drags verschiebt den Punkt und fordert
        // eine Neuberechnung an
        assert!(on_pointer_move(&mut state, Vec2::new(80.0, 90.0)));
        assert_eq!(state.control_points[0], Point::new(80.0, 90.0));

        on_drag_end(&mut state);
        assert!(!state.pointer.is_dragging());
    }

    #[test]
    fn test_drag_start_without_hover_is_noop() {
        let mut state = state_with_points(&[Point::new(50.0, 50.0)]);

        on_pointer_move(&mut state, Vec2::new(300.0, 300.0));
        assert!(!on_drag_start(&mut state));
        assert!(!state.pointer.is_dragging());
    }
}
