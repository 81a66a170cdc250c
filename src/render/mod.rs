//! Zeichnet Kurve, Konstruktions-Ebenen und Kontrollpunkt-Griffe mit egui.
//!
//! Alle Koordinaten des App-Zustands sind zeichenflächen-lokal; `origin`
//! (linke obere Ecke des zugewiesenen Rects) verschiebt sie in
//! Screen-Koordinaten.

use crate::app::{AppState, CONTROL_POINT_SIZE};
use crate::core::Point;
use egui::{Color32, Painter, Pos2, Rect, Stroke, StrokeKind};

/// Farbschema der Visualisierung
pub mod colors {
    use egui::Color32;

    /// Kurvenzug
    pub const CURVE: Color32 = Color32::from_rgb(200, 20, 0);
    /// Kurvenpunkte der nicht inspizierten Schritte (abgeschwächt)
    pub const CURVE_POINTS: Color32 = Color32::from_rgba_premultiplied(60, 0, 6, 77);
    /// Kurvenpunkt des aktuell inspizierten Schritts
    pub const CURVE_POINTS_CURRENT: Color32 = Color32::from_rgb(200, 0, 20);
    /// Primäres Kontrollpolygon und Griffe
    pub const PRIMARY_CONTROL: Color32 = Color32::BLACK;
    /// Konstruktions-Ebenen des inspizierten Schritts
    pub const SECONDARY_CONTROL_LINES: Color32 = Color32::from_rgb(0, 200, 20);
    /// Hintergrund der Zeichenfläche
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);
}

/// Linienbreite aller Züge (Pixel)
pub const LINE_WIDTH: f32 = 3.0;
/// Radius der Kurvenpunkt-Kreise (Pixel)
pub const CURVE_POINT_RADIUS: f32 = 5.0;

fn to_pos2(point: Point, origin: Pos2) -> Pos2 {
    Pos2::new(origin.x + point.x, origin.y + point.y)
}

/// Zeichnet die komplette Szene: Hintergrund, Konstruktions-Ebenen des
/// Scrub-Schritts, Kurvenzug, Kurvenpunkte und primäres Kontrollpolygon.
pub fn draw_scene(painter: &Painter, rect: Rect, state: &AppState) {
    painter.rect_filled(rect, 0.0, colors::BACKGROUND);

    let Some(sampled) = &state.sampled else {
        return;
    };
    let origin = rect.min;

    // Konstruktions-Ebenen des aktuell inspizierten Schritts
    if let Some(construction) = state.scrub_construction() {
        for level in construction.levels() {
            draw_control_polygon(painter, origin, level, colors::SECONDARY_CONTROL_LINES, false);
        }
    }

    // Kurvenzug durch die Terminalpunkte aller Schritte
    let curve_points = sampled.curve_points();
    for pair in curve_points.windows(2) {
        painter.line_segment(
            [to_pos2(pair[0], origin), to_pos2(pair[1], origin)],
            Stroke::new(LINE_WIDTH, colors::CURVE),
        );
    }

    // Kurvenpunkte: aktueller Schritt hervorgehoben, Rest abgeschwächt
    for (step, point) in curve_points.iter().enumerate() {
        let color = if step == state.settings.scrub_step {
            colors::CURVE_POINTS_CURRENT
        } else {
            colors::CURVE_POINTS
        };
        painter.circle_filled(to_pos2(*point, origin), CURVE_POINT_RADIUS, color);
    }

    // Primäres Kontrollpolygon zuletzt — liegt über den Konstruktionslinien
    draw_control_polygon(
        painter,
        origin,
        &state.control_points,
        colors::PRIMARY_CONTROL,
        true,
    );
}

/// Zeichnet eine Kontrollpunkt-Folge: Verbindungslinien von Punkt zu
/// Punkt plus quadratische Griffe. Primäre Griffe sind gefüllt,
/// sekundäre nur umrandet.
fn draw_control_polygon(
    painter: &Painter,
    origin: Pos2,
    points: &[Point],
    line_color: Color32,
    primary: bool,
) {
    for pair in points.windows(2) {
        painter.line_segment(
            [to_pos2(pair[0], origin), to_pos2(pair[1], origin)],
            Stroke::new(LINE_WIDTH, line_color),
        );
    }

    let fill = if primary {
        colors::PRIMARY_CONTROL
    } else {
        colors::BACKGROUND
    };
    for point in points {
        let handle = Rect::from_center_size(
            to_pos2(*point, origin),
            egui::Vec2::splat(CONTROL_POINT_SIZE),
        );
        painter.rect_filled(handle, 0.0, fill);
        painter.rect_stroke(
            handle,
            0.0,
            Stroke::new(LINE_WIDTH, colors::PRIMARY_CONTROL),
            StrokeKind::Inside,
        );
    }
}
