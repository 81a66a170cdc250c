//! Diskretisierung der Kurve: eine Konstruktion pro Abtastschritt.

use super::construction::CurveConstruction;
use super::error::CurveError;
use super::point::Point;

/// Abgetastete Kurve: eine Konstruktions-Wurzel pro Schritt
///
/// Reines abgeleitetes Datum — wird bei jeder Eingabeänderung komplett
/// neu aufgebaut, ohne Wiederverwendung eines vorherigen Aufbaus.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    constructions: Vec<CurveConstruction>,
}

impl SampledCurve {
    /// Baut für jeden Schritt in `[0, step_count)` eine Konstruktion bei
    /// `t = step / (step_count − 1)`; t läuft linear von 0.0 bis 1.0
    /// (beide inklusive).
    ///
    /// `step_count < 2` wird explizit abgelehnt, statt stillschweigend
    /// durch 0 zu teilen.
    pub fn sample(control_points: &[Point], step_count: usize) -> Result<SampledCurve, CurveError> {
        if step_count < 2 {
            return Err(CurveError::StepCountTooSmall(step_count));
        }

        let mut constructions = Vec::with_capacity(step_count);
        for step in 0..step_count {
            let t = step as f32 / (step_count - 1) as f32;
            constructions.push(CurveConstruction::build(control_points, t)?);
        }

        Ok(SampledCurve { constructions })
    }

    /// Anzahl der Abtastschritte (entspricht dem `step_count` des Aufbaus)
    pub fn len(&self) -> usize {
        self.constructions.len()
    }

    /// Immer false — `sample` garantiert mindestens 2 Schritte
    pub fn is_empty(&self) -> bool {
        self.constructions.is_empty()
    }

    /// Der t-Wert eines Schritts
    pub fn t_for_step(&self, step: usize) -> f32 {
        step as f32 / (self.constructions.len() - 1) as f32
    }

    /// Konstruktion eines Schritts (None außerhalb des Bereichs)
    pub fn get(&self, step: usize) -> Option<&CurveConstruction> {
        self.constructions.get(step)
    }

    /// Alle Konstruktions-Wurzeln in Schritt-Reihenfolge
    pub fn constructions(&self) -> &[CurveConstruction] {
        &self.constructions
    }

    /// Terminalpunkte aller Schritte in Reihenfolge — die Polyline,
    /// aus der die Render-Schicht den Kurvenzug zeichnet
    pub fn curve_points(&self) -> Vec<Point> {
        self.constructions
            .iter()
            .map(CurveConstruction::terminal_point)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_and_t_values() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];

        let sampled = SampledCurve::sample(&points, 5).unwrap();
        assert_eq!(sampled.len(), 5);

        // Lineare Kurve: Terminal-x entspricht exakt dem t des Schritts
        let xs: Vec<f32> = sampled.curve_points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        for (step, &expected) in [0.0, 0.25, 0.5, 0.75, 1.0].iter().enumerate() {
            assert_eq!(sampled.t_for_step(step), expected);
        }
    }

    #[test]
    fn test_first_and_last_step_hit_curve_endpoints() {
        let points = [
            Point::new(0.0, 100.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 100.0),
        ];

        let sampled = SampledCurve::sample(&points, 16).unwrap();
        assert_eq!(sampled.curve_points()[0], points[0]);
        assert_eq!(*sampled.curve_points().last().unwrap(), points[2]);
    }

    #[test]
    fn test_step_count_below_two_is_rejected() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];

        assert_eq!(
            SampledCurve::sample(&points, 1).unwrap_err(),
            CurveError::StepCountTooSmall(1)
        );
        assert_eq!(
            SampledCurve::sample(&points, 0).unwrap_err(),
            CurveError::StepCountTooSmall(0)
        );
    }

    #[test]
    fn test_empty_control_points_propagate_build_error() {
        assert_eq!(
            SampledCurve::sample(&[], 5).unwrap_err(),
            CurveError::NoControlPoints
        );
    }

    #[test]
    fn test_quadratic_midpoint_scenario() {
        // Quadratische Kurve, 3 Schritte → t = {0, 0.5, 1}
        let points = [
            Point::new(0.0, 100.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 100.0),
        ];

        let sampled = SampledCurve::sample(&points, 3).unwrap();
        let mid = sampled.get(1).unwrap();

        // Erste Interpolations-Ebene bei t=0.5: (25, 50) und (75, 50)
        let levels: Vec<&[Point]> = mid.levels().collect();
        assert_eq!(
            levels[1],
            &[Point::new(25.0, 50.0), Point::new(75.0, 50.0)]
        );

        // Deren Mittelpunkt ist der Kurvenpunkt
        assert_eq!(mid.terminal_point(), Point::new(50.0, 50.0));
    }
}
