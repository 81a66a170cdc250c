//! Rekursive De-Casteljau-Konstruktion einer Bézier-Kurve.
//!
//! Jede Ebene interpoliert benachbarte Kontrollpunkt-Paare linear und
//! reicht die um einen Punkt kürzere Folge an die nächste Ebene weiter,
//! bis genau ein Punkt übrig bleibt — der Kurvenpunkt bei t.

use super::error::CurveError;
use super::point::Point;

/// Obergrenze der unterstützten Kontrollpunkt-Anzahl.
///
/// Die Rekursionstiefe von [`CurveConstruction::build`] ist
/// `control_points.len() - 1`; die UI klemmt Eingaben auf diesen Wert,
/// damit degenerierte Riesen-Ordnungen den Stack nicht erschöpfen.
pub const MAX_SUPPORTED_POINTS: usize = 64;

/// Eine Ebene der rekursiven De-Casteljau-Auswertung bei festem t
#[derive(Debug, Clone, PartialEq)]
pub enum CurveConstruction {
    /// Terminalknoten: hält den resultierenden Kurvenpunkt
    Terminal(Point),
    /// Innere Ebene: hält die Kontrollpunkte dieser Ebene und besitzt
    /// die nächste, um einen Punkt kürzere Ebene
    Interior {
        /// Kontrollpunkte dieser Rekursionsebene
        control_points: Vec<Point>,
        /// Nächste Ebene derselben Konstruktion (gleiches t)
        child: Box<CurveConstruction>,
    },
}

impl CurveConstruction {
    /// Baut die vollständige Konstruktions-Hierarchie für `control_points` bei `t`.
    ///
    /// Ein einzelner Kontrollpunkt ist sofort terminal. t wird nicht
    /// geklemmt; Werte außerhalb von [0, 1] extrapolieren. Gleiche
    /// Eingaben liefern strukturell identische Ergebnisse.
    pub fn build(control_points: &[Point], t: f32) -> Result<CurveConstruction, CurveError> {
        match control_points {
            [] => Err(CurveError::NoControlPoints),
            [single] => Ok(CurveConstruction::Terminal(*single)),
            _ => {
                let next_level = de_casteljau_step(control_points, t);
                let child = CurveConstruction::build(&next_level, t)?;
                Ok(CurveConstruction::Interior {
                    control_points: control_points.to_vec(),
                    child: Box::new(child),
                })
            }
        }
    }

    /// true wenn dieser Knoten der Terminalknoten der Kette ist
    pub fn is_terminal(&self) -> bool {
        matches!(self, CurveConstruction::Terminal(_))
    }

    /// Der resultierende Kurvenpunkt (Terminalknoten der Kette)
    pub fn terminal_point(&self) -> Point {
        match self {
            CurveConstruction::Terminal(point) => *point,
            CurveConstruction::Interior { child, .. } => child.terminal_point(),
        }
    }

    /// Anzahl der Verkettungen von diesem Knoten bis zum Terminalknoten.
    ///
    /// Entspricht immer `Kontrollpunkt-Anzahl − 1` der Wurzel-Eingabe.
    pub fn depth(&self) -> usize {
        match self {
            CurveConstruction::Terminal(_) => 0,
            CurveConstruction::Interior { child, .. } => 1 + child.depth(),
        }
    }

    /// Iterator über die Kontrollpunkt-Folgen aller inneren Ebenen,
    /// von der Wurzel (Original-Kontrollpunkte) abwärts.
    ///
    /// Der Terminalknoten liefert keine Folge — sein Punkt ist über
    /// [`terminal_point`](Self::terminal_point) erreichbar.
    pub fn levels(&self) -> Levels<'_> {
        Levels {
            current: Some(self),
        }
    }
}

/// Iterator über die inneren Ebenen einer Konstruktion
pub struct Levels<'a> {
    current: Option<&'a CurveConstruction>,
}

impl<'a> Iterator for Levels<'a> {
    type Item = &'a [Point];

    fn next(&mut self) -> Option<Self::Item> {
        match self.current? {
            CurveConstruction::Terminal(_) => {
                self.current = None;
                None
            }
            CurveConstruction::Interior {
                control_points,
                child,
            } => {
                self.current = Some(child);
                Some(control_points)
            }
        }
    }
}

/// Ein De-Casteljau-Schritt: interpoliert benachbarte Punktpaare bei `t`
/// und liefert die um einen Punkt kürzere Folge.
fn de_casteljau_step(points: &[Point], t: f32) -> Vec<Point> {
    points
        .windows(2)
        .map(|pair| pair[0].lerp(pair[1], t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_is_terminal_for_any_t() {
        let p = Point::new(4.0, 9.0);

        for t in [-1.0, 0.0, 0.5, 1.0, 3.5] {
            let construction = CurveConstruction::build(&[p], t).unwrap();
            assert!(construction.is_terminal());
            assert_eq!(construction.terminal_point(), p);
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = CurveConstruction::build(&[], 0.5);
        assert_eq!(result.unwrap_err(), CurveError::NoControlPoints);
    }

    #[test]
    fn test_endpoints_match_first_and_last_control_point() {
        let points = [
            Point::new(0.0, 100.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(150.0, 50.0),
        ];

        let start = CurveConstruction::build(&points, 0.0).unwrap();
        let end = CurveConstruction::build(&points, 1.0).unwrap();

        assert_eq!(start.terminal_point(), points[0]);
        assert_eq!(end.terminal_point(), points[3]);
    }

    #[test]
    fn test_midpoint_of_two_points() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];

        let construction = CurveConstruction::build(&points, 0.5).unwrap();
        assert_eq!(construction.terminal_point(), Point::new(5.0, 0.0));
    }

    #[test]
    fn test_depth_equals_point_count_minus_one() {
        for n in 1..=8 {
            let points: Vec<Point> = (0..n).map(|i| Point::new(i as f32, 0.0)).collect();
            let construction = CurveConstruction::build(&points, 0.3).unwrap();
            assert_eq!(construction.depth(), n - 1);
        }
    }

    #[test]
    fn test_levels_walk_downward_by_one() {
        let points: Vec<Point> = (0..5).map(|i| Point::new(i as f32, 1.0)).collect();
        let construction = CurveConstruction::build(&points, 0.25).unwrap();

        let level_lengths: Vec<usize> = construction.levels().map(|level| level.len()).collect();
        assert_eq!(level_lengths, vec![5, 4, 3, 2]);

        // Wurzel-Ebene hält die unveränderten Original-Kontrollpunkte
        assert_eq!(construction.levels().next().unwrap(), points.as_slice());
    }

    #[test]
    fn test_build_is_deterministic() {
        let points = [
            Point::new(0.0, 100.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 100.0),
        ];

        let first = CurveConstruction::build(&points, 0.37).unwrap();
        let second = CurveConstruction::build(&points, 0.37).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extrapolation_beyond_unit_range() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];

        let construction = CurveConstruction::build(&points, 2.0).unwrap();
        assert_eq!(construction.terminal_point(), Point::new(20.0, 0.0));
    }
}
