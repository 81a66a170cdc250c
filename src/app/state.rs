//! Application State — zentrale Datenhaltung.

use crate::app::interaction::PointerState;
use crate::core::{CurveError, Point, SampledCurve, MAX_SUPPORTED_POINTS};
use glam::Vec2;
use rand::Rng;

/// Mindestabstand der Zufalls-y-Werte vom Zeichenflächenrand (Pixel)
pub const RANDOM_POINT_PADDING: f32 = 20.0;
/// Kantenlänge der quadratischen Kontrollpunkt-Griffe (Pixel)
pub const CONTROL_POINT_SIZE: f32 = 10.0;

/// Einstellbare Kurvenwerte (Gegenstück zu den Eingabe-Controls)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSettings {
    /// Anzahl der Kontrollpunkte (Kurvenordnung + 1)
    pub point_count: usize,
    /// Anzahl der Abtastschritte entlang der Kurve
    pub step_count: usize,
    /// Aktuell inspizierter Schritt (Scrub-Regler)
    pub scrub_step: usize,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            point_count: 4,
            step_count: 50,
            scrub_step: 25,
        }
    }
}

impl CurveSettings {
    /// Klemmt alle Werte auf ihre gültigen Bereiche.
    ///
    /// Punkt-Anzahl auf [2, MAX_SUPPORTED_POINTS] (Stack-Schutz der
    /// Rekursion), Schrittanzahl auf mindestens 2, Scrub-Schritt unter
    /// die Schrittanzahl.
    pub fn clamped(self) -> Self {
        let point_count = self.point_count.clamp(2, MAX_SUPPORTED_POINTS);
        let step_count = self.step_count.max(2);
        let scrub_step = self.scrub_step.min(step_count - 1);
        Self {
            point_count,
            step_count,
            scrub_step,
        }
    }

    /// t-Wert des aktuellen Scrub-Schritts
    pub fn scrub_t(&self) -> f32 {
        self.scrub_step as f32 / (self.step_count - 1) as f32
    }
}

/// Zentraler Anwendungszustand des Visualizers
pub struct AppState {
    /// Primäre Kontrollpunkte — per Drag mutiert, von der Auswertung
    /// nur gelesen
    pub control_points: Vec<Point>,
    /// Aktuelle Einstellungen
    pub settings: CurveSettings,
    /// Abgeleitete abgetastete Kurve; bei jeder Eingabeänderung
    /// komplett neu aufgebaut
    pub sampled: Option<SampledCurve>,
    /// Hover-/Drag-Zustand des Zeigers
    pub pointer: PointerState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt den Startzustand (noch ohne Kontrollpunkte — diese
    /// entstehen beim ersten Layout, sobald die Zeichenflächengröße
    /// bekannt ist).
    pub fn new() -> Self {
        Self {
            control_points: Vec::new(),
            settings: CurveSettings::default(),
            sampled: None,
            pointer: PointerState::default(),
        }
    }

    /// Erzeugt frische Kontrollpunkte für die aktuelle Punkt-Anzahl.
    ///
    /// x gleichmäßig auf Spaltenmitten verteilt, y zufällig mit
    /// [`RANDOM_POINT_PADDING`] Abstand zum oberen und unteren Rand.
    pub fn generate_control_points(&mut self, rng: &mut impl Rng, canvas_size: Vec2) {
        let point_count = self.settings.point_count;
        let space_per_point = canvas_size.x / point_count as f32;
        let y_max = (canvas_size.y - RANDOM_POINT_PADDING).max(RANDOM_POINT_PADDING + 1.0);

        self.control_points = (0..point_count)
            .map(|i| {
                Point::new(
                    i as f32 * space_per_point + space_per_point / 2.0,
                    rng.gen_range(RANDOM_POINT_PADDING..y_max),
                )
            })
            .collect();
        self.pointer = PointerState::default();
    }

    /// Baut die abgetastete Kurve aus dem aktuellen Zustand neu auf.
    pub fn recompute(&mut self) -> Result<(), CurveError> {
        self.settings = self.settings.clamped();
        self.sampled = Some(SampledCurve::sample(
            &self.control_points,
            self.settings.step_count,
        )?);
        Ok(())
    }

    /// Übernimmt geänderte Einstellungen.
    ///
    /// Eine geänderte Punkt-Anzahl erzeugt neue Kontrollpunkte; jede
    /// andere Änderung berechnet nur die abgeleitete Kurve neu.
    pub fn apply_settings(
        &mut self,
        new_settings: CurveSettings,
        rng: &mut impl Rng,
        canvas_size: Vec2,
    ) -> Result<(), CurveError> {
        let new_settings = new_settings.clamped();
        let regenerate = new_settings.point_count != self.settings.point_count
            || self.control_points.is_empty();
        self.settings = new_settings;

        if regenerate {
            self.generate_control_points(rng, canvas_size);
        }
        self.recompute()
    }

    /// Konstruktion des aktuell inspizierten Schritts
    pub fn scrub_construction(&self) -> Option<&crate::core::CurveConstruction> {
        self.sampled.as_ref()?.get(self.settings.scrub_step)
    }
}
