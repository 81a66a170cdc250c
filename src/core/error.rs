//! Fehlertypen des Auswertungskerns.

use thiserror::Error;

/// Validierungsfehler der Kurvenauswertung
///
/// Beide Varianten sind lokale Eingabefehler ohne Recovery im Kern:
/// der Aufrufer muss korrigierte Eingaben liefern.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Konstruktion ohne Kontrollpunkte angefordert
    #[error("Keine Kontrollpunkte uebergeben (mindestens 1 erforderlich)")]
    NoControlPoints,

    /// Abtastung mit weniger als 2 Schritten — t = step/(stepCount−1)
    /// wäre undefiniert
    #[error("Schrittanzahl {0} zu klein (mindestens 2 erforderlich)")]
    StepCountTooSmall(usize),
}
