//! Reiner Auswertungskern: De-Casteljau-Rekursion, Punkt-Werttyp, Sampling.
//!
//! Kennt keine UI-Framework-Typen — konsumiert Punkte, Kontrollpunkt-Folgen,
//! t-Werte und Schrittanzahlen und liefert unveränderliche Konstruktions-Bäume.

pub mod construction;
pub mod error;
pub mod point;
pub mod sampler;

pub use construction::{CurveConstruction, Levels, MAX_SUPPORTED_POINTS};
pub use error::CurveError;
pub use point::Point;
pub use sampler::SampledCurve;
