//! Bézier Construction Visualizer Library.
//! Auswertungskern und App-Schichten als Library exportiert für Tests und
//! Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod ui;

pub use app::{AppState, CurveSettings, PointerState};
pub use core::{CurveConstruction, CurveError, Point, SampledCurve, MAX_SUPPORTED_POINTS};
