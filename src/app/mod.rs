//! Application-Layer: Zustand, Einstellungen und Zeiger-Interaktion.

pub mod interaction;
pub mod state;

pub use interaction::{hit_test, hovered_point, on_drag_end, on_drag_start, on_pointer_move, PointerState};
pub use state::{AppState, CurveSettings, CONTROL_POINT_SIZE, RANDOM_POINT_PADDING};
