//! Bézier Construction Visualizer.
//!
//! Interaktive Darstellung der rekursiven De-Casteljau-Konstruktion:
//! Kontrollpunkte per Drag verschieben, Ordnung und Abtastschritte
//! einstellen, die Konstruktions-Ebenen mit dem Scrub-Regler inspizieren.

use bezier_construction_visualizer::{app, render, ui, AppState};
use eframe::egui;
use glam::Vec2;
use rand::rngs::ThreadRng;

fn main() -> Result<(), eframe::Error> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Bezier Construction Visualizer v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 720.0])
            .with_title("Bezier Construction Visualizer"),
        multisampling: 4,
        ..Default::default()
    };

    eframe::run_native(
        "Bezier Construction Visualizer",
        options,
        Box::new(|_cc| Ok(Box::new(VisualizerApp::new()))),
    )
}

/// Haupt-Anwendungsstruktur
struct VisualizerApp {
    state: AppState,
    rng: ThreadRng,
}

impl VisualizerApp {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            rng: rand::thread_rng(),
        }
    }

    /// Übernimmt Panel-Eingaben und Zeiger-Interaktion eines Frames und
    /// baut die abgeleitete Kurve bei Bedarf neu auf.
    fn process_frame(
        &mut self,
        panel: ui::PanelResponse,
        canvas_size: Vec2,
        pointer_moved: bool,
    ) -> anyhow::Result<()> {
        if panel.regenerate {
            self.state.generate_control_points(&mut self.rng, canvas_size);
            self.state.recompute()?;
        } else if panel.changed || self.state.sampled.is_none() {
            self.state
                .apply_settings(panel.settings, &mut self.rng, canvas_size)?;
        } else if pointer_moved {
            // Drag-Update abgeschlossen — erst jetzt neu auswerten
            self.state.recompute()?;
        }
        Ok(())
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let scrub_t = self.state.settings.scrub_t();
        let panel = ui::settings_panel(ctx, self.state.settings, scrub_t);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |canvas_ui| {
                let (rect, response) = canvas_ui
                    .allocate_exact_size(canvas_ui.available_size(), egui::Sense::click_and_drag());
                let canvas_size = Vec2::new(rect.width(), rect.height());

                // Zeiger-Interaktion (zeichenflächen-lokale Koordinaten)
                let mut pointer_moved = false;
                if let Some(pos) = response.interact_pointer_pos().or_else(|| response.hover_pos())
                {
                    let local = Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
                    pointer_moved = app::on_pointer_move(&mut self.state, local);
                }
                if response.drag_started_by(egui::PointerButton::Primary) {
                    app::on_drag_start(&mut self.state);
                }
                if response.drag_stopped_by(egui::PointerButton::Primary) {
                    app::on_drag_end(&mut self.state);
                }

                if let Err(e) = self.process_frame(panel, canvas_size, pointer_moved) {
                    log::error!("Neuberechnung fehlgeschlagen: {:#}", e);
                }

                if self.state.pointer.hovering.is_some() || self.state.pointer.is_dragging() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }

                render::draw_scene(canvas_ui.painter(), rect, &self.state);
            });

        if ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
