//! egui-Bedienelemente: Einstellungs-Panel des Visualizers.

use crate::app::CurveSettings;
use crate::core::MAX_SUPPORTED_POINTS;

/// Ergebnis eines Panel-Durchlaufs
pub struct PanelResponse {
    /// Eingabewerte nach diesem Frame (noch ungeklemmt)
    pub settings: CurveSettings,
    /// true wenn sich ein Wert geändert hat
    pub changed: bool,
    /// true wenn neue Kontrollpunkte angefordert wurden
    pub regenerate: bool,
}

/// Rendert das linke Einstellungs-Panel und sammelt die Eingabewerte ein.
pub fn settings_panel(
    ctx: &egui::Context,
    settings: CurveSettings,
    scrub_t: f32,
) -> PanelResponse {
    let mut edited = settings;
    let mut regenerate = false;

    egui::SidePanel::left("settings_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Bézier-Konstruktion");
            ui.add_space(8.0);

            ui.label("Kontrollpunkte:");
            ui.horizontal(|ui| {
                for count in [2usize, 3, 4] {
                    ui.selectable_value(&mut edited.point_count, count, count.to_string());
                }
                ui.add(
                    egui::DragValue::new(&mut edited.point_count)
                        .range(2..=MAX_SUPPORTED_POINTS)
                        .speed(0.1),
                );
            });
            ui.add_space(8.0);

            ui.label("Abtastschritte:");
            ui.add(
                egui::DragValue::new(&mut edited.step_count)
                    .range(2..=512)
                    .speed(0.2),
            );
            ui.add_space(8.0);

            ui.label(format!("t = {:.3}", scrub_t));
            let max_scrub = edited.step_count.saturating_sub(1).max(1);
            ui.add(egui::Slider::new(&mut edited.scrub_step, 0..=max_scrub));
            ui.add_space(12.0);

            if ui.button("Neue Kontrollpunkte").clicked() {
                regenerate = true;
            }
        });

    PanelResponse {
        changed: edited != settings,
        settings: edited,
        regenerate,
    }
}
