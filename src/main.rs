//! polygon-transformer - Interactive 2D polygon transformation visualizer
//!
//! Builds a regular polygon on the unit circle and shows it after rotation,
//! scaling, shear and translation. Every button press or edit of the side
//! count redraws the polygon from scratch through one combined affine matrix.

use eframe::egui;

mod controls;
mod geometry;
mod pipeline;
mod render;
mod session;
mod settings;

use controls::{Control, ControlGroup};
use render::{ColorPreset, Viewport};
use session::Transformer;
use settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting polygon-transformer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 620.0])
            .with_title("Polygon Transformer"),
        ..Default::default()
    };

    eframe::run_native(
        "polygon-transformer",
        options,
        Box::new(|cc| Ok(Box::new(PolygonApp::new(cc)))),
    )
}

/// Main application state
pub struct PolygonApp {
    session: Transformer<Viewport>,
    show_controls: bool,
}

impl PolygonApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let viewport = Viewport::attached(cc.egui_ctx.clone());

        let mut app = Self {
            session: Transformer::new(viewport),
            show_controls: true,
        };

        AppSettings::load().apply(&mut app);
        app
    }

    /// Side-count entry and the button groups from the control table
    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.label("Number of sides:");
        let mut text = self.session.side_count_text.clone();
        if ui.text_edit_singleline(&mut text).changed() {
            self.session.set_side_count_text(text);
        }

        let mut pressed = None;

        for group in ControlGroup::ALL {
            ui.add_space(8.0);
            if let Some(heading) = group.heading() {
                ui.strong(heading);
            }

            ui.horizontal_wrapped(|ui| {
                for control in Control::in_group(*group) {
                    if ui.button(control.label).clicked() {
                        pressed = Some(control.id);
                    }
                }
            });
        }

        if let Some(id) = pressed {
            self.session.press(id);
        }

        ui.add_space(8.0);
        ui.separator();

        let settings = &mut self.session.surface_mut().settings;
        ui.collapsing("Display", |ui| {
            ui.add(egui::Slider::new(&mut settings.line_width, 0.5..=5.0).text("Line width"));

            ui.horizontal_wrapped(|ui| {
                for preset in ColorPreset::ALL {
                    if ui.button(preset.name()).clicked() {
                        preset.apply(settings);
                    }
                }
            });
        });
    }

    /// One-line summary of the current parameters
    fn status_ui(&self, ui: &mut egui::Ui) {
        let state = self.session.state();

        ui.horizontal(|ui| {
            ui.small(format!("Sides: {}", state.side_count()));
            ui.separator();
            ui.small(format!("Rotation: {:.1}°", state.rotation_degrees));
            ui.separator();
            ui.small(format!("Scale: {:.3}", state.scale));
            ui.separator();
            ui.small(format!(
                "Translation: ({:.2}, {:.2})",
                state.translate_x, state.translate_y
            ));
            ui.separator();
            ui.small(format!("Shear: ({:.2}, {:.2})", state.shear_x, state.shear_y));
            ui.separator();
            ui.small(format!("Points: {}", self.session.surface().trace().len()));
        });
    }
}

impl eframe::App for PolygonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            AppSettings::from_app(self).save();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Polygon Transformer");
                ui.separator();
                ui.toggle_value(&mut self.show_controls, "⚙ Controls");
            });
        });

        if self.show_controls {
            egui::SidePanel::left("controls_panel")
                .min_width(200.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.controls_ui(ui);
                    });
                });
        }

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.status_ui(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                self.session.surface().show(ui);
            });
        });
    }
}
