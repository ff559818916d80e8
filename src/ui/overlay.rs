//! Overlay window contents.
//!
//! Draws the loaded face centered on a fully transparent background. The
//! window itself is click-through, so nothing here handles input.

use std::time::Duration;

use chrono::Local;
use eframe::egui::{self, Color32, FontFamily, FontId, RichText};

use crate::face::FaceDocument;
use crate::model::FACE_REFRESH_MS;

pub struct OverlayApp {
    face: FaceDocument,
}

impl OverlayApp {
    pub fn new(cc: &eframe::CreationContext<'_>, face: FaceDocument) -> Self {
        // Transparent background everywhere; the desktop shows through.
        cc.egui_ctx.set_visuals(egui::Visuals {
            window_fill: Color32::TRANSPARENT,
            panel_fill: Color32::TRANSPARENT,
            ..egui::Visuals::dark()
        });
        Self { face }
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Fully transparent background
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Local::now();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                // Glyph height roughly tracks point size; close enough to
                // center the stack vertically.
                let stack_height: f32 = self
                    .face
                    .lines
                    .iter()
                    .map(|line| line.size + self.face.spacing)
                    .sum();
                let top = ((ui.available_height() - stack_height) / 2.0).max(0.0);
                ui.add_space(top);

                ui.vertical_centered(|ui| {
                    for line in &self.face.lines {
                        let (r, g, b, a) = line.rgba(&now);
                        let family = if line.monospace {
                            FontFamily::Monospace
                        } else {
                            FontFamily::Proportional
                        };
                        ui.label(
                            RichText::new(line.text(&now))
                                .font(FontId::new(line.size, family))
                                .color(Color32::from_rgba_unmultiplied(r, g, b, a)),
                        );
                        ui.add_space(self.face.spacing);
                    }
                });
            });

        // Keep the seconds fresh between input events.
        ctx.request_repaint_after(Duration::from_millis(FACE_REFRESH_MS));
    }
}
