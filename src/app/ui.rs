use super::CartoonUploader;
use crate::upload::UploadPhase;
use crate::utils::file_size::format_size;
use eframe::egui::{self, Align, Color32, RichText, Stroke};

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);
const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const FAILURE: Color32 = Color32::from_rgb(220, 50, 50);

impl CartoonUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let footer_height = 30.0;
            let content_height = ui.available_height() - footer_height;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Video Cartoonizer");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Upload a video and get a cartoon version back")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);
                    self.render_dropzone(ui);

                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        let button = egui::Button::new("📤 Upload & Process")
                            .min_size(egui::vec2(200.0, 40.0));
                        if ui
                            .add_enabled(self.controller.is_upload_enabled(), button)
                            .clicked()
                        {
                            self.start_upload(ctx);
                        }
                    });

                    ui.add_space(10.0);
                    self.render_status(ui);

                    if self.controller.preview().is_some() {
                        ui.add_space(20.0);
                        self.render_preview(ui);
                    }

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Server: {}", self.config.server_url()))
                        .small()
                        .color(ui.visuals().text_color().gamma_multiply(0.5)),
                );
            });
        });
    }

    fn render_dropzone(&mut self, ui: &mut egui::Ui) {
        let border = if self.dropzone_hovered {
            Color32::from_white_alpha(77)
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        };

        let frame = egui::Frame::none()
            .stroke(Stroke::new(2.0, border))
            .rounding(8.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🎬").size(32.0));
                    ui.label("Drop a video here, or click to choose one");
                    if let Some(file) = self.controller.selected() {
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new(format!("{} · {}", file.name, format_size(file.size)))
                                .color(ACCENT),
                        );
                    }
                });
            });

        if frame
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
        {
            self.pick_file();
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let status = self.controller.status();
        if status.is_empty() {
            return;
        }

        let color = match self.controller.phase() {
            UploadPhase::Done => SUCCESS,
            UploadPhase::Failed => FAILURE,
            _ => ui.visuals().text_color(),
        };

        ui.vertical_centered(|ui| {
            if self.controller.phase() == UploadPhase::Uploading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.colored_label(color, status);
                });
            } else {
                ui.colored_label(color, status);
            }
        });
    }

    fn render_preview(&self, ui: &mut egui::Ui) {
        let Some(preview) = self.controller.preview() else {
            return;
        };

        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new("Result").strong());
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.link("▶ Play processed video").clicked() {
                    self.open_link(&preview.src);
                }
                ui.add_space(12.0);
                if ui
                    .link(RichText::new("⬇ Download").color(ACCENT))
                    .on_hover_text(preview.download_href.as_str())
                    .clicked()
                {
                    self.open_link(&preview.download_href);
                }
            });
        });
    }
}
