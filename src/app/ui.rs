use super::MediaUploader;
use crate::upload::media;
use crate::utils::color::{self, ColorExt};
use crate::utils::file_size::format_size;
use egui::{Align, Color32, RichText};
use rfd::FileDialog;

const FOOTER_HEIGHT: f32 = 40.0;

impl MediaUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let content_height = (ui.available_height() - FOOTER_HEIGHT).max(0.0);

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("Upload Your Content");
                    });
                    ui.add_space(20.0);

                    self.render_file_picker(ui);
                    ui.add_space(12.0);

                    if self.pending.file.is_some() {
                        ui.label("Video Name");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.pending.name)
                                .desired_width(ui.available_width()),
                        );
                        ui.add_space(12.0);
                    }

                    ui.add(
                        egui::TextEdit::multiline(&mut self.pending.description)
                            .hint_text("Enter file description for best results!")
                            .desired_rows(4)
                            .desired_width(ui.available_width()),
                    );
                    ui.add_space(16.0);

                    self.render_submit(ui);
                    self.render_message(ui);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(10.0);
                self.render_footer(ui);
            });
        });
    }

    fn render_file_picker(&mut self, ui: &mut egui::Ui) {
        let label = match &self.pending.file {
            Some(file) => format!("{} ({})", file.file_name, format_size(file.size)),
            None => "📁 Choose a file to upload".to_string(),
        };
        let button = egui::Button::new(RichText::new(label))
            .stroke(egui::Stroke::new(2.0, Color32::hex_or_gray(color::ACCENT)))
            .min_size(egui::vec2(ui.available_width(), 56.0));

        let picker_enabled = !self.state.is_uploading;
        if ui.add_enabled(picker_enabled, button).clicked() {
            let extensions = media::accepted_extensions();
            if let Some(path) = FileDialog::new()
                .add_filter("Video or image", extensions.as_slice())
                .pick_file()
            {
                self.select_file(&path);
            }
        }
    }

    fn render_submit(&mut self, ui: &mut egui::Ui) {
        let text = if self.state.is_uploading {
            "Uploading..."
        } else {
            "Upload and Protect"
        };
        let enabled = self.can_submit();
        let fill = if enabled {
            Color32::hex_or_gray(color::BUTTON)
        } else {
            Color32::GRAY
        };

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new(text).strong())
                .fill(fill)
                .min_size(egui::vec2(ui.available_width(), 40.0));
            if ui.add_enabled(enabled, button).clicked() {
                self.submit();
            }
        });
    }

    fn render_message(&self, ui: &mut egui::Ui) {
        let message = self.state.message();
        if message.is_empty() {
            return;
        }
        let color = if self.state.status.is_success() {
            Color32::hex_or_gray(color::SUCCESS)
        } else {
            Color32::hex_or_gray(color::FAILURE)
        };
        ui.add_space(16.0);
        egui::Frame::none()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.colored_label(color, message);
            });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let muted = ui.visuals().text_color().gamma_multiply(0.7);
        match self.session.user_email() {
            Some(email) => ui.label(RichText::new(format!("Signed in as {}", email)).color(muted)),
            None => ui.label(RichText::new("Not signed in").color(muted)),
        };
    }
}
