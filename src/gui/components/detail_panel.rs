// src/gui/components/detail_panel.rs
//
// Full view of the selected offer. Text is drawn as plain labels, so nothing
// from the archive is ever interpreted as markup here.

use eframe::egui::{self, RichText};

use crate::config::consts::APPLY_LABEL;
use crate::specs::description::DescLine;
use crate::view::{Description, DetailView};

pub fn draw(ui: &mut egui::Ui, detail: &DetailView) {
    match detail {
        DetailView::Blank => {}
        DetailView::Message(msg) => {
            ui.label(*msg);
        }
        DetailView::Offer(d) => {
            egui::ScrollArea::vertical()
                .id_salt("detail_scroll")
                .show(ui, |ui| {
                    ui.label(RichText::new(&d.title).size(24.0).strong());
                    ui.label(RichText::new(&d.organization).size(18.0).strong());
                    ui.label(&d.location);
                    ui.add_space(6.0);
                    // Placeholder: the archive has no application endpoint.
                    ui.add_enabled(false, egui::Button::new(APPLY_LABEL));
                    ui.add_space(10.0);

                    match &d.description {
                        Description::Lines(lines) => {
                            for line in lines {
                                match line {
                                    DescLine::Bullet(t) => ui.label(format!("• {t}")),
                                    DescLine::Paragraph(t) => ui.label(t),
                                };
                                ui.add_space(4.0);
                            }
                        }
                        Description::Fallback(msg) => {
                            ui.weak(*msg);
                        }
                    }
                });
        }
    }
}
