//! Panel layout and the input wiring around the image surface.

use crate::prelude::*;
use crate::reader::wheel::FLUSH_INTERVAL;
use crate::ui::image::{
    base_fit_scale, draw_dual_page, draw_single_page, draw_spinner, fit_width_ratio,
};
use crate::ui::modules;

impl ComicDropApp {
    pub fn display_top_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                modules::ui_open_button(self, ui);
                ui.separator();
                modules::ui_view_toggles(self, ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    modules::ui_fullscreen(ui);
                });
            });
        });
    }

    pub fn display_bottom_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.session.is_some() {
                    modules::ui_zoom_slider(self, ui);
                    ui.separator();
                    modules::ui_goto_page(self, ui);
                    ui.separator();
                }
                modules::ui_status_msg(self, ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    modules::ui_page_nav(self, ui);
                });
            });
        });
    }

    /// Empty state: drop target plus a hint where the Open button lives.
    pub fn display_main_empty(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());
            ui.centered_and_justified(|ui| {
                let text = if hovering {
                    "Release to open"
                } else {
                    "Drop a comic archive here, or use Open"
                };
                ui.label(egui::RichText::new(text).heading());
            });
        });
    }

    pub fn display_extracting(&mut self, ctx: &Context, percent: u8, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = ui.available_height();
            ui.vertical_centered(|ui| {
                ui.add_space(height * 0.4);
                ui.label(message);
                ui.add_space(8.0);
                ui.add(
                    egui::ProgressBar::new(f32::from(percent) / 100.0)
                        .show_percentage()
                        .desired_width(ui.available_width() * 0.5),
                );
            });
        });
    }

    /// The image surface: draws the current spread and owns the zoom, pan,
    /// and fit gestures.
    pub fn display_central_image_area(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(area, egui::Sense::click_and_drag());

            let Some(session) = self.session.as_mut() else {
                return;
            };
            let spread = session.navigator().current_spread();

            // Keep the cache lock short: clone out this frame's pages,
            // then render unlocked.
            let (primary, secondary) = {
                let mut cache = self.page_cache.lock().unwrap();
                let primary = cache.get(&spread.primary).cloned();
                let secondary = spread.secondary.and_then(|index| cache.get(&index).cloned());
                (primary, secondary)
            };

            let Some(primary) = primary else {
                draw_spinner(ui, area);
                return;
            };
            let dims = primary.image.dimensions();

            if response.hovered() {
                let raw_scroll = ctx.input(|i| i.raw_scroll_delta.y);
                self.wheel.push(raw_scroll);
            }
            self.wheel.flush_into(session.transform_mut(), Instant::now());
            if !self.wheel.is_empty() {
                // Leftover deltas need another frame inside the interval.
                ctx.request_repaint_after(FLUSH_INTERVAL);
            }

            if let Some(ratio) = ctx.input(|i| i.multi_touch().map(|t| t.zoom_delta)) {
                if ratio != 1.0 {
                    session.transform_mut().pinch_zoom(ratio);
                }
            }

            if response.double_clicked() {
                let ratio = fit_width_ratio(area, dims);
                session.transform_mut().toggle_fit(ratio);
            }

            if response.dragged() && session.transform().is_zoomed_in() {
                session.transform_mut().pan_by(response.drag_delta());
            }

            let scale = base_fit_scale(area, dims) * session.transform().scale();
            let pan = session.transform().offset();

            if session.navigator().spread_mode() {
                draw_dual_page(
                    ui,
                    &mut self.texture_cache,
                    &primary,
                    secondary.as_ref(),
                    area,
                    scale,
                    PAGE_MARGIN_SIZE,
                    !self.right_to_left,
                    pan,
                );
            } else {
                draw_single_page(ui, &mut self.texture_cache, &primary, area, scale, pan);
            }
        });
    }
}
