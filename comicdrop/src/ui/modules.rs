//! Widget groups for the chrome bars.

use crate::prelude::*;

pub fn ui_open_button(app: &mut ComicDropApp, ui: &mut Ui) {
    if ui.button("Open...").on_hover_text("Open a comic archive").clicked() {
        app.on_open_comic = true;
    }
}

/// Digit-only page jump box with its Jump button. Submitting with Enter
/// works too.
pub fn ui_goto_page(app: &mut ComicDropApp, ui: &mut Ui) {
    let char_width =
        ui.fonts(|f| f.glyph_width(&egui::TextStyle::Monospace.resolve(ui.style()), '0'));
    let response = ui.add_sized(
        [char_width * 5.0, ui.available_height()],
        egui::TextEdit::singleline(&mut app.goto_field).hint_text("###"),
    );
    app.goto_field.retain(|c| c.is_ascii_digit());
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if ui.button("Jump").clicked() || submitted {
        app.on_goto_page = true;
    }
}

pub fn ui_zoom_slider(app: &mut ComicDropApp, ui: &mut Ui) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let mut scale = session.transform().scale();
    if ui
        .add(egui::Slider::new(&mut scale, MIN_SCALE..=MAX_SCALE))
        .changed()
    {
        session.transform_mut().set_scale(scale);
    }
    if ui.button("Reset Zoom").clicked() {
        session.transform_mut().reset();
    }
}

/// First/prev/next/last buttons around the logical page counter. Laid out
/// for a right-to-left row; the first widget added sits at the far right.
pub fn ui_page_nav(app: &mut ComicDropApp, ui: &mut Ui) {
    let Some(info) = app.page_info() else {
        return;
    };
    if ui
        .add_enabled(info.has_next, egui::Button::new("⏭"))
        .on_hover_text("Last page (End)")
        .clicked()
    {
        app.nav(|s| s.last());
    }
    if ui
        .add_enabled(info.has_next, egui::Button::new("▶"))
        .on_hover_text("Next page (→)")
        .clicked()
    {
        app.nav(|s| s.next());
    }
    ui.label(format!("{}/{}", info.current, info.total));
    if ui
        .add_enabled(info.has_prev, egui::Button::new("◀"))
        .on_hover_text("Previous page (←)")
        .clicked()
    {
        app.nav(|s| s.prev());
    }
    if ui
        .add_enabled(info.has_prev, egui::Button::new("⏮"))
        .on_hover_text("First page (Home)")
        .clicked()
    {
        app.nav(|s| s.first());
    }
}

pub fn ui_view_toggles(app: &mut ComicDropApp, ui: &mut Ui) {
    let (spread, enabled) = match app.session.as_ref() {
        Some(session) => (session.navigator().spread_mode(), true),
        None => (false, false),
    };
    let spread_clicked = ui
        .add_enabled(enabled, egui::SelectableLabel::new(spread, "Spread"))
        .on_hover_text("Show two pages side by side")
        .clicked();
    let rtl_clicked = ui
        .add_enabled(enabled, egui::SelectableLabel::new(app.right_to_left, "RTL"))
        .on_hover_text("Right-to-left reading order")
        .clicked();
    if spread_clicked {
        app.toggle_spread();
    }
    if rtl_clicked {
        app.right_to_left = !app.right_to_left;
    }
}

pub fn ui_fullscreen(ui: &mut Ui) {
    let fullscreen = ui.input(|i| i.viewport().fullscreen.unwrap_or(false));
    if ui
        .selectable_label(fullscreen, "⛶")
        .on_hover_text("Fullscreen (F)")
        .clicked()
    {
        ui.ctx()
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(!fullscreen));
    }
}

pub fn ui_status_msg(app: &ComicDropApp, ui: &mut Ui) {
    if let Some((text, level)) = app.status.current() {
        ui.colored_label(level.color(), text);
    }
}
