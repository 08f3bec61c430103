//! Page drawing: fit math, texture upload, spreads and animations.

use crate::prelude::*;

/// Scale that fits an image inside `area` without ever upscaling it.
/// This is the baseline a viewport scale of `1.0` refers to.
pub fn base_fit_scale(area: Rect, dims: (u32, u32)) -> f32 {
    let (width, height) = dims;
    if width == 0 || height == 0 || area.width() <= 0.0 || area.height() <= 0.0 {
        return 1.0;
    }
    (area.width() / width as f32)
        .min(area.height() / height as f32)
        .min(1.0)
}

/// Transform scale that makes the image fill the area's width, used by the
/// double-click fit toggle.
pub fn fit_width_ratio(area: Rect, dims: (u32, u32)) -> f32 {
    let base = base_fit_scale(area, dims);
    let (width, _) = dims;
    if width == 0 || base <= 0.0 {
        return 1.0;
    }
    (area.width() / width as f32) / base
}

/// Which animation frame is due, given per-frame delays in milliseconds.
fn current_frame(delays: &[u16], started: Instant) -> usize {
    let total: u64 = delays.iter().map(|&d| d as u64).sum();
    if total == 0 {
        return 0;
    }
    let mut t = started.elapsed().as_millis() as u64 % total;
    for (i, &delay) in delays.iter().enumerate() {
        let delay = delay as u64;
        if t < delay {
            return i;
        }
        t -= delay;
    }
    delays.len() - 1
}

pub fn draw_spinner(ui: &mut Ui, area: Rect) {
    let size = 48.0;
    let rect = Rect::from_center_size(area.center(), Vec2::splat(size));
    ui.put(rect, egui::Spinner::new().size(size).color(Color32::WHITE));
}

/// Texture for the page as it should look right now, uploading on a cache
/// miss. Animations pick their due frame and keep the repaints coming.
fn page_texture(ui: &Ui, textures: &mut TextureCache, page: &LoadedPage) -> Option<TextureHandle> {
    match &page.image {
        PageImage::Static(image) => {
            if let Some(texture) = textures.page(page.index) {
                return Some(texture);
            }
            let rgba = image.to_rgba8();
            let (width, height) = rgba.dimensions();
            let color = ColorImage::from_rgba_unmultiplied(
                [width as usize, height as usize],
                rgba.as_raw(),
            );
            let texture =
                ui.ctx()
                    .load_texture(format!("page{}", page.index), color, Default::default());
            textures.set_page(page.index, texture.clone());
            Some(texture)
        }
        PageImage::Animated {
            frames,
            delays,
            started,
        } => {
            let frame = current_frame(delays, *started);
            ui.ctx().request_repaint();
            if let Some(texture) = textures.frame(page.index, frame) {
                return Some(texture);
            }
            let color = frames.get(frame)?.clone();
            let texture = ui.ctx().load_texture(
                format!("page{}_f{}", page.index, frame),
                color,
                Default::default(),
            );
            textures.set_frame(page.index, frame, texture.clone());
            Some(texture)
        }
    }
}

fn draw_page_at_rect(ui: &mut Ui, textures: &mut TextureCache, page: &LoadedPage, rect: Rect) {
    match page_texture(ui, textures, page) {
        Some(texture) => {
            egui::Image::from_texture(&texture).paint_at(ui, rect);
        }
        None => draw_spinner(ui, rect),
    }
}

pub fn draw_single_page(
    ui: &mut Ui,
    textures: &mut TextureCache,
    page: &LoadedPage,
    area: Rect,
    scale: f32,
    pan: Vec2,
) {
    let (width, height) = page.image.dimensions();
    let size = Vec2::new(width as f32, height as f32) * scale;
    let rect = Rect::from_center_size(area.center() + pan, size);
    draw_page_at_rect(ui, textures, page, rect);
}

/// Draw a spread centred in `area`. `left_first` is reading order: false
/// puts the primary page on the right, as in right-to-left books.
pub fn draw_dual_page(
    ui: &mut Ui,
    textures: &mut TextureCache,
    primary: &LoadedPage,
    secondary: Option<&LoadedPage>,
    area: Rect,
    scale: f32,
    margin: f32,
    left_first: bool,
    pan: Vec2,
) {
    let Some(secondary) = secondary else {
        draw_single_page(ui, textures, primary, area, scale, pan);
        return;
    };

    let size_of = |page: &LoadedPage| {
        let (width, height) = page.image.dimensions();
        Vec2::new(width as f32, height as f32) * scale
    };
    let primary_size = size_of(primary);
    let secondary_size = size_of(secondary);

    let (left, left_size, right, right_size) = if left_first {
        (primary, primary_size, secondary, secondary_size)
    } else {
        (secondary, secondary_size, primary, primary_size)
    };

    let total_width = left_size.x + right_size.x + margin;
    let center = area.center() + pan;
    let left_start = center.x - total_width / 2.0;

    let left_rect = Rect::from_min_size(
        egui::pos2(left_start, center.y - left_size.y / 2.0),
        left_size,
    );
    let right_rect = Rect::from_min_size(
        egui::pos2(
            left_start + left_size.x + margin,
            center.y - right_size.y / 2.0,
        ),
        right_size,
    );

    draw_page_at_rect(ui, textures, left, left_rect);
    draw_page_at_rect(ui, textures, right, right_rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn area(width: f32, height: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(width, height))
    }

    #[test]
    fn fitting_never_upscales() {
        assert_eq!(base_fit_scale(area(1000.0, 1000.0), (100, 100)), 1.0);
    }

    #[test]
    fn fitting_respects_the_limiting_axis() {
        assert_eq!(base_fit_scale(area(100.0, 200.0), (200, 200)), 0.5);
        assert_eq!(base_fit_scale(area(200.0, 100.0), (200, 200)), 0.5);
    }

    #[test]
    fn degenerate_sizes_fall_back_to_one() {
        assert_eq!(base_fit_scale(area(100.0, 100.0), (0, 50)), 1.0);
        assert_eq!(base_fit_scale(area(0.0, 100.0), (50, 50)), 1.0);
        assert_eq!(fit_width_ratio(area(100.0, 100.0), (0, 50)), 1.0);
    }

    #[test]
    fn width_fit_expands_a_tall_page() {
        // Base fit is height-limited at 0.5; filling the width needs 2.0,
        // so the relative ratio is 4.
        let ratio = fit_width_ratio(area(800.0, 600.0), (400, 1200));
        assert!((ratio - 4.0).abs() < 1e-6);
    }

    #[test]
    fn frame_selection_walks_the_delays() {
        let delays = [100u16, 50, 100];
        let at = |ms: u64| {
            current_frame(&delays, Instant::now() - Duration::from_millis(ms))
        };
        assert_eq!(at(0), 0);
        assert_eq!(at(120), 1);
        assert_eq!(at(200), 2);
        // Wraps around the 250 ms cycle.
        assert_eq!(at(260), 0);
    }

    #[test]
    fn all_zero_delays_do_not_divide_by_zero() {
        assert_eq!(current_frame(&[0, 0, 0], Instant::now()), 0);
        assert_eq!(current_frame(&[], Instant::now()), 0);
    }
}
