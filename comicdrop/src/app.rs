//! Application state and the frame loop.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use eframe::CreationContext;

use crate::prelude::*;

/// Messages from the extraction worker to the UI thread.
pub enum LoadEvent {
    Progress(u8, String),
    Finished(Result<ImageSequence, AppError>),
}

pub struct ComicDropApp {
    pub settings: Settings,
    pub session: Option<ReaderSession>,
    pub archive_path: Option<PathBuf>,

    pub page_cache: SharedPageCache,
    pub pending_decodes: PageSet,
    pub failed_decodes: PageSet,
    pub texture_cache: TextureCache,

    pub wheel: WheelBuffer,
    pub status: StatusLine,
    pub right_to_left: bool,

    pub goto_field: String,
    pub on_goto_page: bool,
    pub on_open_comic: bool,

    pending_open: Option<PathBuf>,
    load_rx: Option<Receiver<LoadEvent>>,
    extracting: Option<(u8, String)>,
}

impl ComicDropApp {
    pub fn new(_cc: &CreationContext<'_>, path: Option<PathBuf>, settings: Settings) -> Self {
        let mut app = Self::with_settings(settings);
        app.pending_open = path;
        app
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            page_cache: new_page_cache(settings.cache_size),
            pending_decodes: new_page_set(),
            failed_decodes: new_page_set(),
            texture_cache: TextureCache::new(),
            wheel: WheelBuffer::new(),
            status: StatusLine::new(),
            right_to_left: settings.right_to_left,
            goto_field: String::new(),
            on_goto_page: false,
            on_open_comic: false,
            session: None,
            archive_path: None,
            pending_open: None,
            load_rx: None,
            extracting: None,
            settings,
        }
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        self.session.as_ref().map(|s| s.navigator().page_info())
    }

    /// Run a navigation op on the session; when it moves, the textures of
    /// the old spread are dropped and failed pages get one fresh decode
    /// attempt.
    pub fn nav(&mut self, op: impl FnOnce(&mut ReaderSession) -> bool) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let moved = op(session);
        if moved {
            self.texture_cache.clear();
            self.failed_decodes.lock().unwrap().clear();
        }
        moved
    }

    /// Flip spread mode on the open session and remember the choice for the
    /// next archive.
    pub fn toggle_spread(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let spread = !session.navigator().spread_mode();
            session.set_spread_mode(spread);
            self.settings.spread_mode = spread;
            self.texture_cache.clear();
            self.failed_decodes.lock().unwrap().clear();
        }
    }

    /// Replace whatever is open with the archive at `path`, extracting on a
    /// worker so the UI keeps painting progress.
    pub fn start_extraction(&mut self, path: PathBuf, ctx: &Context) {
        info!("opening archive {path:?}");
        let (tx, rx): (Sender<LoadEvent>, Receiver<LoadEvent>) = channel();
        self.load_rx = Some(rx);
        self.extracting = Some((0, "Reading archive...".to_string()));
        self.session = None;
        self.texture_cache.clear();
        self.page_cache = new_page_cache(self.settings.cache_size);
        self.pending_decodes = new_page_set();
        self.failed_decodes = new_page_set();
        self.archive_path = Some(path.clone());

        let ctx = ctx.clone();
        tokio::task::spawn_blocking(move || {
            let result = comic_archive::extract(&path, |percent, message| {
                let _ = tx.send(LoadEvent::Progress(percent, message.to_string()));
                ctx.request_repaint();
            })
            .map_err(AppError::from);
            let _ = tx.send(LoadEvent::Finished(result));
            ctx.request_repaint();
        });
    }

    fn poll_load_events(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };
        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(LoadEvent::Progress(percent, message)) => {
                    self.extracting = Some((percent, message));
                }
                Ok(LoadEvent::Finished(result)) => {
                    finished = true;
                    self.extracting = None;
                    match result {
                        Ok(images) => self.install_sequence(images),
                        Err(e) => {
                            self.status
                                .error(format!("Could not open archive: {e}"), None);
                        }
                    }
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = true;
                    self.extracting = None;
                    break;
                }
            }
        }
        if !finished {
            self.load_rx = Some(rx);
        }
    }

    fn install_sequence(&mut self, images: ImageSequence) {
        let count = images.len();
        self.session = Some(ReaderSession::new(
            Arc::new(images),
            self.settings.spread_mode,
        ));
        self.goto_field.clear();
        self.status.info(format!("Loaded {count} pages"), None);
    }

    /// Hand every wanted page to the decode workers: queued preloads first,
    /// then whatever the current spread still misses. Cached pages and pages
    /// that already failed to decode are skipped.
    fn pump_decodes(&mut self, ctx: &Context) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let mut wanted = session.take_preloads();
        wanted.extend(session.navigator().current_spread().indices());
        let images = Arc::clone(session.images());
        for index in wanted {
            if self.page_cache.lock().unwrap().contains(&index) {
                continue;
            }
            if self.failed_decodes.lock().unwrap().contains(&index) {
                continue;
            }
            load_page_async(
                index,
                Arc::clone(&images),
                Arc::clone(&self.page_cache),
                Arc::clone(&self.pending_decodes),
                Arc::clone(&self.failed_decodes),
                ctx.clone(),
            );
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (next, prev, first, last, fullscreen) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::Home),
                i.key_pressed(egui::Key::End),
                i.key_pressed(egui::Key::F),
            )
        });
        if next {
            self.nav(|s| s.next());
        }
        if prev {
            self.nav(|s| s.prev());
        }
        if first {
            self.nav(|s| s.first());
        }
        if last {
            self.nav(|s| s.last());
        }
        if fullscreen {
            let current = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!current));
        }
    }

    /// Apply the flags the widgets raised during the previous panels.
    fn on_changes(&mut self, ctx: &Context) {
        if self.on_goto_page {
            self.on_goto_page = false;
            match self.goto_field.parse::<usize>() {
                Ok(number) => {
                    if !self.nav(|s| s.goto_page(number)) {
                        let total = self.page_info().map(|i| i.total).unwrap_or(0);
                        self.status
                            .warn(format!("No page {number} (1-{total})"), None);
                    }
                }
                Err(_) if !self.goto_field.is_empty() => {
                    self.status.warn("Invalid page number", None);
                }
                Err(_) => {}
            }
            self.goto_field.clear();
        }
        if self.on_open_comic {
            self.on_open_comic = false;
            if let Some(path) = comic_filters!().pick_file() {
                self.start_extraction(path, ctx);
            }
        }
    }

    fn update_window_title(&self, ctx: &Context) {
        let title = match self.archive_path.as_ref().and_then(|p| p.file_name()) {
            Some(name) => format!("{} - {}", NAME, name.to_string_lossy()),
            None => NAME.to_string(),
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
    }
}

impl eframe::App for ComicDropApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .next()
        });
        if let Some(path) = dropped {
            self.pending_open = Some(path);
        }
        if let Some(path) = self.pending_open.take() {
            self.start_extraction(path, ctx);
        }

        self.poll_load_events();
        self.update_window_title(ctx);
        self.pump_decodes(ctx);

        self.display_top_bar(ctx);
        self.display_bottom_bar(ctx);
        if let Some((percent, message)) = self.extracting.clone() {
            self.display_extracting(ctx, percent, &message);
        } else if self.session.is_some() {
            self.display_central_image_area(ctx);
        } else {
            self.display_main_empty(ctx);
        }

        self.handle_input(ctx);
        self.on_changes(ctx);

        self.status.clear_expired();
        if let Some(remaining) = self.status.expires_in() {
            ctx.request_repaint_after(remaining);
        }
    }
}
