mod state;
mod ui;

use crate::config::ClientConfig;
use crate::upload::{HttpUploader, SelectedFile, UploadError, UploadResult, Uploader};
use crate::utils::clock::SystemClock;
use eframe::{egui, App};
use std::path::Path;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

pub use state::UploadController;

type UploadOutcome = Result<UploadResult, UploadError>;

pub struct CartoonUploader {
    config: ClientConfig,
    controller: UploadController,
    uploader: Arc<dyn Uploader>,
    outcome_receiver: Option<std_mpsc::Receiver<UploadOutcome>>,
    dropzone_hovered: bool,
}

impl CartoonUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Self {
        tracing::info!(server = %config.server_url(), "initializing cartoon uploader");
        let controller = UploadController::new(&config, Box::new(SystemClock));
        Self::with_parts(config, controller, Arc::new(HttpUploader::new()))
    }

    fn with_parts(
        config: ClientConfig,
        controller: UploadController,
        uploader: Arc<dyn Uploader>,
    ) -> Self {
        Self {
            config,
            controller,
            uploader,
            outcome_receiver: None,
            dropzone_hovered: false,
        }
    }

    fn select_paths<'a, I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let files = paths.into_iter().filter_map(|path| match SelectedFile::from_path(path) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                None
            }
        });
        self.controller.select_files(files);
    }

    pub fn pick_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Video", &["mp4", "mov", "avi", "mkv", "webm"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.select_paths([path.as_path()]);
        }
    }

    pub fn start_upload(&mut self, ctx: &egui::Context) {
        let Some(job) = self.controller.begin_upload() else {
            return;
        };

        let (sender, receiver) = std_mpsc::channel();
        self.outcome_receiver = Some(receiver);

        let uploader = Arc::clone(&self.uploader);
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let outcome = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(uploader.upload(&job)),
                Err(e) => Err(UploadError::Worker(format!(
                    "Failed to start upload runtime: {}",
                    e
                ))),
            };
            let _ = sender.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Applies file drops and a finished upload, if any, before the frame is drawn.
    pub fn update_state(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.dropzone_hovered = hovering;

        if !dropped.is_empty() {
            let paths: Vec<_> = dropped.into_iter().filter_map(|f| f.path).collect();
            self.select_paths(paths.iter().map(|p| p.as_path()));
        }

        if let Some(receiver) = &self.outcome_receiver {
            match receiver.try_recv() {
                Ok(outcome) => {
                    self.controller.finish_upload(outcome);
                    self.outcome_receiver = None;
                }
                Err(std_mpsc::TryRecvError::Empty) => {}
                Err(std_mpsc::TryRecvError::Disconnected) => {
                    self.controller.finish_upload(Err(UploadError::Worker(
                        "Upload worker stopped unexpectedly".to_string(),
                    )));
                    self.outcome_receiver = None;
                }
            }
        }
    }

    fn open_link(&self, url: &str) {
        let target = self.config.resolve(url);
        if let Err(e) = open::that(&target) {
            tracing::error!(url = %target, error = %e, "failed to open link");
        }
    }
}

impl App for CartoonUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
