//! Trace, locate, relocate, render, rename, open, clean up.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::images;
use crate::render::Renderer;
use crate::scrape::{display_name, DagLocation};
use crate::tracer::Tracer;
use crate::viewer::{Viewer, DEFAULT_VIEWER};

const DOT_EXTENSION: &str = "dot";

pub struct PipelineConfig {
    pub tracer: PathBuf,
    pub image_dir: PathBuf,
    pub renderer: PathBuf,
    pub format: String,
    /// `None` skips opening the result
    pub viewer: Option<PathBuf>,
    pub keep_intermediates: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tracer: PathBuf::from("./for_loop_tracker"),
            image_dir: PathBuf::from("images"),
            renderer: PathBuf::from("dot"),
            format: "png".to_string(),
            viewer: Some(PathBuf::from(DEFAULT_VIEWER)),
            keep_intermediates: false,
        }
    }
}

pub struct Pipeline {
    tracer: Tracer,
    renderer: Renderer,
    viewer: Option<Viewer>,
    image_dir: PathBuf,
    keep_intermediates: bool,
}

impl From<PipelineConfig> for Pipeline {
    fn from(cfg: PipelineConfig) -> Self {
        Self {
            tracer: Tracer::new(cfg.tracer),
            renderer: Renderer::new(cfg.renderer, cfg.format),
            viewer: cfg.viewer.map(Viewer::new),
            image_dir: cfg.image_dir,
            keep_intermediates: cfg.keep_intermediates,
        }
    }
}

impl Pipeline {
    /// Runs every step in order and returns the path of the final image.
    pub fn run(&self, iterations: &str, opt_level: &str) -> Result<PathBuf> {
        let trace = self.tracer.run(iterations, opt_level)?;
        debug!("tracer finished with {}", trace.status);
        let dag = DagLocation::from_diagnostics(&trace.diagnostics).ok_or(
            Error::MissingDagPath {
                diagnostics: trace.diagnostics,
            },
        )?;
        info!("Found DAG file {} in {:?}", dag.file_name, dag.dir);

        images::ensure_dir(&self.image_dir)?;

        info!("Moving and converting .dot file...");
        let moved = images::relocate(Path::new(&dag.path), &self.image_dir)?;
        let rendered = self.renderer.render(&moved)?;

        // Named from the relocated basename so the image stays in `image_dir`
        let base = moved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let final_path = self
            .image_dir
            .join(format!("{}.{}", display_name(&base), self.renderer.format()));
        images::rename_rendered(&rendered, &final_path)?;

        if let Some(viewer) = &self.viewer {
            info!("Opening newly created DAG file...");
            // Detached; the viewer outlives this process
            let _child = viewer.open(&final_path);
        }

        if !self.keep_intermediates {
            let n = images::remove_leftovers(&self.image_dir, DOT_EXTENSION)?;
            info!("Removed {} intermediate .{} file(s)", n, DOT_EXTENSION);
        }
        Ok(final_path)
    }
}
