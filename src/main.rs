use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use crate::pipeline::{Pipeline, PipelineConfig};

mod error;
mod images;
mod pipeline;
mod render;
mod scrape;
mod tracer;
mod viewer;

#[cfg(all(test, unix))]
mod testutil;

/// Runs the loop tracer and renders the DAG it writes as an image
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Loop iteration count, passed to the tracer unchanged
    iterations: String,

    /// Optimization level (O1, O2, O3, Os, Oz), passed to the tracer unchanged
    opt_level: String,

    /// Trace-producing executable
    #[clap(long, default_value = "./for_loop_tracker")]
    tracer: PathBuf,

    /// Directory that receives the rendered image
    #[clap(long, default_value = "images")]
    image_dir: PathBuf,

    /// Graph layout tool
    #[clap(long, default_value = "dot")]
    renderer: PathBuf,

    /// Output format handed to the layout tool's `-T` flag
    #[clap(short, long, default_value = "png")]
    format: String,

    /// Command used to open the result (defaults to the platform opener)
    #[clap(long)]
    viewer: Option<PathBuf>,

    /// Don't open the rendered image
    #[clap(long)]
    no_open: bool,

    /// Leave `.dot` files in the image directory
    #[clap(long)]
    keep_intermediates: bool,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        let default_viewer = PipelineConfig::default().viewer;
        Self {
            tracer: args.tracer,
            image_dir: args.image_dir,
            renderer: args.renderer,
            format: args.format,
            viewer: if args.no_open {
                None
            } else {
                args.viewer.or(default_viewer)
            },
            keep_intermediates: args.keep_intermediates,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let iterations = args.iterations.clone();
    let opt_level = args.opt_level.clone();

    let pipeline = Pipeline::from(PipelineConfig::from(args));
    let image = pipeline.run(&iterations, &opt_level)?;
    info!("DAG image written to {:?}", image);
    Ok(())
}
