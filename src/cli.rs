// cli.rs - Command-line interface configuration
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-sketches")]
#[command(about = "Headless runner for 3D demo sketches", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Drive one sketch for a number of frames and report the result
    Run {
        #[arg(value_enum)]
        scene: SceneKind,

        /// Frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u64,

        /// JSON config file; missing fields take defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the frame rate from the config
        #[arg(long)]
        hz: Option<f32>,

        /// Write the run report here instead of stdout
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List available sketches
    List,
    /// Print the default config as JSON
    DefaultConfig,
}
