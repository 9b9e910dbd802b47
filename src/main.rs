use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use scene_sketches::cli::{Cli, Command};
use scene_sketches::config::SketchConfig;
use scene_sketches::core::FrameLoop;
use scene_sketches::report::RunReport;
use scene_sketches::scenes::{self, SceneKind};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            for kind in SceneKind::ALL {
                println!("{:<14} {}", kind.name(), kind.description());
            }
        }
        Command::DefaultConfig => {
            println!("{}", serde_json::to_string_pretty(&SketchConfig::default())?);
        }
        Command::Run {
            scene,
            frames,
            config,
            hz,
            report,
        } => {
            let mut config = match config {
                Some(path) => SketchConfig::load(&path)?,
                None => SketchConfig::default(),
            };
            if let Some(hz) = hz {
                config.frame.hz = hz;
                config.validate()?;
            }

            let mut sketch = scenes::build(scene, &config).with_context(|| format!("Failed to build scene '{scene}'"))?;
            let started_at = chrono::Utc::now();
            let stats = FrameLoop::new(config.frame.hz, config.frame.max_steps)
                .with_log_every(config.frame.log_every)
                .run(sketch.as_mut(), frames);
            info!("'{}' finished {} frames ({:.1}s simulated)", scene, stats.frames, stats.simulated_seconds);

            let run_report = RunReport::new(sketch.as_ref(), stats, started_at);
            match report {
                Some(path) => run_report.write(&path)?,
                None => println!("{}", serde_json::to_string_pretty(&run_report)?),
            }
        }
    }

    Ok(())
}
