/// Frame Player - headless player host
use clap::{Parser, Subcommand};
use frame_player::{
    config::PlayerConfig,
    render,
    runtime::{feed_script, PlayerRuntime},
    script::{parse_script, ScriptStep},
};
use frame_transport::ScreenLayout;
use std::{path::PathBuf, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "frame-player")]
#[command(about = "Frame Player transport controls over a simulated engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the configured source and drive it with a press script
    Run {
        /// Configuration file path
        #[arg(short, long, env = "FRAME_CONFIG")]
        config: Option<PathBuf>,

        /// Comma-separated presses, e.g. "play,wait:2000,fwd,back,pause"
        #[arg(short, long, default_value = "play,wait:3000,fwd,wait:1000,back,pause")]
        script: String,
    },
    /// Project a raw engine status (JSON) and show the resulting screen
    Project {
        /// Status JSON, e.g. '{"isPlaying":true,"positionMillis":8000,"playableDurationMillis":20000}'
        status: String,

        /// Step used for the back/forward labels
        #[arg(long, default_value_t = frame_transport::DEFAULT_STEP_MILLIS)]
        step_millis: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frame_player=info,frame_transport=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, script } => {
            run(config, &script).await?;
        }
        Commands::Project {
            status,
            step_millis,
        } => {
            project_status(&status, step_millis)?;
        }
    }

    Ok(())
}

async fn run(config_path: Option<PathBuf>, script: &str) -> anyhow::Result<()> {
    let config = PlayerConfig::load(config_path.as_deref())?;
    let mut steps = parse_script(script)?;

    let layout = ScreenLayout::for_viewport(config.viewport);
    tracing::info!(
        "Video surface {:.0}x{:.0}, controls {:.0} wide",
        layout.video_width,
        layout.video_height,
        layout.controls_width
    );

    let (runtime, handles) = PlayerRuntime::new(&config)?;
    let controller = *runtime.session().controller();
    let bar_width = config.render.bar_width;

    // Let the last press show up on screen before hanging up
    steps.push(ScriptStep::Wait(Duration::from_millis(
        config.simulation.tick_ms * 2,
    )));

    let mut screen = handles.screen;
    let renderer = tokio::spawn(async move {
        while screen.changed().await.is_ok() {
            let state = *screen.borrow_and_update();
            println!("{}", render::progress_line(&state, bar_width));
            println!("{}", render::controls_line(&state, &controller));
        }
    });

    let player = tokio::spawn(runtime.run());
    feed_script(steps, handles.presses).await?;

    let session = player.await??;
    renderer.await?;

    let engine = session.engine();
    tracing::info!(fullscreen = engine.is_fullscreen(), "Final engine state");
    Ok(())
}

fn project_status(json: &str, step_millis: u64) -> frame_player::Result<()> {
    println!("{}", render::status_report(json, step_millis, 40)?);
    Ok(())
}
