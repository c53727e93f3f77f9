use clap::{Parser, Subcommand};
use glam::{Mat4, Vec3};
use tilegrid_board::{Board, PlaceOutcome};
use tilegrid_input::Viewport;
use tilegrid_pick::{GroundPlane, Ray};
use tilegrid_render::{DebugTextRenderer, RenderView, Renderer};
use tilegrid_tools::BoardInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tilegrid-cli", about = "Headless tile grid demo and inspection")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run a scripted hover/place session and print the resulting frame
    Demo {
        /// Number of tiles to place
        #[arg(short, long, default_value = "5")]
        tiles: usize,
        /// Print the board summary as JSON instead of a text frame
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("tilegrid-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("board: tiles={}", Board::new().tile_count());
            println!("pick: {}", tilegrid_pick::crate_info());
            println!("input: {}", tilegrid_input::crate_info());
            println!("anim: {}", tilegrid_anim::crate_info());
            println!("render: {}", tilegrid_render::crate_info());
            println!("tools: {}", tilegrid_tools::crate_info());
        }
        Commands::Demo { tiles, json } => {
            let mut board = Board::new();
            let plane = GroundPlane::default();
            let view = RenderView::default();

            // Hover at the screen center through the real camera, the same
            // path the desktop app takes for every pointer move.
            let viewport = Viewport::new(1280, 720);
            let view_proj = Mat4::perspective_rh(
                view.fov_degrees.to_radians(),
                viewport.aspect(),
                0.1,
                1000.0,
            ) * Mat4::look_at_rh(view.eye, view.target, Vec3::Y);
            let ndc = viewport.to_ndc(640.0, 360.0);
            board.hover(plane.pick_cell(&Ray::through_ndc(view_proj, ndc)));
            tracing::info!(cell = %board.cursor().cell(), "hover at screen center");

            // Scripted placements: vertical rays over a walk of cells,
            // offset from the centers to exercise snapping.
            for i in 0..tiles {
                let x = (i % 7) as f32 + 0.3;
                let z = (i / 7) as f32 + 0.6;
                let ray = Ray::new(Vec3::new(x, 5.0, z), Vec3::NEG_Y);
                board.hover(plane.pick_cell(&ray));
                match board.place() {
                    PlaceOutcome::Placed(_) => {
                        tracing::debug!(cell = %board.cursor().cell(), "placed");
                    }
                    PlaceOutcome::Occupied => {}
                }
            }

            // A second click on the first cell demonstrates the rejection
            // diagnostic.
            if let Some(first) = board.tiles().first().map(|t| t.cell()) {
                let _ = board.place_at(first);
            }

            tilegrid_anim::advance(&mut board, 1000.0);

            if json {
                let summary = BoardInspector::summary(&board);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let renderer = DebugTextRenderer::new();
                print!("{}", renderer.render(&board, &view));
            }
        }
    }

    Ok(())
}
