//! trellis-demo - lay out placeholder elements in a grid and print the frames.
//!
//! ```text
//! RUST_LOG=trellis=debug trellis-demo --config grid.json --count 7 --width 320 --height 200
//! ```

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trellis::{Axis, Element, GridConfig, Placeholder, Rect, Size};

#[derive(Debug, Parser)]
#[command(name = "trellis-demo", about = "Lay out placeholder elements in a grid")]
struct Args {
    /// JSON grid configuration. Defaults to 3 auto-sized columns.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Number of placeholder elements.
    #[arg(long, default_value_t = 7)]
    count: u64,

    /// Preferred size of every placeholder.
    #[arg(long, default_value_t = 40.0)]
    item_width: f32,

    #[arg(long, default_value_t = 20.0)]
    item_height: f32,

    /// Grid bounds.
    #[arg(long, default_value_t = 320.0)]
    width: f32,

    #[arg(long, default_value_t = 200.0)]
    height: f32,

    /// Print the slot snapshot as JSON instead of frames.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GridConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => GridConfig {
            axis: Axis::Horizontal,
            columns: 3,
            auto_size: true,
            ..GridConfig::default()
        },
    };

    let mut grid = config.build::<Placeholder>()?;
    let views: Vec<Placeholder> = (0..args.count)
        .map(|id| Placeholder::new(id, Size::new(args.item_width, args.item_height)))
        .collect();

    grid.set_attach_handler(|view: &Placeholder| tracing::debug!("attach {:?}", view.id()));
    grid.set_views(views.clone());
    grid.set_bounds(Rect::new(0.0, 0.0, args.width, args.height));
    grid.layout_if_needed();

    tracing::info!("grid {}x{} for {} views", grid.rows(), grid.columns(), views.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid.snapshot())?);
        return Ok(());
    }

    let fits = grid.size_that_fits(Size::new(args.width, f32::INFINITY));
    println!("fits {} x {}", fits.width, fits.height);
    for view in &views {
        let frame = view.frame();
        println!(
            "{:>4}  x={:<8} y={:<8} w={:<8} h={}",
            view.id().0,
            frame.x,
            frame.y,
            frame.width,
            frame.height
        );
    }
    Ok(())
}
