use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inkfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON to a PNG (still) or GIF (animated).
    Render(RenderArgs),
    /// Render a spinning wireframe cube to a GIF.
    Cube(CubeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; the extension picks the format.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of writing when any shape reports a warning.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct CubeArgs {
    /// Edge length in pixels.
    #[arg(long)]
    side: u32,

    /// Number of frames.
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Per-frame rotation about X, Y and Z in radians.
    #[arg(long, num_args = 3, value_names = ["RX", "RY", "RZ"])]
    rotation: Option<Vec<f64>>,

    /// Stroke thickness.
    #[arg(long, default_value_t = 0)]
    thickness: u32,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Cube(args) => cmd_cube(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = inkfield::Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    let (art, warnings) = inkfield::render_scene(&scene)?.into_parts();

    if args.strict && !warnings.is_empty() {
        let listed: Vec<String> = warnings.iter().map(ToString::to_string).collect();
        anyhow::bail!(
            "scene '{}' rendered with {} warning(s): {}",
            scene.name,
            warnings.len(),
            listed.join("; ")
        );
    }

    inkfield::save_artwork(&art, &args.out)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} frame(s))", args.out.display(), art.frames());
    Ok(())
}

fn cmd_cube(args: CubeArgs) -> anyhow::Result<()> {
    let mut cube = inkfield::Cube::new(args.side, args.frames);
    if let Some(r) = args.rotation.as_deref() {
        let rotation: [f64; 3] = r
            .try_into()
            .context("rotation takes exactly three angles")?;
        cube = cube.with_rotation(rotation);
    }
    cube.style = cube.style.with_thickness(args.thickness);

    let animated = cube.render()?.value;
    let written = inkfield::save_animation(&animated, &args.out)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!("wrote {} ({written} frame(s))", args.out.display());
    Ok(())
}
