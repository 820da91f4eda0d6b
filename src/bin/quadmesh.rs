use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quadmesh", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG frame sequence.
    Sequence(SequenceArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Optional mesh config JSON; defaults derive from the canvas width.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Determinism seed.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Animation ticks to run before capturing the frame.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Pointer position in canvas space, as `x,y`.
    #[arg(long)]
    pointer: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Optional mesh config JSON; defaults derive from the canvas width.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Determinism seed.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of frames to render.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Sweep the pointer left-to-right across the canvas over the sequence.
    #[arg(long)]
    sweep: bool,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn load_config(path: Option<&Path>, width: u32) -> anyhow::Result<quadmesh::MeshConfig> {
    let Some(path) = path else {
        return Ok(quadmesh::MeshConfig::for_width(f64::from(width)));
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: quadmesh::MeshConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(config)
}

fn parse_pointer(s: &str) -> anyhow::Result<quadmesh::Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("pointer '{s}' is not of the form x,y"))?;
    Ok(quadmesh::Point::new(
        x.trim().parse().with_context(|| "parse pointer x")?,
        y.trim().parse().with_context(|| "parse pointer y")?,
    ))
}

fn make_backend() -> anyhow::Result<Box<dyn quadmesh::RenderBackend>> {
    let settings = quadmesh::RenderSettings {
        clear_rgba: Some([18, 20, 28, 255]),
    };
    Ok(quadmesh::create_backend(
        quadmesh::BackendKind::Cpu,
        &settings,
    )?)
}

fn save_png(frame: &quadmesh::FrameRGBA, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let canvas = quadmesh::Canvas {
        width: args.width,
        height: args.height,
    };
    let config = load_config(args.config.as_deref(), args.width)?;
    let mut animator = quadmesh::Animator::new(canvas, config, args.seed)?;
    let mut backend = make_backend()?;

    if let Some(pointer) = args.pointer.as_deref() {
        animator.set_pointer(parse_pointer(pointer)?);
    }
    for _ in 0..args.ticks {
        animator.advance();
    }

    let frame = animator.render(backend.as_mut())?;
    save_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let canvas = quadmesh::Canvas {
        width: args.width,
        height: args.height,
    };
    let config = load_config(args.config.as_deref(), args.width)?;
    let mut animator = quadmesh::Animator::new(canvas, config, args.seed)?;
    let mut backend = make_backend()?;

    let mut written: u64 = 0;
    for index in 0..args.frames {
        if args.sweep {
            let progress = (index + 1) as f64 / args.frames.max(1) as f64;
            animator.set_pointer(quadmesh::Point::new(
                f64::from(args.width) * progress,
                f64::from(args.height) / 2.0,
            ));
        }
        let frame = animator.tick(backend.as_mut())?;
        let path = args.out_dir.join(format!("frame_{index:04}.png"));
        save_png(&frame, &path)?;
        written += 1;
    }

    eprintln!("wrote {} frames to {}", written, args.out_dir.display());
    Ok(())
}
