use clap::{Parser, Subcommand};
use roomview_assets::{BuiltinMesh, SphereMesh};
use roomview_common::ViewerConfig;
use roomview_render::{Camera, DebugTextRenderer, MAX_ZOOM, Renderer, SceneLayout, TextureSlot, plan_frame};
use roomview_render_wgpu::{build_program, load_scene_images, shaders};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roomview-cli", about = "CLI tool for the room viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the texture images
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Optional JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and the effective configuration
    Info,
    /// Decode all textures, build both programs and validate the meshes
    Check,
    /// Print the draw plan for one frame
    Frame {
        /// Camera yaw in degrees
        #[arg(long, default_value = "-90", allow_hyphen_values = true)]
        yaw: f32,
        /// Camera pitch in degrees
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        pitch: f32,
        /// Vertical field of view in degrees
        #[arg(long, default_value = "45")]
        zoom: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(dir) = cli.assets {
        config.asset_dir = dir;
    }
    config.validate()?;

    match cli.command {
        Commands::Info => {
            println!("roomview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", roomview_common::crate_info());
            println!("input: {}", roomview_input::crate_info());
            println!("assets: {}", roomview_assets::crate_info());
            println!("render: {}", roomview_render::crate_info());
            println!(
                "window: \"{}\" {}x{}",
                config.window.title, config.window.width, config.window.height
            );
            println!("assets dir: {}", config.asset_dir.display());
            for slot in TextureSlot::ALL {
                println!("  {:<7} {}", slot.name(), slot.file(&config.textures));
            }
            println!(
                "sphere: radius={} sectors={} stacks={}",
                config.sphere.radius, config.sphere.sectors, config.sphere.stacks
            );
        }
        Commands::Check => check(&config)?,
        Commands::Frame { yaw, pitch, zoom } => {
            let mut camera = Camera::with_orientation(config.camera_position, yaw, pitch);
            camera.process_mouse_scroll(MAX_ZOOM - zoom);
            let frame = plan_frame(&camera, config.aspect_ratio(), 0.0, &SceneLayout::from_config(&config));
            print!("{}", DebugTextRenderer::new().render(&frame));
        }
    }

    Ok(())
}

/// Everything the viewer builds at startup except GPU uploads. Stops at the
/// first failure.
fn check(config: &ViewerConfig) -> anyhow::Result<()> {
    for mesh in BuiltinMesh::ALL {
        let data = mesh.build()?;
        tracing::info!(mesh = data.name, vertices = data.vertex_count, "mesh ok");
    }
    let sphere = SphereMesh::new(config.sphere.radius, config.sphere.sectors, config.sphere.stacks);
    tracing::info!(
        vertices = sphere.vertex_count(),
        indices = sphere.index_count(),
        "sphere ok"
    );

    for (label, vertex, fragment) in [
        ("lamp", shaders::LAMP_VERTEX, shaders::LAMP_FRAGMENT),
        ("textured", shaders::TEXTURED_VERTEX, shaders::TEXTURED_FRAGMENT),
    ] {
        build_program(label, vertex, fragment)?;
        tracing::info!(program = label, "program ok");
    }

    for (slot, image) in load_scene_images(config)? {
        tracing::info!(
            texture = slot.name(),
            file = slot.file(&config.textures),
            width = image.width,
            height = image.height,
            format = ?image.format,
            "texture ok"
        );
    }

    println!("check: OK");
    Ok(())
}
