use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use clap::{Parser, ValueEnum};
use plotters::prelude::*;
use skyview::config::load_or_default;
use skyview::export::{orbit, writer_for_path};
use skyview::math::units::rad_to_deg;
use skyview::orbits::scene::CAMERA_SMOOTHING;
use skyview::orbits::{FocusTarget, OrbitSystem, SceneFrame, camera_step, orbit_path};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Sun/Earth/Moon positions for an instant, with optional CSV and PNG output"
)]
struct Cli {
    /// Instant as RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    at: Option<DateTime<Utc>>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the frame as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write sampled orbit outlines as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Render a top-down PNG of the scene
    #[arg(long)]
    png: Option<PathBuf>,
    #[arg(long, default_value_t = 800)]
    size: u32,
    /// Body the camera follows
    #[arg(long, value_enum, default_value_t = Focus::Sun)]
    focus: Focus,
    /// Camera frames to simulate, starting from the Sun overview position
    #[arg(long, default_value_t = 0)]
    camera_steps: usize,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Focus {
    Sun,
    Earth,
}

impl From<Focus> for FocusTarget {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::Sun => FocusTarget::Sun,
            Focus::Earth => FocusTarget::Earth,
        }
    }
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|err| format!("expected an RFC 3339 timestamp: {err}"))
}

fn main() -> anyhow::Result<()> {
    skyview::init_logging();
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_ref())?;
    let system = skyview::orbit_system(&config.orbits)?;
    let instant = cli.at.unwrap_or_else(Utc::now);
    let frame = SceneFrame::at(instant, &system);

    let focus = FocusTarget::from(cli.focus);
    let mut camera = FocusTarget::Sun.offset();
    for _ in 0..cli.camera_steps {
        camera = camera_step(camera, &frame, focus, CAMERA_SMOOTHING);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        println!(
            "instant         {}",
            instant.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        for (label, angle) in [
            ("earth angle   ", frame.angles.earth),
            ("moon angle    ", frame.angles.moon),
            ("earth rotation", frame.angles.earth_rotation),
        ] {
            println!("{label}  {angle:.6} rad ({:.2}°)", rad_to_deg(angle));
        }
        println!("earth position  {}", fmt_vec(frame.earth_position));
        println!("moon position   {}", fmt_vec(frame.moon_position));
        if cli.camera_steps > 0 {
            println!("camera          {}", fmt_vec(camera));
        }
    }

    if let Some(path) = &cli.csv {
        let samples = orbit::samples(
            &system,
            config.orbits.earth_path_segments,
            config.orbits.moon_path_segments,
        );
        orbit::write_csv(writer_for_path(path)?, &samples)?;
        log::info!("{} orbit samples written to {}", samples.len(), path.display());
    }

    if let Some(path) = &cli.png {
        render_png(path, cli.size, &system, &frame, &config.orbits)?;
        log::info!("orbit view rendered to {}", path.display());
    }
    Ok(())
}

fn fmt_vec(v: [f64; 3]) -> String {
    format!("[{:.4}, {:.4}, {:.4}]", v[0], v[1], v[2])
}

fn render_png(
    path: &Path,
    size: u32,
    system: &OrbitSystem,
    frame: &SceneFrame,
    orbits: &skyview::config::OrbitsConfig,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let extent = system.earth.apoapsis() + system.moon.apoapsis() + 1.0;
    let root = BitMapBackend::new(path, (size, size)).into_drawing_area();
    root.fill(&BLACK)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    let earth_path: Vec<(f64, f64)> = orbit_path(&system.earth, orbits.earth_path_segments)
        .into_iter()
        .map(|p| (p.x, p.z))
        .collect();
    chart.draw_series(std::iter::once(PathElement::new(
        earth_path,
        ShapeStyle::from(&WHITE.mix(0.3)).stroke_width(1),
    )))?;

    let (ex, ez) = (frame.earth_position[0], frame.earth_position[2]);
    let moon_path: Vec<(f64, f64)> = orbit_path(&system.moon, orbits.moon_path_segments)
        .into_iter()
        .map(|p| (ex + p.x, ez + p.z))
        .collect();
    chart.draw_series(std::iter::once(PathElement::new(
        moon_path,
        ShapeStyle::from(&WHITE.mix(0.2)).stroke_width(1),
    )))?;

    let sun = RGBColor(255, 204, 51);
    let earth = RGBColor(51, 119, 255);
    let moon = RGBColor(200, 200, 200);
    chart.draw_series([
        Circle::new((0.0, 0.0), 14, sun.filled()),
        Circle::new((ex, ez), 7, earth.filled()),
        Circle::new((frame.moon_position[0], frame.moon_position[2]), 3, moon.filled()),
    ])?;

    root.present()?;
    Ok(())
}
