//! # YULETIDE Headless Simulator
//!
//! Runs the scene at 60Hz with a scripted hand in front of a fake camera.
//!
//! ## Usage
//!
//! ```bash
//! yuletide_sim --seconds 12 --config yuletide.toml
//! RUST_LOG=debug yuletide_sim --no-gestures
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use yuletide::{Scene, YuletideConfig, YuletideResult};
use yuletide_gesture::{poses, ChannelLandmarkSource};
use yuletide_shared::{Vec2, Vec3, ViewMode};

/// 60Hz render tick.
const FRAME: Duration = Duration::from_micros(16_666);

/// 30Hz camera.
const CAMERA_FRAME: Duration = Duration::from_millis(33);

/// What the scripted hand does.
#[derive(Clone, Copy, Debug)]
enum Pose {
    /// No hand in view.
    Away,
    Open,
    Fist,
    Pinch,
    /// Two fingers up, no gesture.
    Victory,
}

/// `(start ms, pose)`, in order.
const SCRIPT: [(u64, Pose); 7] = [
    (0, Pose::Away),
    (500, Pose::Open),
    (2_000, Pose::Victory),
    (3_000, Pose::Fist),
    (4_500, Pose::Pinch),
    (8_000, Pose::Open),
    (10_000, Pose::Fist),
];

fn pose_at(elapsed: Duration) -> Pose {
    let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    SCRIPT
        .iter()
        .rev()
        .find(|(start, _)| ms >= *start)
        .map_or(Pose::Away, |&(_, pose)| pose)
}

fn frame_for(pose: Pose, wrist: Vec2) -> Vec<Vec3> {
    match pose {
        Pose::Away => Vec::new(),
        Pose::Open => poses::open_hand(wrist),
        Pose::Fist => poses::fist(wrist),
        Pose::Pinch => poses::pinch(wrist, 0.03),
        Pose::Victory => poses::victory(wrist),
    }
}

/// Feeds scripted frames until `duration` has passed or the loop hangs up.
fn run_camera(feed: Sender<Vec<Vec3>>, duration: Duration) {
    let start = Instant::now();
    while start.elapsed() < duration {
        let t = start.elapsed().as_secs_f32();
        let wrist = Vec2::new(0.5 + 0.2 * (t * 0.8).cos(), 0.75 + 0.08 * (t * 0.8).sin());
        if feed.send(frame_for(pose_at(start.elapsed()), wrist)).is_err() {
            break;
        }
        std::thread::sleep(CAMERA_FRAME);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    Registry::default().with(filter).with(fmt_layer).init();
}

struct Args {
    config: Option<PathBuf>,
    seconds: u64,
    gestures: bool,
    print_config: bool,
}

fn parse_args() -> Option<Args> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        config: None,
        seconds: 12,
        gestures: true,
        print_config: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--seconds" | "-s" => {
                if i + 1 < args.len() {
                    parsed.seconds = args[i + 1].parse().unwrap_or(12);
                    i += 1;
                }
            }
            "--no-gestures" => parsed.gestures = false,
            "--print-config" => parsed.print_config = true,
            "--help" | "-h" => {
                println!("Usage: yuletide_sim [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>     TOML config (default: built-in defaults)");
                println!("  -s, --seconds <SECS>    Run for N seconds (default: 12)");
                println!("      --no-gestures       Skip the scripted hand");
                println!("      --print-config      Print the effective config and exit");
                println!("  -h, --help              Show this help");
                return None;
            }
            other => tracing::warn!(argument = other, "ignoring unknown argument"),
        }
        i += 1;
    }
    Some(parsed)
}

fn run(args: &Args) -> YuletideResult<()> {
    let config = match &args.config {
        Some(path) => YuletideConfig::load(path)?,
        None => YuletideConfig::default(),
    };
    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut scene = Scene::new(config)?;
    let duration = Duration::from_secs(args.seconds);

    let camera = if args.gestures {
        let (feed, source) = ChannelLandmarkSource::bounded(8);
        scene.enable_gestures(move || Ok(source));
        Some(
            std::thread::Builder::new()
                .name("yuletide-camera".into())
                .spawn(move || run_camera(feed, duration))
                .map_err(yuletide_gesture::GestureError::from)?,
        )
    } else {
        // Without a hand, cycle through the modes from the "UI".
        None
    };

    let start = Instant::now();
    let mut last = start;
    let mut next_report = Duration::ZERO;
    let mut frames = 0u64;

    while start.elapsed() < duration {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        if !args.gestures {
            let mode = ViewMode::ALL[(start.elapsed().as_secs() / 4 % 3) as usize];
            scene.request_mode(mode);
        }

        let frame = scene.tick(dt);
        frames += 1;

        while let Ok(transition) = scene.transitions().try_recv() {
            println!(
                "[{:>6.2}s] {} -> {} ({})",
                transition.at.as_secs_f32(),
                transition.from,
                transition.to,
                transition.gesture
            );
        }

        if start.elapsed() >= next_report {
            let hand = scene.hand().position();
            tracing::info!(
                requested = %frame.requested,
                active = %frame.active,
                transitioning = frame.transitioning,
                foliage_hidden = frame.foliage_hidden,
                displacement = frame.max_displacement,
                hand_x = hand.x,
                hand_y = hand.y,
                yaw = frame.camera.yaw,
                "frame {frames}"
            );
            next_report += Duration::from_secs(1);
        }

        if let Some(rest) = FRAME.checked_sub(now.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    if let Some(snapshot) = scene.prediction_snapshot() {
        tracing::info!(
            frames = snapshot.frames,
            classified = snapshot.classified,
            transitions = snapshot.transitions,
            dropped = snapshot.dropped_transitions,
            "gesture loop summary"
        );
    }
    scene.disable_gestures();
    if let Some(camera) = camera {
        if camera.join().is_err() {
            tracing::warn!("scripted camera thread panicked");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let Some(args) = parse_args() else {
        return ExitCode::SUCCESS;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "yuletide_sim failed");
            ExitCode::FAILURE
        }
    }
}
