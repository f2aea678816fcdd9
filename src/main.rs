use clap::Parser;
use colored::*;

mod args;
mod avatar;
mod camera;
mod classifier;
#[cfg(test)]
mod classifier_tests;
mod config;
mod detector;
mod font;
mod landmarks;
mod output;
mod overlay;
mod text;

use args::Args;
use avatar::AvatarSet;
use camera::CameraSource;
use classifier::PoseClassifier;
use config::{parse_hex, AppConfig, DetectionConfig};
use detector::{LandmarkDetector, NullDetector, SimulatedDetector};
use landmarks::LandmarkSnapshot;
use output::WindowOutput;
use text::Language;

fn create_detector(name: &str, detection: &DetectionConfig) -> Box<dyn LandmarkDetector> {
    match name {
        "null" => Box::new(NullDetector),
        _ => Box::new(SimulatedDetector::new(detection)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.list {
        let cameras = nokhwa::query(nokhwa::utils::ApiBackend::Auto)?;
        println!("Available Cameras:");
        println!("{:<5} | {:<30} | {:<10}", "Index", "Name", "Misc");
        println!("{}", "-".repeat(60));
        for cam in cameras {
            println!("{:<5} | {:<30} | {:?}", cam.index(), cam.human_name(), cam.misc());
        }
        return Ok(());
    }

    // 0. Load Config
    let config = AppConfig::load()?;

    // 1. Setup Camera
    let index = args.cam_index.unwrap_or(config.camera.device_id) as usize;
    let mut camera = CameraSource::new(index, config.camera.width, config.camera.height)?;
    println!("Opened camera: {}", camera.name());

    // 2. Setup Detection + Classification
    let mut detector = create_detector(
        args.detector.as_deref().unwrap_or("simulated"),
        &config.detection,
    );
    println!("Active Detector: {}", detector.name());

    let mut classifier = PoseClassifier::new(config.thresholds.clone());

    // 3. Setup Output
    let width = camera.width();
    let height = camera.height();
    let mut window = WindowOutput::new(
        &config.ui.window_title,
        width as usize,
        height as usize,
        config.frame_interval(),
    )?;
    println!("Window created successfully.");

    let avatars = AvatarSet::load(&config.assets, config.ui.avatar_width);

    // Feature toggles (loaded from config, overridable from the CLI)
    let mut language = args
        .lang
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or(config.defaults.default_language);
    let mut mirror_mode = args.mirror.unwrap_or(config.camera.flip_horizontal);
    let mut show_landmarks = config.defaults.show_landmarks && !args.no_landmarks;
    let mut show_debug_info = config.defaults.show_debug_info;

    let panel_color = parse_hex(&config.ui.panel_color_hex);
    let pose_color = parse_hex(&config.ui.pose_color_hex);
    let landmark_color = parse_hex(&config.ui.landmark_color_hex);
    let text_scale = config.ui.panel_text_scale;

    println!("Starting frame loop...");
    println!("Controls: [1] Landmarks [2] Debug Info [5] Mirror [L] Language [Esc] Quit");

    // 4. Loop
    let mut current_pose = classifier::PoseLabel::Default;

    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        // --- INPUT HANDLING ---
        for key in window.keys_pressed() {
            match key {
                minifb::Key::Key1 => show_landmarks = !show_landmarks,
                minifb::Key::Key2 => show_debug_info = !show_debug_info,
                minifb::Key::Key5 => mirror_mode = !mirror_mode,
                minifb::Key::L => {
                    language = language.next();
                    println!("Language changed to: {}", language.display_name());
                }
                _ => {}
            }
        }

        // --- CAPTURE ---
        let mut frame = if let Ok(cam_frame) = camera.capture() {
            cam_frame
        } else {
            continue;
        };
        if mirror_mode {
            image::imageops::flip_horizontal_in_place(&mut frame);
        }

        // --- DETECT + CLASSIFY ---
        // Detection always runs, even with the overlay hidden; a
        // failed detector degrades to an empty snapshot, which the
        // classifier maps to Default with zeroed metrics.
        let snapshot = match detector.process(&frame) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("{}", format!("Detection failed: {}", e).red());
                LandmarkSnapshot::empty()
            }
        };
        let (label, metrics) = classifier.classify(&snapshot);
        if label != current_pose {
            current_pose = label;
            println!("Pose changed: {}", label.key());
        }

        // --- DRAWING ---
        let mut display_buffer = frame.to_vec();
        let (w, h) = (width as usize, height as usize);

        if show_landmarks {
            draw_landmarks(&mut display_buffer, w, h, &snapshot, landmark_color);
        }

        avatars.draw(&mut display_buffer, w, h, label);

        if show_debug_info {
            let lines = overlay::debug_lines(&metrics, label, language);
            if let Some((pose_line, metric_lines)) = lines.split_last() {
                let line_h = font::line_height(text_scale) + 2;
                let panel_h = metric_lines.len() * line_h + 16;
                output::dim_rect(&mut display_buffer, w, h, 4, 4, 260, panel_h);

                let mut y = 12;
                for line in metric_lines {
                    font::draw_text_line(&mut display_buffer, w, h, 10, y, line, panel_color, text_scale);
                    y += line_h;
                }

                // Pose line sits at the bottom, like a status bar.
                let py = h.saturating_sub(line_h + 8);
                let pw = font::measure_text_width(pose_line, text_scale) + 12;
                output::dim_rect(&mut display_buffer, w, h, 4, py.saturating_sub(6), pw, line_h + 10);
                font::draw_text_line(&mut display_buffer, w, h, 10, py, pose_line, pose_color, text_scale);
            }
        }

        // --- WINDOW UPDATE ---
        window.update(&display_buffer)?;
    }

    Ok(())
}

/// Draws the lips-only face subset and the full hand skeletons, per
/// the overlay contract. Normalized coordinates scale to pixels here.
fn draw_landmarks(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    snapshot: &LandmarkSnapshot,
    color: (u8, u8, u8),
) {
    let to_px = |p: landmarks::LandmarkPoint| -> (i32, i32) {
        ((p.x * width as f32) as i32, (p.y * height as f32) as i32)
    };

    for face in &snapshot.faces {
        for &(a, b) in overlay::LIPS_CONNECTIONS.iter() {
            if let (Some(pa), Some(pb)) = (face.point(a), face.point(b)) {
                output::draw_line(buffer, width, height, to_px(pa), to_px(pb), color);
            }
        }
    }

    for hand in &snapshot.hands {
        for &(a, b) in overlay::HAND_CONNECTIONS.iter() {
            if let (Some(pa), Some(pb)) = (hand.point(a), hand.point(b)) {
                let (xa, ya) = to_px(pa);
                let (xb, yb) = to_px(pb);
                output::draw_line(buffer, width, height, (xa, ya), (xb, yb), color);
                output::draw_dot(buffer, width, height, xa, ya, 1, color);
                output::draw_dot(buffer, width, height, xb, yb, 1, color);
            }
        }
    }
}
