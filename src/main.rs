use serde::Serialize;
use std::env;
use std::path::Path;
use track_align::config::{self, AlignConfig};
use track_align::heading::yaw_degrees_of;
use track_align::io::{load_track, write_json_file, write_track_file};
use track_align::picking::project_waypoints;
use track_align::track::{check_yaw_only, normalize_all_with_report, NormalizationReport};
use track_align::{MapTransform, TrackData, Vector2};

#[derive(Serialize)]
struct AlignReport<'a> {
    route_name: Option<&'a str>,
    waypoints: usize,
    degraded_transform: bool,
    homography: [[f64; 3]; 3],
    canvas_points: Vec<Option<Vector2>>,
    normalization: Option<&'a NormalizationReport>,
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "usage: track_align <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let mut track = load_track(&config.input)?;
    let canvas = config.map.resolve_canvas()?;
    let transform = MapTransform::new(config.map.reference(), canvas);

    if config.normalize.strict {
        check_yaw_only(&track.waypoints)
            .map_err(|e| format!("{}: {e}", config.input.display()))?;
    }

    let normalization = if config.normalize.enabled {
        let (waypoints, report) =
            normalize_all_with_report(&track.waypoints).map_err(|e| e.to_string())?;
        track.waypoints = waypoints;
        Some(report)
    } else {
        None
    };

    let canvas_points = project_waypoints(transform.matrix(), &track.waypoints);
    let h = transform.matrix();
    let report = AlignReport {
        route_name: track.route_name.as_deref(),
        waypoints: track.waypoints.len(),
        degraded_transform: transform.is_degraded(),
        homography: [
            [h[(0, 0)], h[(0, 1)], h[(0, 2)]],
            [h[(1, 0)], h[(1, 1)], h[(1, 2)]],
            [h[(2, 0)], h[(2, 1)], h[(2, 2)]],
        ],
        canvas_points,
        normalization: normalization.as_ref(),
    };

    if config.output.format.includes_text() {
        print_text_summary(&config, &track, &report);
    }
    if config.output.format.includes_json() {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
        println!("{json}");
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        eprintln!("Report written to {}", path.display());
    }
    if let Some(path) = &config.output.track_json {
        write_track_file(path, &track)?;
        eprintln!("Track written to {}", path.display());
    }
    Ok(())
}

fn print_text_summary(config: &AlignConfig, track: &TrackData, report: &AlignReport<'_>) {
    println!("Track summary");
    println!("  input: {}", config.input.display());
    println!("  route: {}", report.route_name.unwrap_or("(unnamed)"));
    println!("  waypoints: {}", report.waypoints);
    let h = &report.homography;
    println!(
        "  homography{}:\n    [{:.6e} {:.6e} {:.4}]\n    [{:.6e} {:.6e} {:.4}]\n    [{:.6e} {:.6e} {:.4}]",
        if report.degraded_transform {
            " (identity fallback)"
        } else {
            ""
        },
        h[0][0],
        h[0][1],
        h[0][2],
        h[1][0],
        h[1][1],
        h[1][2],
        h[2][0],
        h[2][1],
        h[2][2]
    );

    match report.normalization {
        Some(norm) => println!(
            "  orientation: flipped {} of {} {:?}",
            norm.flipped_count(),
            report.waypoints,
            norm.flipped_indices()
        ),
        None => println!("  orientation: correction disabled"),
    }

    println!("\nWaypoints");
    for (i, (wp, pt)) in track
        .waypoints
        .iter()
        .zip(report.canvas_points.iter())
        .enumerate()
    {
        let canvas = match pt {
            Some(p) => format!("({:.1}, {:.1})", p.x, p.y),
            None => "off-canvas".to_string(),
        };
        println!(
            "  #{:<4} yaw={:>8.2}°  world=({:.1}, {:.1}, {:.1})  canvas={}",
            i + 1,
            yaw_degrees_of(&wp.rotation),
            wp.translation.x,
            wp.translation.y,
            wp.translation.z,
            canvas
        );
    }
}
