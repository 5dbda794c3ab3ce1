mod common;

use common::tracks::{oval, oval_tangent, waypoint};
use std::f64::consts::PI;
use track_align::angle::angular_distance;
use track_align::io::{parse_track_str, track_to_json};
use track_align::picking::{pick_waypoint, DEFAULT_PICK_RADIUS};
use track_align::reference::DEFAULT_WORLD_CORNERS;
use track_align::track::normalize_all_with_report;
use track_align::{normalize_all, project, solve, yaw_of, CanvasSize, MapTransform, Vector2};

#[test]
fn backwards_waypoint_on_straight_run_is_turned_around() {
    let _ = env_logger::builder().is_test(true).try_init();
    let track = [
        waypoint(0.0, 0.0, 0.0),
        waypoint(10.0, 0.0, PI),
        waypoint(20.0, 0.0, 0.0),
    ];
    let fixed = normalize_all(&track).expect("finite rotations");
    assert!(yaw_of(&fixed[1].rotation).abs() < 1e-9);
}

#[test]
fn unit_square_maps_center_to_canvas_center() {
    let src = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];
    let dst = [
        Vector2::new(0.0, 0.0),
        Vector2::new(100.0, 0.0),
        Vector2::new(100.0, 100.0),
        Vector2::new(0.0, 100.0),
    ];
    let h = solve(&src, &dst).expect("square correspondences are regular");
    let p = project(&h, &Vector2::new(0.5, 0.5));
    assert!((p.x - 50.0).abs() < 1e-9, "{p:?}");
    assert!((p.y - 50.0).abs() < 1e-9, "{p:?}");
}

#[test]
fn oval_loop_is_corrected_and_stable() {
    let _ = env_logger::builder().is_test(true).try_init();
    let n = 24;
    let track = oval(n, 300.0, 150.0);
    let (once, report) = normalize_all_with_report(&track).expect("finite rotations");
    assert_eq!(report.flipped_indices(), (0..n).step_by(3).collect::<Vec<_>>());
    for (i, wp) in once.iter().enumerate() {
        let err = angular_distance(yaw_of(&wp.rotation), oval_tangent(i, n, 300.0, 150.0));
        assert!(err < 0.11, "waypoint {i} off tangent by {err}");
    }

    let (twice, second) = normalize_all_with_report(&once).expect("finite rotations");
    assert_eq!(second.flipped_count(), 0);
    for (a, b) in once.iter().zip(twice.iter()) {
        assert!((yaw_of(&a.rotation) - yaw_of(&b.rotation)).abs() < 1e-9);
    }
}

#[test]
fn loaded_track_is_projected_and_picked_on_resized_canvas() {
    let text = r#"{
        "routeName": "Corners",
        "waypoints": [
            { "rotation": { "x": 0, "y": 0, "z": 0, "w": 1 },
              "translation": { "x": -1277708.2965454245, "y": -317662.26182056009, "z": 0 },
              "scale3D": { "x": 1, "y": 1, "z": 1 } },
            { "rotation": { "x": 0, "y": 0, "z": 1, "w": 0 },
              "translation": { "x": 917131.48374835111, "y": -315379.30946399376, "z": 0 },
              "scale3D": { "x": 1, "y": 1, "z": 1 } },
            { "rotation": { "x": 0, "y": 0, "z": 0, "w": 1 },
              "translation": { "x": 917957.0844781138, "y": 1877914.3470450507, "z": 0 },
              "scale3D": { "x": 1, "y": 1, "z": 1 } }
        ]
    }"#;
    let track = parse_track_str(text).expect("valid track");

    let mut transform = MapTransform::default();
    transform.resize(CanvasSize {
        width: 400.0,
        height: 400.0,
        device_pixel_ratio: 2.0,
    });
    assert!(!transform.is_degraded());

    let tr = transform.to_canvas(&DEFAULT_WORLD_CORNERS[1]);
    assert!((tr.x - 800.0).abs() < 1e-3 && tr.y.abs() < 1e-3, "{tr:?}");

    let picked = pick_waypoint(
        transform.matrix(),
        &track.waypoints,
        &Vector2::new(797.0, 4.0),
        DEFAULT_PICK_RADIUS,
    );
    assert_eq!(picked, Some(1));

    let fixed = normalize_all(&track.waypoints).expect("finite rotations");
    let mut exported = track.clone();
    exported.waypoints = fixed;
    let json = track_to_json(&exported).expect("serializable");
    let reloaded = parse_track_str(&json).expect("export re-parses");
    assert_eq!(reloaded, exported);
}
