use track_align::heading::yaw_degrees_of;
use track_align::prelude::*;

fn main() {
    // Demo stub: a straight east-bound run whose middle waypoint faces west.
    let waypoints: Vec<Waypoint> = [(0.0, 0.0), (10.0, std::f64::consts::PI), (20.0, 0.0)]
        .iter()
        .map(|&(x, yaw)| Waypoint {
            rotation: quaternion_of(yaw).unwrap_or_default(),
            translation: Vector3::new(x, 0.0, 0.0),
            scale_3d: Vector3::new(1.0, 1.0, 1.0),
        })
        .collect();

    match normalize_all(&waypoints) {
        Ok(fixed) => {
            for (i, (before, after)) in waypoints.iter().zip(fixed.iter()).enumerate() {
                println!(
                    "#{} yaw {:.1}° -> {:.1}°",
                    i + 1,
                    yaw_degrees_of(&before.rotation),
                    yaw_degrees_of(&after.rotation)
                );
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
