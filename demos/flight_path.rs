use chrono::TimeZone;
use chrono_tz::America::Chicago;

use geonav::geodesy::{arc_points, distance_meters, initial_bearing, intermediate_point};
use geonav::solar::solar_position;
use geonav::types::{GeoCoordinate, TimeContext};

fn main() {
    // Chicago O'Hare to London Heathrow.
    let ohare = GeoCoordinate::new(-87.9048, 41.9786);
    let heathrow = GeoCoordinate::new(-0.4619, 51.4775);

    let distance_km = distance_meters(ohare, heathrow) / 1000.0;
    let bearing = initial_bearing(ohare, heathrow);
    let midpoint = intermediate_point(ohare, heathrow, 0.5);
    let path = arc_points(ohare, heathrow, 10_000.0);

    let departure = Chicago.with_ymd_and_hms(2026, 3, 22, 13, 30, 0).unwrap();
    let sun = solar_position(&TimeContext::from_datetime(&departure), ohare);

    println!("=== Great-Circle Flight Path Example ===");
    println!("From: O'Hare {}", ohare);
    println!("To:   Heathrow {}", heathrow);
    println!();
    println!("--- Route ---");
    println!("Distance: {:.1} km", distance_km);
    println!("Initial bearing: {:.1}° (0°=N, 90°=E)", bearing);
    println!("Midpoint: {}", midpoint);
    println!("Path samples at 10 km spacing: {}", path.len());
    println!();
    println!("--- Sun at departure ({}) ---", departure);
    println!("Elevation: {:.1}° above horizon", sun.elevation);
    println!("Azimuth: {:.1}° (0°=N, 90°=E, 180°=S)", sun.azimuth);
}
