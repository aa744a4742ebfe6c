use geogeometry::{
    Config, Coordinate, SphericalModel, bbox_contains, circle_to_polygon, distance, get_bbox,
    polygon_contains, round_coordinate, translate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see detailed logs)
    env_logger::init();

    println!("=== geogeometry - Getting Started ===\n");

    // === DISTANCE ===
    println!("1. Great-circle distance");
    println!("------------------------");

    // Coordinates are (lat, lon)
    let berlin = Coordinate::new(52.530564, 13.394964);
    let d = distance(berlin.lat(), berlin.lon(), 52.530564, 13.410821);
    println!("   Berlin, 0.0159 degrees east: {:.2} m\n", d);

    // === TRANSLATE ===
    println!("2. Translate by meters");
    println!("----------------------");

    let moved = translate(berlin.lat(), berlin.lon(), 1000.0, 3000.0);
    println!(
        "   1 km north, 3 km east: {:?}",
        round_coordinate(&moved, 6)
    );
    println!(
        "   distance back to origin: {:.2} m\n",
        distance(berlin.lat(), berlin.lon(), moved.lat(), moved.lon())
    );

    // === GEOFENCE ===
    println!("3. Circular geofence");
    println!("--------------------");

    let fence = circle_to_polygon(100, berlin.lat(), berlin.lon(), 5_000.0)?;
    let bbox = get_bbox(&fence)?;
    println!(
        "   bbox: south {:.4}, north {:.4}, west {:.4}, east {:.4}",
        bbox.south, bbox.north, bbox.west, bbox.east
    );

    for (name, lat, lon) in [
        ("Alexanderplatz", 52.521918, 13.413215),
        ("Potsdam", 52.390569, 13.064473),
    ] {
        let inside = bbox_contains(&bbox, lat, lon) && polygon_contains(lat, lon, &fence);
        println!("   {} inside fence: {}", name, inside);
    }
    println!();

    // === CUSTOM SPHERE ===
    println!("4. Custom sphere from configuration");
    println!("-----------------------------------");

    let config = Config::from_json(r#"{"earth_radius_meters": 6378137.0}"#)?;
    let model = SphericalModel::from_config(&config)?;
    println!(
        "   same distance on the equatorial radius: {:.2} m",
        model.distance(berlin.lat(), berlin.lon(), 52.530564, 13.410821)
    );

    Ok(())
}
