/// Example walking through the collision matrix, intersection queries and meshing
///
/// Run with `RUST_LOG=debug` to see the triangulation log lines.
use game_geometry::geometries::{
    collide, collide_offset, intersections, point, Circle, Collider, PointPair, Polygon, Rectangle,
    Shape,
};
use game_geometry::mesh::voronoi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Shapes and the collision matrix ===\n");

    // Example 1: edge-sharing rectangles do not collide, overlapping ones do
    let wall = Shape::Rectangle(Rectangle::new(0.0, 0.0, 10.0, 10.0));
    let neighbor = Shape::Rectangle(Rectangle::new(10.0, 0.0, 10.0, 10.0));
    println!("1. Rectangles sharing an edge collide: {}", collide(&wall, &neighbor));
    println!(
        "   Shifted one unit left they collide: {}\n",
        collide_offset(&wall, &neighbor, point::point(0.0, 0.0), point::point(-1.0, 0.0))
    );

    // Example 2: circles touch at exactly one point
    let left = Shape::Circle(Circle::new(point::point(0.0, 0.0), 5.0));
    let right = Shape::Circle(Circle::new(point::point(10.0, 0.0), 5.0));
    println!("2. Tangent circles collide: {}\n", collide(&left, &right));

    // Example 3: a ray cast through a scene
    let scene = vec![
        wall.clone(),
        Shape::Polygon(Polygon::regular(point::point(25.0, 5.0), 3.0, 6)),
        Shape::Pair(PointPair::segment(point::point(40.0, 0.0), point::point(40.0, 10.0))),
    ];
    let ray = PointPair::ray(point::point(-5.0, 5.0), point::point(0.0, 5.0));
    println!("3. Ray from (-5, 5) heading +x hits:");
    for hit in intersections(&ray, &scene) {
        println!("   ({:.3}, {:.3})", hit.x, hit.y);
    }
    println!();

    // Example 4: colliders carry a position and cached world bounds
    let mut player = Collider::new(Shape::Circle(Circle::new(point::point(0.0, 0.0), 1.0)));
    let crate_box = Collider::at(Shape::Rectangle(Rectangle::new(0.0, 0.0, 2.0, 2.0)), point::point(5.0, 0.0));
    println!("4. Player at origin collides with crate: {}", player.collides_with(&crate_box));
    println!(
        "   Would collide one step later: {}",
        player.collides_with_at(&crate_box, point::point(4.5, 1.0))
    );
    player.recompute_bounds(point::point(4.5, 1.0));
    println!("   Bounds after moving: {:?}\n", player.bounds());

    // Example 5: Voronoi cells over a small grid
    let mut sites = Vec::new();
    for j in 0..4 {
        for i in 0..4 {
            sites.push(point::point(i as f64, j as f64));
        }
    }
    let cells = voronoi(&sites);
    println!("5. Voronoi over a 4x4 grid:");
    for cell in cells.iter().filter(|c| c.is_bounded()) {
        let polygon = cell.polygon.as_ref().ok_or("bounded cell without polygon")?;
        println!(
            "   site ({}, {}) -> {} vertices",
            cell.site.x,
            cell.site.y,
            polygon.vertices.len()
        );
    }

    Ok(())
}
