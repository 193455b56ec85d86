// Incremental Delaunay triangulation (Bowyer–Watson)
//
// Points are inserted one at a time into a working mesh seeded with a
// super-triangle. Each insertion carves out the triangles whose circumcircle
// strictly contains the new point and re-fans the resulting cavity from it.
// Output depends on insertion order but is fully deterministic for a given order.

use std::collections::{HashMap, HashSet};
use std::f64::consts::{FRAC_PI_2, TAU};

use log::debug;
use nalgebra::Vector2;

use crate::config::GeometryConfig;
use crate::geometries::{point, BoundingBox2D, Circle, Point, Triangle};

// ======================== CONSTANTS ========================
const SUPER_TRIANGLE_SCALE: f64 = 10.0; // Bounding-circle radius multiplier for the seed triangle

/// Delaunay triangulation of a point set
#[derive(Debug, Clone)]
pub struct Triangulation {
    /// Distinct input points in insertion order
    pub sites: Vec<Point>,
    /// Counter-clockwise triangles over `sites`
    pub triangles: Vec<Triangle>,
}

/// A mesh triangle with its circumcircle computed once
struct WorkingTriangle {
    triangle: Triangle,
    circumcircle: Option<Circle>,
}

impl WorkingTriangle {
    fn new(triangle: Triangle, config: &GeometryConfig) -> Self {
        let circumcircle = triangle.circumcircle(config);
        Self {
            triangle,
            circumcircle,
        }
    }

    /// Strict containment: cocircular points do not invalidate the triangle
    fn circumcircle_contains(&self, p: Point, config: &GeometryConfig) -> bool {
        self.circumcircle.is_some_and(|circle| {
            config.lt(point::distance_squared(p, circle.center), circle.radius * circle.radius)
        })
    }
}

impl Triangulation {
    pub fn new(points: &[Point]) -> Self {
        Self::with_config(points, &GeometryConfig::default())
    }

    /// Triangulate `points` in the given order
    ///
    /// Duplicates (same hash key) are dropped, keeping the first occurrence. Fewer
    /// than three distinct points give an empty triangle list; colinear input gives
    /// an empty or degenerate one.
    pub fn with_config(points: &[Point], config: &GeometryConfig) -> Self {
        let sites = unique_sites(points, config);
        if sites.len() < 3 {
            debug!("triangulation skipped: {} distinct sites", sites.len());
            return Self {
                sites,
                triangles: Vec::new(),
            };
        }

        let seed = super_triangle(&sites, config);
        let mut mesh = vec![WorkingTriangle::new(seed, config)];

        for &site in &sites {
            insert_site(&mut mesh, site, config);
        }

        let triangles: Vec<Triangle> = mesh
            .into_iter()
            .map(|working| working.triangle)
            .filter(|t| {
                !(seed.has_vertex(t.a, config) || seed.has_vertex(t.b, config) || seed.has_vertex(t.c, config))
            })
            .collect();

        debug!(
            "triangulated {} sites ({} dropped as duplicates) into {} triangles",
            sites.len(),
            points.len() - sites.len(),
            triangles.len()
        );
        Self { sites, triangles }
    }

    /// Triangles having `site` as a vertex
    ///
    /// Vertices are matched by hash key, the same identity used to deduplicate
    /// sites, so two distinct sites never claim each other's triangles.
    pub fn incident_triangles(&self, site: Point, config: &GeometryConfig) -> Vec<&Triangle> {
        let key = point::point_hash(site, config);
        self.triangles
            .iter()
            .filter(|t| {
                [t.a, t.b, t.c]
                    .iter()
                    .any(|&v| point::point_hash(v, config) == key)
            })
            .collect()
    }

    /// Distinct undirected edges, in order of first appearance
    pub fn edges(&self, config: &GeometryConfig) -> Vec<(Point, Point)> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();
        for t in &self.triangles {
            for (p, q) in [(t.a, t.b), (t.b, t.c), (t.c, t.a)] {
                if seen.insert(edge_key(p, q, config)) {
                    edges.push((p, q));
                }
            }
        }
        edges
    }
}

/// Delaunay triangles over `points`, see [`Triangulation::with_config`]
pub fn triangulate(points: &[Point]) -> Vec<Triangle> {
    Triangulation::new(points).triangles
}

fn unique_sites(points: &[Point], config: &GeometryConfig) -> Vec<Point> {
    let mut seen = HashSet::new();
    points
        .iter()
        .copied()
        .filter(|&p| seen.insert(point::point_hash(p, config)))
        .collect()
}

/// Equilateral triangle circumscribing the enlarged bounding circle of `sites`
fn super_triangle(sites: &[Point], config: &GeometryConfig) -> Triangle {
    let bounds = BoundingBox2D::from_points(sites.iter().copied()).unwrap_or_default();
    let center = bounds.center();
    let radius = bounds.circumradius().max(config.epsilon.sqrt()) * SUPER_TRIANGLE_SCALE;

    // An equilateral triangle's circumradius is twice its inradius
    let corner = |k: f64| {
        let angle = FRAC_PI_2 + k * TAU / 3.0;
        center + Vector2::new(angle.cos(), angle.sin()) * (2.0 * radius)
    };
    Triangle::new(corner(0.0), corner(1.0), corner(2.0))
}

fn insert_site(mesh: &mut Vec<WorkingTriangle>, site: Point, config: &GeometryConfig) {
    let mut cavity_edges: Vec<(Point, Point)> = Vec::new();
    mesh.retain(|working| {
        if working.circumcircle_contains(site, config) {
            let t = working.triangle;
            cavity_edges.extend([(t.a, t.b), (t.b, t.c), (t.c, t.a)]);
            false
        } else {
            true
        }
    });

    // Interior edges were contributed by two removed triangles and cancel out
    let mut counts: HashMap<String, usize> = HashMap::new();
    for &(p, q) in &cavity_edges {
        *counts.entry(edge_key(p, q, config)).or_insert(0) += 1;
    }

    for (p, q) in cavity_edges {
        if counts[&edge_key(p, q, config)] == 1 {
            mesh.push(WorkingTriangle::new(counter_clockwise(p, q, site), config));
        }
    }
}

fn counter_clockwise(a: Point, b: Point, c: Point) -> Triangle {
    if point::orientation(a, b, c) < 0.0 {
        Triangle::new(a, c, b)
    } else {
        Triangle::new(a, b, c)
    }
}

fn edge_key(p: Point, q: Point, config: &GeometryConfig) -> String {
    let mut ends = [point::point_hash(p, config), point::point_hash(q, config)];
    ends.sort();
    ends.join(";")
}
