// Voronoi cells derived from the Delaunay triangulation
//
// The cell of a site is the polygon through the circumcenters of the triangles
// incident to it, ordered by polar angle around the site.

use log::debug;

use crate::config::GeometryConfig;
use crate::geometries::{point, Point, Polygon};
use crate::mesh::triangulation::Triangulation;

/// Minimum incident triangles (and distinct circumcenters) for a bounded cell
const MIN_CELL_VERTICES: usize = 3;

/// The region of the plane closer to `site` than to any other input point
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    pub site: Point,
    /// Counter-clockwise cell outline, `None` when the region is unbounded
    pub polygon: Option<Polygon>,
}

impl VoronoiCell {
    pub fn is_bounded(&self) -> bool {
        self.polygon.is_some()
    }
}

/// One cell per distinct input point, in input order
pub fn voronoi(points: &[Point]) -> Vec<VoronoiCell> {
    voronoi_with(points, &GeometryConfig::default())
}

pub fn voronoi_with(points: &[Point], config: &GeometryConfig) -> Vec<VoronoiCell> {
    let triangulation = Triangulation::with_config(points, config);
    cells_from_triangulation(&triangulation, config)
}

/// Build cells from an existing triangulation
pub fn cells_from_triangulation(triangulation: &Triangulation, config: &GeometryConfig) -> Vec<VoronoiCell> {
    let cells: Vec<VoronoiCell> = triangulation
        .sites
        .iter()
        .map(|&site| VoronoiCell {
            site,
            polygon: cell_polygon(triangulation, site, config),
        })
        .collect();

    debug!(
        "voronoi: {} of {} cells bounded",
        cells.iter().filter(|c| c.is_bounded()).count(),
        cells.len()
    );
    cells
}

fn cell_polygon(triangulation: &Triangulation, site: Point, config: &GeometryConfig) -> Option<Polygon> {
    let incident = triangulation.incident_triangles(site, config);
    if incident.len() < MIN_CELL_VERTICES {
        return None;
    }

    let mut centers: Vec<Point> = Vec::with_capacity(incident.len());
    for center in incident
        .iter()
        .filter_map(|t| t.circumcircle(config))
        .map(|circle| circle.center)
    {
        if !centers.iter().any(|&c| point::points_equal(c, center, config)) {
            centers.push(center);
        }
    }
    if centers.len() < MIN_CELL_VERTICES {
        return None;
    }

    centers.sort_by(|&p, &q| {
        point::angle_between(site, p).total_cmp(&point::angle_between(site, q))
    });
    Some(Polygon::new(centers))
}
