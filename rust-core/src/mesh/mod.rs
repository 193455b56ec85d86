// Mesh module: Delaunay triangulation and its Voronoi dual

// ======================== MODULE DECLARATIONS ========================
pub mod triangulation;
pub mod voronoi;


// ======================== TRIANGULATION ========================
pub use triangulation::{
    triangulate,   // fn(&[Point]) -> Vec<Triangle> - Bowyer–Watson over the input order
    Triangulation, // struct - distinct sites + counter-clockwise triangles
};
// Triangulation impl methods:
//   new(points) / with_config(points, config) -> Self    - build the triangulation
//   incident_triangles(&self, site, config) -> Vec<&Triangle> - triangles touching a site
//   edges(&self, config) -> Vec<(Point, Point)>           - distinct undirected edges

// ======================== VORONOI ========================
pub use voronoi::{
    cells_from_triangulation, // fn(&Triangulation, &GeometryConfig) -> Vec<VoronoiCell>
    voronoi,                  // fn(&[Point]) -> Vec<VoronoiCell>
    voronoi_with,             // fn(&[Point], &GeometryConfig) -> Vec<VoronoiCell>
    VoronoiCell,              // struct - site + optional bounded polygon
};
