use crate::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// A simple polygon given as a ring of vertices.
///
/// The last vertex is implicitly connected back to the first, so the ring
/// must not repeat its first vertex at the end. Conversions from `geo`
/// types drop that explicit closing vertex.
///
/// # Examples
///
/// ```
/// use geogeometry_types::{Coordinate, Polygon};
///
/// let triangle = Polygon::new(vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(0.0, 1.0),
/// ]);
/// assert_eq!(triangle.edges().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.vertices.iter()
    }

    /// Edges of the ring as `(previous, current)` pairs, starting with the
    /// closing edge from the last vertex to the first.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.vertices)
    }

    pub fn into_vertices(self) -> Vec<Coordinate> {
        self.vertices
    }
}

/// Iterator over the cyclic edges of a vertex ring.
///
/// Yields `(vertices[i - 1], vertices[i])` for every `i`, wrapping the first
/// index around to the last vertex.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    vertices: &'a [Coordinate],
    index: usize,
}

impl<'a> Edges<'a> {
    pub fn new(vertices: &'a [Coordinate]) -> Self {
        Self { vertices, index: 0 }
    }
}

impl<'a> Iterator for Edges<'a> {
    type Item = (&'a Coordinate, &'a Coordinate);

    fn next(&mut self) -> Option<Self::Item> {
        let vertices = self.vertices;
        let current = vertices.get(self.index)?;
        let previous = if self.index == 0 {
            vertices.last()?
        } else {
            &vertices[self.index - 1]
        };
        self.index += 1;
        Some((previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertices.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl AsRef<[Coordinate]> for Polygon {
    fn as_ref(&self) -> &[Coordinate] {
        &self.vertices
    }
}

impl From<Vec<Coordinate>> for Polygon {
    fn from(vertices: Vec<Coordinate>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Coordinate> for Polygon {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Only the exterior ring is kept; holes are not supported.
impl From<geo::Polygon<f64>> for Polygon {
    fn from(polygon: geo::Polygon<f64>) -> Self {
        let mut vertices: Vec<Coordinate> = polygon
            .exterior()
            .coords()
            .map(|coord| Coordinate::from(*coord))
            .collect();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self::new(vertices)
    }
}

impl From<Polygon> for geo::Polygon<f64> {
    fn from(polygon: Polygon) -> Self {
        let coords: Vec<geo::Coord<f64>> =
            polygon.vertices.into_iter().map(geo::Coord::from).collect();
        // LineString closing happens in Polygon::new
        geo::Polygon::new(geo::LineString::from(coords), vec![])
    }
}
