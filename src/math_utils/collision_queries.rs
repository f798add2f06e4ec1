use glam::Vec2;
use crate::math_utils::CrossProduct2;
use crate::math_utils::transform::Transform;

// points closer than this to an outline count as touching it
const BOUNDARY_EPSILON: f32 = 1e-3;

pub trait SegmentDistanceQuery where Self: Copy {
    fn distance_squared_to_segment(self, segment: [Self; 2]) -> f32;
}

impl SegmentDistanceQuery for Vec2 {
    fn distance_squared_to_segment(self, [p0, p1]: [Self; 2]) -> f32 {
        let p0_p1 = p1 - p0;
        let length_squared = p0_p1.length_squared();
        if length_squared <= f32::EPSILON {
            return self.distance_squared(p0);
        }
        let t = ((self - p0).dot(p0_p1) / length_squared).clamp(0.0, 1.0);
        self.distance_squared(p0 + p0_p1 * t)
    }
}

pub trait PointInPolyQuery where Self: Copy {
    /// `poly` is a closed loop in its own local frame; `poly_transform` places
    /// it in the world. The query point is given in world space.
    fn is_in_poly(self, poly_transform: Option<Transform>, poly: &[Self]) -> bool;
}

impl PointInPolyQuery for Vec2 {
    fn is_in_poly(self, poly_transform: Option<Transform>, poly: &[Vec2]) -> bool {
        if poly.is_empty() {
            return false;
        }
        let p = match poly_transform {
            Some(transform) => transform.to_local(self),
            None => self
        };

        if make_edges(poly).any(|edge| {
            p.distance_squared_to_segment(edge) <= BOUNDARY_EPSILON * BOUNDARY_EPSILON
        }) {
            return true;
        }

        let crossing_count = make_edges(poly)
            .filter(|&[p0, p1]| (p0.y > p.y) != (p1.y > p.y))
            .filter(|&[p0, p1]| {
                // which side of the edge the point lies on, normalized by edge direction
                let side = (p1 - p0).cross2(p - p0);
                if p1.y > p0.y { side > 0.0 } else { side < 0.0 }
            })
            .count();
        crossing_count % 2 != 0
    }
}

/// Coarse hull-vs-polygon test: a hull is considered touching `poly` when any
/// of its sample points lies inside it. Edges crossing without a sample point
/// inside are not detected.
pub trait SampledPolyIntersectionQuery where Self: Copy {
    fn is_intersect(samples: &[Self], poly_transform: Option<Transform>, poly: &[Self]) -> bool;
}

impl SampledPolyIntersectionQuery for Vec2 {
    fn is_intersect(samples: &[Self], poly_transform: Option<Transform>, poly: &[Self]) -> bool {
        samples.iter().any(|sample| sample.is_in_poly(poly_transform, poly))
    }
}

fn make_edges(poly: &[Vec2]) -> impl Iterator<Item=[Vec2; 2]> + '_ {
    let edge_count = poly.len();
    (0..edge_count).map(move |ix| [poly[ix], poly[(ix + 1) % edge_count]])
}
