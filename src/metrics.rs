//! Distance strategies for a downstream hierarchical-clustering stage.
//!
//! Cluster-to-cluster linkage is expressed through [`ClusterMetric`], which
//! is implemented by the [`SingleLink`] and [`CompleteLink`] markers and by
//! any closure of the matching shape. Arc candidates (triplets of point
//! indices) are compared through [`TripletMetric`].

use nalgebra::{DMatrix, Point3, Unit, Vector3};
use serde::Serialize;

/// Indices of the points belonging to one cluster.
pub type Cluster = [usize];

/// Distance between two clusters given the pairwise point distances `d`.
pub trait ClusterMetric {
    fn distance(&self, lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32;
}

impl<F> ClusterMetric for F
where
    F: Fn(&Cluster, &Cluster, &DMatrix<f32>) -> f32,
{
    fn distance(&self, lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32 {
        self(lhs, rhs, d)
    }
}

/// Nearest-pair linkage.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleLink;

/// Farthest-pair linkage.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompleteLink;

impl ClusterMetric for SingleLink {
    fn distance(&self, lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32 {
        single_link(lhs, rhs, d)
    }
}

impl ClusterMetric for CompleteLink {
    fn distance(&self, lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32 {
        complete_link(lhs, rhs, d)
    }
}

/// Minimum pairwise distance between members of `lhs` and `rhs`.
///
/// Returns `+∞` when either cluster is empty.
pub fn single_link(lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32 {
    pairwise(lhs, rhs, d).fold(f32::INFINITY, f32::min)
}

/// Maximum pairwise distance between members of `lhs` and `rhs`.
///
/// Returns `0` when either cluster is empty.
pub fn complete_link(lhs: &Cluster, rhs: &Cluster, d: &DMatrix<f32>) -> f32 {
    pairwise(lhs, rhs, d).fold(0.0, f32::max)
}

fn pairwise<'a>(
    lhs: &'a Cluster,
    rhs: &'a Cluster,
    d: &'a DMatrix<f32>,
) -> impl Iterator<Item = f32> + 'a {
    lhs.iter()
        .flat_map(move |&i| rhs.iter().map(move |&j| d[(i, j)]))
}

/// Three ordered point indices forming a short arc candidate, with the
/// derived center and unit direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Triplet {
    pub indices: [usize; 3],
    pub center: Point3<f32>,
    pub direction: Unit<Vector3<f32>>,
}

impl Triplet {
    /// Builds a triplet from point indices into `points`.
    ///
    /// The direction runs from the first to the last point. Returns `None`
    /// when an index is out of range or the first and last points coincide.
    pub fn from_points(indices: [usize; 3], points: &[Point3<f32>]) -> Option<Self> {
        let [a, b, c] = indices.map(|i| points.get(i).copied());
        let (a, b, c) = (a?, b?, c?);
        let center = Point3::from((a.coords + b.coords + c.coords) / 3.0);
        let direction = Unit::try_new(c - a, 1e-6)?;
        Some(Self {
            indices,
            center,
            direction,
        })
    }
}

/// Distance between two arc candidates.
///
/// Implementations must be symmetric and give zero for a triplet compared
/// with itself.
pub trait TripletMetric {
    fn distance(&self, lhs: &Triplet, rhs: &Triplet) -> f32;
}

impl<F> TripletMetric for F
where
    F: Fn(&Triplet, &Triplet) -> f32,
{
    fn distance(&self, lhs: &Triplet, rhs: &Triplet) -> f32 {
        self(lhs, rhs)
    }
}

/// Triplet distance combining how far each center lies from the other
/// triplet's line and how much the two directions disagree.
///
/// `d = max(perp(lhs → rhs), perp(rhs → lhs)) + angle_scale · (1 - |cos φ|)`
/// where `perp(a → b)` is the distance of `a.center` from the line through
/// `b.center` along `b.direction`, and `φ` is the angle between directions.
/// Direction sign is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralTripletMetric {
    pub angle_scale: f32,
}

impl Default for SpiralTripletMetric {
    fn default() -> Self {
        Self { angle_scale: 10.0 }
    }
}

impl SpiralTripletMetric {
    fn perpendicular(point: &Point3<f32>, line: &Triplet) -> f32 {
        let offset = point - line.center;
        let along = offset.dot(&*line.direction);
        (offset - line.direction.into_inner() * along).norm()
    }
}

impl TripletMetric for SpiralTripletMetric {
    fn distance(&self, lhs: &Triplet, rhs: &Triplet) -> f32 {
        let perp = Self::perpendicular(&lhs.center, rhs).max(Self::perpendicular(&rhs.center, lhs));
        let cos = lhs.direction.dot(&*rhs.direction).abs().min(1.0);
        perp + self.angle_scale * (1.0 - cos)
    }
}
