// Map port and marker placement
use crate::domain::geo::{Coordinate, MarkerHandle, MarkerSpec};
use rand::Rng;

pub trait MapView: Send + Sync {
    fn add_marker(&self, marker: MarkerSpec) -> MarkerHandle;

    /// Unknown handles are ignored.
    fn remove_marker(&self, handle: MarkerHandle);
}

/// Places markers for items that carry no coordinates of their own.
pub trait Jitter: Send + Sync {
    fn scatter(&self, reference: Coordinate) -> Coordinate;
}

/// Offsets each axis by a uniform value in `[0, spread)`.
#[derive(Debug, Clone)]
pub struct UniformJitter {
    spread: f64,
}

impl UniformJitter {
    pub fn new(spread: f64) -> Self {
        Self { spread }
    }
}

impl Jitter for UniformJitter {
    fn scatter(&self, reference: Coordinate) -> Coordinate {
        if self.spread.is_nan() || self.spread <= 0.0 {
            return reference;
        }

        let mut rng = rand::thread_rng();
        reference.offset(
            rng.gen_range(0.0..self.spread),
            rng.gen_range(0.0..self.spread),
        )
    }
}
