//! Spherical harmonics.
//!
//! Spectral fields have no grid points, so the strategy only records the
//! values key and radius: `sh(values, radius)`.

use super::common::GenericNearest;
use super::{NearestStrategy, NearestSummary};
use crate::arguments::Arguments;
use crate::error::Result;
use crate::handle::Handle;

#[derive(Debug, Default)]
pub struct SpectralNearest {
    generic: GenericNearest,
}

crate::nearest_class!(pub SH, "sh", SpectralNearest);

impl NearestStrategy for SpectralNearest {
    fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        self.generic.init(handle, args)
    }

    fn summary(&self) -> NearestSummary {
        NearestSummary {
            values_key: self.generic.values_key.clone(),
            radius: self.generic.radius,
            points: 0,
            shape: Vec::new(),
        }
    }
}
