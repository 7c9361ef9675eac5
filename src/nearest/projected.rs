//! Nearest lookup on projected grids (Lambert conformal, polar
//! stereographic).
//!
//! Both projections share the same argument layout,
//! `(values, radius, Nx, Ny)`, and are registered as separate types.

use super::common::{self, GenericNearest, FIRST_VARIANT_ARG};
use super::{NearestStrategy, NearestSummary};
use crate::arguments::Arguments;
use crate::error::Result;
use crate::handle::Handle;

/// Strategy for grids defined on a map projection
#[derive(Debug, Default)]
pub struct ProjectedNearest {
    generic: GenericNearest,
    nx: usize,
    ny: usize,
    points: usize,
}

crate::nearest_class!(pub LAMBERT_CONFORMAL, "lambert_conformal", ProjectedNearest);
crate::nearest_class!(pub POLAR_STEREOGRAPHIC, "polar_stereographic", ProjectedNearest);

impl NearestStrategy for ProjectedNearest {
    fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        self.generic.init(handle, args)?;

        let nx = common::dimension(handle, args, FIRST_VARIANT_ARG)?;
        let ny = common::dimension(handle, args, FIRST_VARIANT_ARG + 1)?;
        let points = common::grid_points(&self.generic.values_key, nx, ny)?;
        common::check_point_count(&self.generic.values_key, points, self.generic.values_count)?;

        self.nx = nx;
        self.ny = ny;
        self.points = points;
        Ok(())
    }

    fn summary(&self) -> NearestSummary {
        NearestSummary {
            values_key: self.generic.values_key.clone(),
            radius: self.generic.radius,
            points: self.points,
            shape: vec![self.ny, self.nx],
        }
    }
}
