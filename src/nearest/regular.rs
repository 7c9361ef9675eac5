//! Nearest lookup on regular latitude/longitude grids.
//!
//! Arguments: `regular(values, radius, Ni, Nj)`.

use super::common::{self, GenericNearest, FIRST_VARIANT_ARG};
use super::{NearestStrategy, NearestSummary};
use crate::arguments::Arguments;
use crate::error::Result;
use crate::handle::Handle;

/// Regular grid strategy
#[derive(Debug, Default)]
pub struct RegularNearest {
    generic: GenericNearest,
    ni: usize,
    nj: usize,
    points: usize,
}

crate::nearest_class!(pub REGULAR, "regular", RegularNearest);

impl NearestStrategy for RegularNearest {
    fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        self.generic.init(handle, args)?;

        let ni = common::dimension(handle, args, FIRST_VARIANT_ARG)?;
        let nj = common::dimension(handle, args, FIRST_VARIANT_ARG + 1)?;
        let points = common::grid_points(&self.generic.values_key, ni, nj)?;
        common::check_point_count(&self.generic.values_key, points, self.generic.values_count)?;

        self.ni = ni;
        self.nj = nj;
        self.points = points;
        Ok(())
    }

    fn summary(&self) -> NearestSummary {
        NearestSummary {
            values_key: self.generic.values_key.clone(),
            radius: self.generic.radius,
            points: self.points,
            shape: vec![self.nj, self.ni],
        }
    }
}
