//! Nearest lookup on reduced (quasi-regular) grids.
//!
//! Rows carry a varying number of points given by the `pl` array.
//!
//! Arguments:
//! - `reduced(values, radius, Nj, pl)`
//! - `latlon_reduced(values, radius, Nj, pl, lonFirst, lonLast)`

use super::common::{self, GenericNearest, FIRST_VARIANT_ARG};
use super::{NearestStrategy, NearestSummary};
use crate::arguments::Arguments;
use crate::error::{NearestError, Result};
use crate::handle::Handle;

/// Reduced Gaussian grid strategy
#[derive(Debug, Default)]
pub struct ReducedNearest {
    generic: GenericNearest,
    pl: Vec<usize>,
    points: usize,
}

crate::nearest_class!(pub REDUCED, "reduced", ReducedNearest);

impl ReducedNearest {
    fn init_rows(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        self.generic.init(handle, args)?;

        let nj = common::dimension(handle, args, FIRST_VARIANT_ARG)?;
        let pl_key = args.get_name_checked(FIRST_VARIANT_ARG + 1)?;
        let pl = common::row_counts(pl_key, handle.get_long_array(pl_key)?)?;

        if pl.len() != nj {
            return Err(NearestError::WrongGridSize {
                key: pl_key.to_string(),
                expected: nj,
                actual: pl.len(),
            });
        }
        let points = common::total_points(pl_key, &pl)?;
        common::check_point_count(&self.generic.values_key, points, self.generic.values_count)?;

        self.pl = pl;
        self.points = points;
        Ok(())
    }

    fn row_summary(&self) -> NearestSummary {
        NearestSummary {
            values_key: self.generic.values_key.clone(),
            radius: self.generic.radius,
            points: self.points,
            shape: self.pl.clone(),
        }
    }
}

impl NearestStrategy for ReducedNearest {
    fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        self.init_rows(handle, args)
    }

    fn summary(&self) -> NearestSummary {
        self.row_summary()
    }
}

/// Reduced latitude/longitude grid strategy, bounded in longitude
#[derive(Debug, Default)]
pub struct LatLonReducedNearest {
    rows: ReducedNearest,
    lon_first: f64,
    lon_last: f64,
}

crate::nearest_class!(pub LATLON_REDUCED, "latlon_reduced", LatLonReducedNearest);

impl LatLonReducedNearest {
    pub fn longitude_bounds(&self) -> (f64, f64) {
        (self.lon_first, self.lon_last)
    }
}

impl NearestStrategy for LatLonReducedNearest {
    fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        self.rows.init_rows(handle, args)?;
        self.lon_first = args.get_double(handle, FIRST_VARIANT_ARG + 2)?;
        self.lon_last = args.get_double(handle, FIRST_VARIANT_ARG + 3)?;
        Ok(())
    }

    fn summary(&self) -> NearestSummary {
        self.rows.row_summary()
    }
}
