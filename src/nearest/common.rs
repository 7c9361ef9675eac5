//! State shared by every built-in nearest variant.
//!
//! Argument positions 1 and 2 are common to all variants: the key holding
//! the field values and the earth radius. Variant-specific arguments start
//! at [`FIRST_VARIANT_ARG`].

use crate::arguments::Arguments;
use crate::error::{NearestError, Result};
use crate::handle::Handle;

/// Position of the values key
pub const VALUES_ARG: usize = 1;
/// Position of the earth radius
pub const RADIUS_ARG: usize = 2;
/// First position owned by a specific variant
pub const FIRST_VARIANT_ARG: usize = 3;

/// Values key and radius, resolved against a handle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericNearest {
    pub values_key: String,
    pub radius: f64,
    pub values_count: usize,
}

impl GenericNearest {
    pub fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        let values_key = args.get_name_checked(VALUES_ARG)?;
        let values_count = handle.get_array_len(values_key)?;
        let radius = args.get_double(handle, RADIUS_ARG)?;

        if !(radius.is_finite() && radius > 0.0) {
            return Err(NearestError::InvalidArgument {
                param: "radius".to_string(),
                message: format!("radius must be positive, got {}", radius),
            });
        }

        self.values_key = values_key.to_string();
        self.radius = radius;
        self.values_count = values_count;
        Ok(())
    }
}

/// Evaluate an argument as a grid dimension
pub fn dimension(handle: &Handle, args: &Arguments, index: usize) -> Result<usize> {
    let value = args.get_long(handle, index)?;
    positive(value, &param_name(args, index))
}

/// Number of points in an `a` by `b` grid
pub fn grid_points(values_key: &str, a: usize, b: usize) -> Result<usize> {
    a.checked_mul(b).ok_or_else(|| NearestError::InvalidArgument {
        param: values_key.to_string(),
        message: format!("grid of {} by {} points is too large", a, b),
    })
}

/// Number of points across all rows of a reduced grid
pub fn total_points(pl_key: &str, rows: &[usize]) -> Result<usize> {
    rows.iter()
        .try_fold(0usize, |acc, &row| acc.checked_add(row))
        .ok_or_else(|| NearestError::InvalidArgument {
            param: pl_key.to_string(),
            message: format!("{} rows hold too many points", rows.len()),
        })
}

/// Check that `expected` grid points match the number of values
pub fn check_point_count(values_key: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(NearestError::WrongGridSize {
            key: values_key.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn positive(value: i64, param: &str) -> Result<usize> {
    if value <= 0 {
        return Err(NearestError::InvalidArgument {
            param: param.to_string(),
            message: format!("must be positive, got {}", value),
        });
    }
    usize::try_from(value).map_err(|_| NearestError::InvalidArgument {
        param: param.to_string(),
        message: format!("out of range: {}", value),
    })
}

/// Convert a list of per-row counts into sizes
pub fn row_counts(key: &str, counts: &[i64]) -> Result<Vec<usize>> {
    counts
        .iter()
        .map(|&c| {
            usize::try_from(c).map_err(|_| NearestError::InvalidArgument {
                param: key.to_string(),
                message: format!("row count must not be negative, got {}", c),
            })
        })
        .collect()
}

fn param_name(args: &Arguments, index: usize) -> String {
    args.get_name(index)
        .map(str::to_string)
        .unwrap_or_else(|| format!("argument {}", index))
}
