//! Test data generation utilities.
//!
//! Builds handles and argument lists that satisfy every built-in nearest
//! type, plus JSON message files on disk.

use std::path::Path;

use grib_nearest::{Arguments, Context, Handle, KeyValue};

/// Grid used by [`complete_handle`]: 4 points per row, 3 rows
pub const NI: i64 = 4;
pub const NJ: i64 = 3;

/// A handle carrying the keys every built-in type needs
pub fn complete_handle() -> Handle {
    let points = (NI * NJ) as usize;
    let mut handle = Handle::new(Context::new_shared());
    handle
        .set(
            "values",
            KeyValue::DoubleArray((0..points).map(|i| i as f64 * 0.5).collect()),
        )
        .set("radius", KeyValue::Double(6371229.0))
        .set("Ni", KeyValue::Long(NI))
        .set("Nj", KeyValue::Long(NJ))
        .set("Nx", KeyValue::Long(NI))
        .set("Ny", KeyValue::Long(NJ))
        .set("pl", KeyValue::LongArray(vec![NI; NJ as usize]))
        .set("longitudeOfFirstGridPointInDegrees", KeyValue::Double(0.0))
        .set("longitudeOfLastGridPointInDegrees", KeyValue::Double(270.0));
    handle
}

/// A valid argument list for a built-in type
pub fn builtin_arguments(type_name: &str) -> Arguments {
    let tail: &[&str] = match type_name {
        "regular" => &["Ni", "Nj"],
        "reduced" => &["Nj", "pl"],
        "latlon_reduced" => &[
            "Nj",
            "pl",
            "longitudeOfFirstGridPointInDegrees",
            "longitudeOfLastGridPointInDegrees",
        ],
        "lambert_conformal" | "polar_stereographic" => &["Nx", "Ny"],
        _ => &[],
    };

    let mut names = vec![type_name, "values", "radius"];
    names.extend_from_slice(tail);
    Arguments::from_names(names)
}

/// JSON text for a regular grid message
pub fn regular_message_json(ni: usize, nj: usize) -> String {
    let values: Vec<f64> = (0..ni * nj).map(|i| i as f64).collect();
    serde_json::json!({
        "keys": {
            "gridType": "regular_ll",
            "Ni": ni,
            "Nj": nj,
            "radius": 6371229.0,
            "values": values,
        },
        "nearest": ["regular", "values", "radius", "Ni", "Nj"],
    })
    .to_string()
}

/// Write `text` to `path`
pub fn write_message(path: &Path, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)
}
