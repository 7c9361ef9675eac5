//! grib-nearest - inspect the nearest strategy a message declares
//!
//! This is the main entry point for the grib-nearest command.

use tracing::{error, info};

use grib_nearest::message::load_message;
use grib_nearest::{
    init_tracing, log_timed_operation, registered_types, Config, Context, KeyValue, NearestError,
    Result,
};

fn main() -> Result<()> {
    // Load configuration
    let (config, args) = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting grib-nearest v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    if args.list {
        for type_name in registered_types() {
            println!("{}", type_name);
        }
        return Ok(());
    }

    let message_path = args.message.ok_or_else(|| NearestError::Config {
        message: "No message file given".to_string(),
    })?;

    info!("Loading message: {:?}", message_path);

    let context = Context::new_shared();
    let mut handle = log_timed_operation("load_message", || {
        load_message(&message_path, context.clone())
    })
    .map_err(|e| {
        error!("Failed to load message: {}", e);
        e
    })?;

    if !handle.contains("radius") {
        handle.set("radius", KeyValue::Double(config.nearest.radius));
    }

    let declared = handle
        .nearest_arguments()
        .cloned()
        .ok_or_else(|| NearestError::NotFound {
            key: "nearest".to_string(),
        })?;
    let nearest_args = match &config.nearest.type_override {
        Some(type_name) => declared.with_type(type_name),
        None => declared,
    };

    let nearest = log_timed_operation("create_nearest", || {
        grib_nearest::create(&handle, &nearest_args)
    })?;

    let output = serde_json::json!({
        "type": nearest.type_name(),
        "size": nearest.class().size(),
        "summary": nearest.summary(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
