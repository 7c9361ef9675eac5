//! Type-name dispatch for nearest strategies.
//!
//! The built-in registration table is fixed at compile time; a duplicate type
//! name in it fails the build. Registries assembled at run time from other
//! tables reject duplicates when they are built.

use once_cell::sync::Lazy;
use tracing::debug;

use super::{projected, reduced, regular, spectral, Nearest, NearestClass};
use crate::arguments::Arguments;
use crate::error::{NearestError, Result};
use crate::handle::Handle;
use crate::logging::{log_init_failure, log_missing_type, log_unknown_type};

/// A type name bound to the class that builds it
#[derive(Debug, Clone, Copy)]
pub struct RegistrationEntry {
    pub type_name: &'static str,
    pub class: &'static NearestClass,
}

impl RegistrationEntry {
    pub const fn new(type_name: &'static str, class: &'static NearestClass) -> Self {
        Self { type_name, class }
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn has_duplicate(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

macro_rules! registration_table {
    ($table:ident { $($name:literal => $class:path),* $(,)? }) => {
        static $table: &[RegistrationEntry] = &[
            $(RegistrationEntry::new($name, &$class)),*
        ];

        const _: () = assert!(
            !has_duplicate(&[$($name),*]),
            "duplicate type name in nearest registration table"
        );
    };
}

registration_table!(BUILTIN_TABLE {
    "lambert_conformal" => projected::LAMBERT_CONFORMAL,
    "latlon_reduced" => reduced::LATLON_REDUCED,
    "polar_stereographic" => projected::POLAR_STEREOGRAPHIC,
    "reduced" => reduced::REDUCED,
    "regular" => regular::REGULAR,
    "sh" => spectral::SH,
});

static BUILTIN: Lazy<NearestRegistry> = Lazy::new(|| NearestRegistry {
    entries: BUILTIN_TABLE.to_vec(),
});

/// An immutable table of nearest types
#[derive(Debug, Clone)]
pub struct NearestRegistry {
    entries: Vec<RegistrationEntry>,
}

impl NearestRegistry {
    /// Build a registry, rejecting duplicate type names
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = RegistrationEntry>,
    {
        let mut table: Vec<RegistrationEntry> = Vec::new();
        for entry in entries {
            if table.iter().any(|e| e.type_name == entry.type_name) {
                return Err(NearestError::DuplicateType {
                    type_name: entry.type_name.to_string(),
                });
            }
            table.push(entry);
        }
        Ok(Self { entries: table })
    }

    /// The registry of built-in strategies
    pub fn builtin() -> &'static NearestRegistry {
        &BUILTIN
    }

    /// Find the first entry whose type name matches exactly
    pub fn lookup(&self, type_name: &str) -> Option<&RegistrationEntry> {
        self.entries.iter().find(|e| e.type_name == type_name)
    }

    /// Registered type names, in table order
    pub fn types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create and initialize the strategy named at argument position 0.
    ///
    /// The instance is handed to the caller only once its initializer has
    /// succeeded; otherwise it is dropped here and the failure is logged.
    pub fn create(&self, handle: &Handle, args: &Arguments) -> Result<Nearest> {
        let type_name = args.get_name_checked(0).map_err(|e| {
            log_missing_type(&e, &handle.context.id);
            e
        })?;

        let Some(entry) = self.lookup(type_name) else {
            log_unknown_type(type_name, &handle.context.id);
            return Err(NearestError::UnknownType {
                type_name: type_name.to_string(),
            });
        };

        let mut nearest = entry.class.instantiate();
        match nearest.init(handle, args) {
            Ok(()) => {
                debug!(
                    type_name = entry.type_name,
                    size = entry.class.size(),
                    context_id = %handle.context.id,
                    "Nearest instantiated"
                );
                Ok(nearest)
            }
            Err(source) => {
                let code = source.code();
                log_init_failure(entry.type_name, code, &source, &handle.context.id);
                drop(nearest);
                Err(NearestError::InitializationFailed {
                    type_name: entry.type_name.to_string(),
                    code,
                    source: Box::new(source),
                })
            }
        }
    }
}

/// The registry of built-in strategies
pub fn builtin_registry() -> &'static NearestRegistry {
    NearestRegistry::builtin()
}

/// Create a built-in strategy from an argument list
pub fn create(handle: &Handle, args: &Arguments) -> Result<Nearest> {
    NearestRegistry::builtin().create(handle, args)
}

/// Create the built-in strategy declared by the message itself
pub fn new_from_handle(handle: &Handle) -> Result<Nearest> {
    let args = handle
        .nearest_arguments()
        .ok_or_else(|| NearestError::NotFound {
            key: "nearest".to_string(),
        })?;
    create(handle, args)
}

/// Built-in type names, in table order
pub fn registered_types() -> Vec<&'static str> {
    NearestRegistry::builtin().types().collect()
}
