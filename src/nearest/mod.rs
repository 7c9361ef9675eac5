//! Nearest-neighbour lookup strategies.
//!
//! A strategy is selected by type name through the [`factory`]. Each type is
//! described by a static [`NearestClass`]; every [`Nearest`] instance keeps a
//! reference to the class it was built from, so its variant identity survives
//! type erasure behind [`NearestStrategy`].

pub mod common;
pub mod factory;
pub mod projected;
pub mod reduced;
pub mod regular;
pub mod spectral;

use serde::Serialize;
use std::fmt;

use crate::arguments::Arguments;
use crate::error::Result;
use crate::handle::Handle;

pub use factory::{
    builtin_registry, create, new_from_handle, registered_types, NearestRegistry,
    RegistrationEntry,
};

/// Trait implemented by every nearest variant
pub trait NearestStrategy: Send + Sync {
    /// Resolve the variant's arguments against `handle` and validate them.
    ///
    /// Called exactly once, on a default-constructed instance.
    fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()>;

    /// Describe the initialized geometry
    fn summary(&self) -> NearestSummary;
}

/// Constructor producing a default, uninitialized instance
pub type Constructor = fn() -> Box<dyn NearestStrategy>;

/// Box a default-constructed `T` as a strategy
pub fn boxed<T>() -> Box<dyn NearestStrategy>
where
    T: NearestStrategy + Default + 'static,
{
    Box::new(T::default())
}

/// Descriptor shared by all instances of one variant
pub struct NearestClass {
    name: &'static str,
    size: usize,
    construct: Constructor,
}

impl NearestClass {
    pub const fn new(name: &'static str, size: usize, construct: Constructor) -> Self {
        Self {
            name,
            size,
            construct,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Size in bytes of the variant's state
    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn instantiate(&'static self) -> Nearest {
        Nearest {
            class: self,
            strategy: (self.construct)(),
        }
    }
}

impl fmt::Debug for NearestClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NearestClass")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish()
    }
}

/// Declare a static [`NearestClass`] for a strategy type
#[macro_export]
macro_rules! nearest_class {
    ($vis:vis $ident:ident, $name:expr, $ty:ty) => {
        $vis static $ident: $crate::nearest::NearestClass = $crate::nearest::NearestClass::new(
            $name,
            ::std::mem::size_of::<$ty>(),
            $crate::nearest::boxed::<$ty>,
        );
    };
}

/// A constructed nearest strategy
pub struct Nearest {
    class: &'static NearestClass,
    strategy: Box<dyn NearestStrategy>,
}

impl Nearest {
    /// The descriptor this instance was built from
    pub fn class(&self) -> &'static NearestClass {
        self.class
    }

    pub fn type_name(&self) -> &'static str {
        self.class.name
    }

    pub fn strategy(&self) -> &dyn NearestStrategy {
        self.strategy.as_ref()
    }

    pub fn summary(&self) -> NearestSummary {
        self.strategy.summary()
    }

    pub(crate) fn init(&mut self, handle: &Handle, args: &Arguments) -> Result<()> {
        self.strategy.init(handle, args)
    }
}

impl fmt::Debug for Nearest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nearest")
            .field("class", &self.class.name)
            .finish_non_exhaustive()
    }
}

/// Serializable description of an initialized strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestSummary {
    /// Key holding the field values
    pub values_key: String,
    /// Earth radius in metres
    pub radius: f64,
    /// Number of grid points
    pub points: usize,
    /// Grid dimensions; for reduced grids, points per row
    pub shape: Vec<usize>,
}
