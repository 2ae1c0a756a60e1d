// In: src/registry.rs

//! The closed registry of admissible scalar kinds.
//!
//! A `TypeRegistry` is one table of `RegistryEntry` rows, each binding a
//! `ScalarType` tag to its canonical name, its category, the `TypeId` of its
//! Rust element type, and a constructor for empty column storage. The
//! classifier, validator and factory are all lookups into this table.
//!
//! The registry is validated once on construction and immutable afterwards,
//! so it can be read from any number of threads without synchronization.

use crate::config::RegistryConfig;
use crate::error::SimpleDataError;
use crate::storage::ColumnStorage;
use crate::types::{unboxed, Category, Scalar, ScalarType, SimpleData, UintPtr, EMPTY_DTYPE};
use hashbrown::HashMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

//==================================================================================
// 1. Registry Entries
//==================================================================================

/// One row of the registry table.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub kind: ScalarType,
    /// `None` only in a flat (uncategorized) registry.
    pub category: Option<Category>,
    type_id: TypeId,
    rust_type: &'static str,
    new_storage: fn() -> ColumnStorage,
    numeric_view: fn(&dyn Any) -> Option<f64>,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("kind", &self.kind)
            .field("category", &self.category)
            .field("rust_type", &self.rust_type)
            .finish()
    }
}

fn numeric_view<T: Scalar>(value: &dyn Any) -> Option<f64> {
    value.downcast_ref::<T>().and_then(Scalar::to_f64)
}

impl RegistryEntry {
    /// Builds the entry for `T` with its builtin category.
    pub fn of<T: Scalar>() -> Self {
        Self {
            kind: T::KIND,
            category: Some(T::KIND.category()),
            type_id: TypeId::of::<T>(),
            rust_type: std::any::type_name::<T>(),
            new_storage: T::new_column,
            numeric_view: numeric_view::<T>,
        }
    }

    /// Builds the builtin entry for a kind.
    pub fn for_kind(kind: ScalarType) -> Self {
        match kind {
            ScalarType::String => Self::of::<String>(),
            ScalarType::Bool => Self::of::<bool>(),
            ScalarType::Int => Self::of::<isize>(),
            ScalarType::Int8 => Self::of::<i8>(),
            ScalarType::Int16 => Self::of::<i16>(),
            ScalarType::Int32 => Self::of::<i32>(),
            ScalarType::Int64 => Self::of::<i64>(),
            ScalarType::UInt => Self::of::<usize>(),
            ScalarType::UInt8 => Self::of::<u8>(),
            ScalarType::UInt16 => Self::of::<u16>(),
            ScalarType::UInt32 => Self::of::<u32>(),
            ScalarType::UInt64 => Self::of::<u64>(),
            ScalarType::UIntPtr => Self::of::<UintPtr>(),
            ScalarType::Float32 => Self::of::<f32>(),
            ScalarType::Float64 => Self::of::<f64>(),
        }
    }

    /// Replaces the category, e.g. when a configuration partitions kinds itself.
    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The Rust element type backing this kind.
    pub fn rust_type(&self) -> &'static str {
        self.rust_type
    }

    pub(crate) fn new_storage(&self) -> ColumnStorage {
        (self.new_storage)()
    }

    pub(crate) fn numeric_value(&self, value: &dyn Any) -> Option<f64> {
        (self.numeric_view)(value)
    }
}

//==================================================================================
// 2. The Registry
//==================================================================================

#[derive(Debug)]
pub struct TypeRegistry {
    entries: Vec<RegistryEntry>,
    by_name: HashMap<&'static str, usize>,
    by_type: HashMap<TypeId, usize>,
    categorized: bool,
    warned_uncategorized: AtomicBool,
}

static BUILTIN: OnceLock<TypeRegistry> = OnceLock::new();

impl TypeRegistry {
    /// The process-wide registry of every builtin kind with its builtin category.
    ///
    /// # Panics
    /// If the builtin table is malformed. That is a build defect, not a runtime
    /// condition, and it surfaces on first use.
    pub fn builtin() -> &'static TypeRegistry {
        BUILTIN.get_or_init(|| {
            let entries = ScalarType::ALL.iter().map(|&k| RegistryEntry::for_kind(k));
            TypeRegistry::try_new(entries.collect())
                .unwrap_or_else(|e| panic!("builtin SimpleData registry is malformed: {}", e))
        })
    }

    /// Validates and indexes a table of entries.
    ///
    /// Either every entry carries a category (a categorized registry, in which
    /// both categories must be non-empty) or none does (a flat registry).
    pub fn try_new(entries: Vec<RegistryEntry>) -> Result<Self, SimpleDataError> {
        if entries.is_empty() {
            return Err(SimpleDataError::Registry(
                "a registry needs at least one kind".to_string(),
            ));
        }

        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_type = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let name = entry.name();
            if name == EMPTY_DTYPE {
                return Err(SimpleDataError::Registry(format!(
                    "{:?} is reserved and cannot name a kind",
                    EMPTY_DTYPE
                )));
            }
            if by_name.insert(name, idx).is_some() {
                return Err(SimpleDataError::Registry(format!(
                    "name {:?} is registered more than once",
                    name
                )));
            }
            if by_type.insert(entry.type_id, idx).is_some() {
                return Err(SimpleDataError::Registry(format!(
                    "Rust type {} backs more than one kind",
                    entry.rust_type
                )));
            }
        }

        let uncategorized = entries.iter().filter(|e| e.category.is_none()).count();
        let categorized = uncategorized == 0;
        if !categorized && uncategorized != entries.len() {
            let missing: Vec<&str> = entries
                .iter()
                .filter(|e| e.category.is_none())
                .map(|e| e.name())
                .collect();
            return Err(SimpleDataError::Registry(format!(
                "kinds without a category in a categorized registry: {}",
                missing.join(", ")
            )));
        }
        if categorized {
            for category in [Category::Numeric, Category::Other] {
                if !entries.iter().any(|e| e.category == Some(category)) {
                    return Err(SimpleDataError::Registry(format!(
                        "category {:?} has no kinds",
                        category
                    )));
                }
            }
        }

        log::debug!(
            "SimpleData registry built: {} kinds, categorized={}",
            entries.len(),
            categorized
        );

        Ok(Self {
            entries,
            by_name,
            by_type,
            categorized,
            warned_uncategorized: AtomicBool::new(false),
        })
    }

    /// Builds a registry restricted to the kinds a configuration names.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, SimpleDataError> {
        let mut entries = Vec::new();
        let mut push = |name: &str, category: Option<Category>| -> Result<(), SimpleDataError> {
            if name == EMPTY_DTYPE {
                return Err(SimpleDataError::Registry(format!(
                    "{:?} is reserved and cannot name a kind",
                    EMPTY_DTYPE
                )));
            }
            let kind = ScalarType::from_name(name).ok_or_else(|| {
                SimpleDataError::Registry(format!("unknown scalar kind {:?}", name))
            })?;
            entries.push(RegistryEntry::for_kind(kind).with_category(category));
            Ok(())
        };

        match config {
            RegistryConfig::Categorized { numeric, other } => {
                if let Some(both) = numeric.iter().find(|n| other.contains(*n)) {
                    return Err(SimpleDataError::Registry(format!(
                        "{:?} is listed as both numeric and other",
                        both
                    )));
                }
                for name in numeric {
                    push(name, Some(Category::Numeric))?;
                }
                for name in other {
                    push(name, Some(Category::Other))?;
                }
            }
            RegistryConfig::Flat { types } => {
                for name in types {
                    push(name, None)?;
                }
            }
        }

        Self::try_new(entries)
    }

    //------------------------------------------------------------------------------
    // Read-only lookups
    //------------------------------------------------------------------------------

    pub fn entry(&self, kind: ScalarType) -> Option<&RegistryEntry> {
        self.lookup(kind.name())
    }

    /// Lookup by canonical name. `"empty"` is never found here.
    pub fn lookup(&self, name: &str) -> Option<&RegistryEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// The registry entry for a value's concrete kind, if registered. Boxed
    /// values are looked up by the kind they hold.
    pub fn entry_of(&self, value: &dyn SimpleData) -> Option<&RegistryEntry> {
        self.by_type
            .get(&unboxed(value).as_any().type_id())
            .map(|&idx| &self.entries[idx])
    }

    /// The registered kind of a value, `None` outside the universal set.
    pub fn kind_of(&self, value: &dyn SimpleData) -> Option<ScalarType> {
        self.entry_of(value).map(|e| e.kind)
    }

    pub fn contains(&self, kind: ScalarType) -> bool {
        self.entry(kind).is_some()
    }

    /// `false` for a flat registry, which cannot answer numeric-ness.
    pub fn is_categorized(&self) -> bool {
        self.categorized
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn universal(&self) -> impl Iterator<Item = ScalarType> + '_ {
        self.entries.iter().map(|e| e.kind)
    }

    pub fn numeric(&self) -> impl Iterator<Item = ScalarType> + '_ {
        self.in_category(Category::Numeric)
    }

    pub fn other(&self) -> impl Iterator<Item = ScalarType> + '_ {
        self.in_category(Category::Other)
    }

    fn in_category(&self, category: Category) -> impl Iterator<Item = ScalarType> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.category == Some(category))
            .map(|e| e.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logs the flat-registry warning once per registry.
    pub(crate) fn warn_uncategorized_once(&self) {
        if !self.warned_uncategorized.swap(true, Ordering::Relaxed) {
            log::warn!("numeric classification requested on an uncategorized registry; reporting non-numeric");
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
