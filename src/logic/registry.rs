//! Process-global registry of assertion-logic implementations.
//!
//! Generated glue resolves every assertion interface through this registry,
//! so a reconfigured implementation can be swapped in for a whole test
//! binary:
//!
//! ```rust
//! use attest::logic::default::DefaultMapAssertions;
//! use attest::registry;
//!
//! // Installed instances replace the lazily-created default.
//! registry::install(DefaultMapAssertions { max_listed_keys: 3 });
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

type Table = RwLock<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>;

static TABLE: OnceLock<Table> = OnceLock::new();

fn table() -> &'static Table {
    TABLE.get_or_init(Table::default)
}

/// Install an implementation instance, replacing any previous one of the
/// same type. Instances live for the rest of the process.
pub fn install<A>(value: A)
where
    A: Any + Send + Sync,
{
    table()
        .write()
        .expect("registry lock poisoned")
        .insert(TypeId::of::<A>(), Box::leak(Box::new(value)));
}

/// Look up the installed instance of `A`, creating and installing the
/// type's default on first access.
pub fn get_or_default<A>() -> &'static A
where
    A: Any + Send + Sync + Default,
{
    if let Some(hit) = table()
        .read()
        .expect("registry lock poisoned")
        .get(&TypeId::of::<A>())
    {
        return hit
            .downcast_ref::<A>()
            .expect("registry entry has mismatched type");
    }

    let mut entries = table().write().expect("registry lock poisoned");
    entries
        .entry(TypeId::of::<A>())
        .or_insert_with(|| Box::leak(Box::new(A::default())))
        .downcast_ref::<A>()
        .expect("registry entry has mismatched type")
}
