//! Wire field types, namespaced by version.
//!
//! New field type versions get a new submodule so that existing wire
//! data never changes meaning under them.

pub mod v1;
