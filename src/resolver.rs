use indexmap::IndexMap;

use crate::error::{CompileError, Result};
use crate::schema::Schema;

const DEFINITIONS_PREFIX: &str = "#/definitions/";
const DEFS_PREFIX: &str = "#/$defs/";

/// Lookup table from fully-qualified local pointers (`#/definitions/<name>`,
/// `#/$defs/<name>`) to the schema nodes they name.
///
/// Built once from the document root; read-only afterwards.
#[derive(Debug)]
pub struct RefCache<'a> {
    entries: IndexMap<String, &'a Schema>,
}

impl<'a> RefCache<'a> {
    pub fn from_root(root: &'a Schema) -> RefCache<'a> {
        let mut entries = IndexMap::new();
        for (name, def) in &root.definitions {
            entries.insert(format!("{}{}", DEFINITIONS_PREFIX, name), def);
        }
        for (name, def) in &root.defs {
            entries.insert(format!("{}{}", DEFS_PREFIX, name), def);
        }
        RefCache { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a local `$ref` pointer to its definition.
    ///
    /// Only the `#/definitions/` and `#/$defs/` namespaces are supported;
    /// anything else (external URLs, `#/properties/...` pointers) is an
    /// unsupported reference format.
    pub fn resolve(&self, pointer: &str) -> Result<&'a Schema> {
        if !pointer.starts_with(DEFINITIONS_PREFIX) && !pointer.starts_with(DEFS_PREFIX) {
            return Err(CompileError::UnsupportedReference(pointer.to_owned()));
        }
        self.entries
            .get(pointer)
            .copied()
            .ok_or_else(|| CompileError::ReferenceNotFound(pointer.to_owned()))
    }
}
