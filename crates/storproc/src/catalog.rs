//! Per-entity catalog of named procedure declarations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use storproc_core::{NamedProcedureDeclaration, ResolveError, ResolveResult};

/// The declarations found on one entity type.
///
/// An entity may carry a list of declarations as well as a single
/// stand-alone declaration. [`merged`](Self::merged) yields the list first,
/// followed by the single declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityDeclarations {
    /// Declarations given as a list.
    pub declarations: Vec<NamedProcedureDeclaration>,
    /// A single stand-alone declaration.
    pub declaration: Option<NamedProcedureDeclaration>,
}

impl EntityDeclarations {
    /// Returns all declarations in lookup order.
    pub fn merged(self) -> impl Iterator<Item = NamedProcedureDeclaration> {
        self.declarations.into_iter().chain(self.declaration)
    }
}

/// Named procedure declarations, grouped by the logical name of their entity.
///
/// Declarations keep their registration order within an entity, which is
/// the order the resolver scans them in. Registering a second declaration
/// with an existing name does not replace the first one.
///
/// # Example
///
/// ```
/// use storproc::{DeclarationCatalog, NamedProcedureDeclaration};
///
/// let mut catalog = DeclarationCatalog::new();
/// catalog.register("Account", NamedProcedureDeclaration::new("Account.transfer"));
///
/// assert!(catalog.contains("Account", "Account.transfer"));
/// assert!(catalog.declarations_for("Customer").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationCatalog {
    entities: HashMap<String, Vec<NamedProcedureDeclaration>>,
}

impl DeclarationCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { entities: HashMap::new() }
    }

    /// Reads a catalog from a JSON object mapping entity names to declaration arrays.
    ///
    /// ```json
    /// {
    ///   "Account": [
    ///     { "name": "Account.transfer",
    ///       "parameters": [ { "name": "amt", "mode": "IN", "type": "FLOAT" },
    ///                       { "name": "code", "mode": "OUT", "type": "INTEGER" } ] }
    ///   ]
    /// }
    /// ```
    pub fn from_json(json: &str) -> ResolveResult<Self> {
        serde_json::from_str(json).map_err(|e| ResolveError::Catalog(e.to_string()))
    }

    /// Appends a declaration for an entity.
    pub fn register(&mut self, entity: impl Into<String>, declaration: NamedProcedureDeclaration) {
        self.entities.entry(entity.into()).or_default().push(declaration);
    }

    /// Appends declarations for an entity, keeping their order.
    pub fn register_all(
        &mut self,
        entity: impl Into<String>,
        declarations: impl IntoIterator<Item = NamedProcedureDeclaration>,
    ) {
        self.entities.entry(entity.into()).or_default().extend(declarations);
    }

    /// Appends the declarations found on an entity type.
    pub fn register_entity(&mut self, entity: impl Into<String>, found: EntityDeclarations) {
        self.register_all(entity, found.merged());
    }

    /// Returns the declarations visible to an entity, in lookup order.
    ///
    /// Unknown entities have no declarations.
    #[must_use]
    pub fn declarations_for(&self, entity: &str) -> &[NamedProcedureDeclaration] {
        self.entities.get(entity).map_or(&[][..], Vec::as_slice)
    }

    /// Returns true if the entity has a declaration with the given name.
    #[must_use]
    pub fn contains(&self, entity: &str, name: &str) -> bool {
        self.declarations_for(entity).iter().any(|d| d.name == name)
    }

    /// Returns the total number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.values().map(Vec::len).sum()
    }

    /// Returns true if no declarations are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lists the entities that have registered declarations, sorted by name.
    #[must_use]
    pub fn entities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
