// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// Resolved metadata of an entity: its logical name and the physical table backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub name: String,
    pub table: String,
    /// The primary key column, used to form membership predicates for correlated
    /// subqueries.
    pub id_column: String,
}

impl EntityType {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            id_column: "id".to_string(),
        }
    }

    pub fn with_id_column(mut self, id_column: impl Into<String>) -> Self {
        self.id_column = id_column.into();
        self
    }
}

/// What a correlation binds against. A caller may hold only the entity's name (to be
/// resolved by the query builder) or already-resolved [EntityType] metadata; both forms
/// drive the same construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Named(String),
    Resolved(EntityType),
}

impl EntityRef {
    pub fn name(&self) -> &str {
        match self {
            EntityRef::Named(name) => name,
            EntityRef::Resolved(entity_type) => &entity_type.name,
        }
    }
}

impl From<&str> for EntityRef {
    fn from(name: &str) -> Self {
        EntityRef::Named(name.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(name: String) -> Self {
        EntityRef::Named(name)
    }
}

impl From<EntityType> for EntityRef {
    fn from(entity_type: EntityType) -> Self {
        EntityRef::Resolved(entity_type)
    }
}

impl From<&EntityType> for EntityRef {
    fn from(entity_type: &EntityType) -> Self {
        EntityRef::Resolved(entity_type.clone())
    }
}
