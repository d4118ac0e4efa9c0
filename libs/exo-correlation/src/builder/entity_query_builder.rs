// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{collections::HashMap, mem};

use crate::{
    asql::entity::{EntityRef, EntityType},
    correlation_error::CorrelationError,
    sql::{
        column::Column, dialect::Dialect, join::LeftJoin, predicate::ConcretePredicate,
        select::Select, table::Table,
    },
    transform::correlation::outer_query_builder::OuterQueryBuilder,
};

use super::{lateral::LateralBuilder, subquery::SubqueryBuilder};

/// A handle to one join emitted by [EntityQueryBuilder], through which further join
/// conditions are attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinTarget {
    index: usize,
}

/// The reference [OuterQueryBuilder]: maintains a root entity and a list of joins
/// hanging off it, and folds them into a [Select] once construction is complete.
///
/// Entities are resolvable by name through a registry, so a correlation may be
/// requested either with a bare name or with already-resolved [EntityType] metadata.
pub struct EntityQueryBuilder {
    dialect: Dialect,
    entities: HashMap<String, EntityType>,
    root: EntityType,
    root_alias: String,
    joins: Vec<JoinElement>,
}

struct JoinElement {
    right: JoinRight,
    on: ConcretePredicate,
    lateral: bool,
}

enum JoinRight {
    Entity {
        table: String,
        alias: String,
    },
    /// Reserved for a lateral subquery that is still being built; replaced when the
    /// lateral scope closes
    PendingLateral {
        external_alias: String,
    },
    LateralSubquery {
        select: Select,
        alias: String,
    },
}

impl EntityQueryBuilder {
    pub fn new(dialect: Dialect, root: EntityType, root_alias: impl Into<String>) -> Self {
        let mut entities = HashMap::new();
        entities.insert(root.name.clone(), root.clone());

        Self {
            dialect,
            entities,
            root,
            root_alias: root_alias.into(),
            joins: Vec::new(),
        }
    }

    /// Make an entity resolvable by name.
    pub fn register_entity(&mut self, entity: EntityType) {
        self.entities.insert(entity.name.clone(), entity);
    }

    fn resolve(&self, entity: &EntityRef) -> Result<EntityType, CorrelationError> {
        match entity {
            EntityRef::Named(name) => self
                .entities
                .get(name)
                .cloned()
                .ok_or_else(|| CorrelationError::UnknownEntity(name.clone())),
            EntityRef::Resolved(entity_type) => Ok(entity_type.clone()),
        }
    }

    fn has_alias(&self, alias: &str) -> bool {
        self.root_alias == alias
            || self.joins.iter().any(|join| match &join.right {
                JoinRight::Entity { alias: bound, .. } => bound == alias,
                JoinRight::PendingLateral { external_alias } => external_alias == alias,
                JoinRight::LateralSubquery { alias: bound, .. } => bound == alias,
            })
    }

    /// And the given predicate onto the join condition of the target. For a lateral
    /// join the condition ends up inside the subquery when the lateral scope closes, so
    /// it may refer to the correlation alias and to columns of the outer row.
    pub fn add_join_condition(&mut self, target: &JoinTarget, predicate: ConcretePredicate) {
        let join = &mut self.joins[target.index];
        let on = mem::replace(&mut join.on, ConcretePredicate::True);
        join.on = ConcretePredicate::and(on, predicate);
    }

    /// Fold the root and the emitted joins into a select with the given projection.
    pub fn into_select(self, columns: Vec<Column>) -> Select {
        let mut table = Table::Entity {
            table: self.root.table,
            alias: self.root_alias,
        };

        for join in self.joins {
            let right = match join.right {
                JoinRight::Entity { table, alias } => Table::Entity { table, alias },
                JoinRight::LateralSubquery { select, alias } => Table::SubSelect {
                    select: Box::new(select),
                    alias,
                },
                JoinRight::PendingLateral { external_alias } => {
                    panic!("lateral subquery for '{external_alias}' was not closed")
                }
            };

            table = if join.lateral {
                Table::Join(Box::new(LeftJoin::lateral(table, right, join.on)))
            } else {
                Table::Join(Box::new(LeftJoin::new(table, right, join.on)))
            };
        }

        Select {
            table,
            columns,
            predicate: ConcretePredicate::True,
            order_by: None,
            limit: None,
            offset: None,
        }
    }
}

impl OuterQueryBuilder for EntityQueryBuilder {
    type JoinTarget = JoinTarget;
    type Subquery = SubqueryBuilder;
    type Lateral = LateralBuilder;

    fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    fn left_join(
        &mut self,
        join_base: &str,
        entity: &EntityRef,
        alias: &str,
    ) -> Result<JoinTarget, CorrelationError> {
        debug_assert!(self.has_alias(join_base), "unknown join base '{join_base}'");
        let entity = self.resolve(entity)?;

        self.joins.push(JoinElement {
            right: JoinRight::Entity {
                table: entity.table,
                alias: alias.to_string(),
            },
            on: ConcretePredicate::True,
            lateral: false,
        });

        Ok(JoinTarget {
            index: self.joins.len() - 1,
        })
    }

    fn correlated_in_subquery(
        &mut self,
        target: &mut JoinTarget,
        external_alias: &str,
        entity: &EntityRef,
        correlation_alias: &str,
    ) -> Result<SubqueryBuilder, CorrelationError> {
        let entity = self.resolve(entity)?;

        Ok(SubqueryBuilder {
            join_index: target.index,
            membership_column: Column::physical(external_alias, &entity.id_column),
            select: Select {
                table: Table::Entity {
                    table: entity.table.clone(),
                    alias: correlation_alias.to_string(),
                },
                columns: vec![Column::physical(correlation_alias, &entity.id_column)],
                predicate: ConcretePredicate::True,
                order_by: None,
                limit: None,
                offset: None,
            },
            predicate_closed: false,
        })
    }

    fn left_join_lateral_entity_subquery(
        &mut self,
        join_base: &str,
        entity: &EntityRef,
        external_alias: &str,
        correlation_alias: &str,
    ) -> Result<(JoinTarget, LateralBuilder), CorrelationError> {
        debug_assert!(self.has_alias(join_base), "unknown join base '{join_base}'");
        let entity = self.resolve(entity)?;

        self.joins.push(JoinElement {
            right: JoinRight::PendingLateral {
                external_alias: external_alias.to_string(),
            },
            on: ConcretePredicate::True,
            lateral: true,
        });

        let target = JoinTarget {
            index: self.joins.len() - 1,
        };

        let lateral = LateralBuilder {
            join_index: target.index,
            external_alias: external_alias.to_string(),
            select: Select {
                table: Table::Entity {
                    table: entity.table,
                    alias: correlation_alias.to_string(),
                },
                columns: vec![Column::Star(Some(correlation_alias.to_string()))],
                predicate: ConcretePredicate::True,
                order_by: None,
                limit: None,
                offset: None,
            },
        };

        Ok((target, lateral))
    }

    fn end_in_predicate(&mut self, subquery: &mut SubqueryBuilder) {
        subquery.predicate_closed = true;
    }

    fn end_subquery(&mut self, subquery: SubqueryBuilder) {
        let SubqueryBuilder {
            join_index,
            membership_column,
            select,
            predicate_closed,
        } = subquery;
        debug_assert!(
            predicate_closed,
            "the membership predicate scope must close before the subquery scope"
        );

        let join = &mut self.joins[join_index];
        let on = mem::replace(&mut join.on, ConcretePredicate::True);
        join.on = ConcretePredicate::and(
            on,
            ConcretePredicate::In(membership_column, Box::new(select)),
        );
    }

    fn end_lateral(&mut self, lateral: LateralBuilder) {
        let LateralBuilder {
            join_index,
            external_alias,
            mut select,
        } = lateral;

        let join = &mut self.joins[join_index];

        // The conditions attached to the join target correlate the subquery to the
        // outer row; they belong inside the lateral subquery, leaving `ON TRUE`
        // outside.
        let on = mem::replace(&mut join.on, ConcretePredicate::True);
        let inner = mem::replace(&mut select.predicate, ConcretePredicate::True);
        select.predicate = ConcretePredicate::and(inner, on);

        join.right = JoinRight::LateralSubquery {
            select,
            alias: external_alias,
        };
    }
}
