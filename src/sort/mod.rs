//! Lexicographic sorting of a [`SchemaType`].
//!
//! Sorting happens in two passes. The first one indexes every named type of
//! the schema by its name, in sorted order. The second one rebuilds each type
//! with its nested collections sorted, resolving the type references it
//! contains against that index. As no type is ever rebuilt because another
//! one refers to it, cycles in the type graph need no special care.

mod resolve;
mod sorter;

use std::sync::Arc;

use itertools::Itertools as _;

use crate::{
    SortError,
    compare::Comparator,
    schema::{
        meta::MetaType,
        model::{SchemaConfig, SchemaType},
    },
};

use self::{
    resolve::{Resolver, TypeIndex},
    sorter::Sorter,
};

/// Builds a copy of `schema` with types, directives and all of their nested
/// collections ordered by name according to the `comparator`.
///
/// The `schema` itself is left untouched.
pub(crate) fn sort_schema(
    schema: &SchemaType,
    comparator: &Comparator,
) -> Result<SchemaType, SortError> {
    __lexsort_span_trace!("sort_schema", types = schema.type_count());

    let index: TypeIndex<'_> = schema
        .type_list()
        .sorted_by(|a, b| comparator.compare(a.name(), b.name()))
        .map(|meta| (meta.name().clone(), meta))
        .collect();
    let resolver = Resolver::new(&index);
    let sorter = Sorter::new(comparator, resolver);

    let types = index
        .values()
        .map(|meta| {
            __lexsort_trace!(name = meta.name().as_str(), kind = ?meta.type_kind(), "sorting type");
            sorter.sort_named_type(meta)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let directives = schema
        .directive_list()
        .sorted_by(|a, b| comparator.compare(&a.name, &b.name))
        .map(|directive| sorter.sort_directive(directive))
        .collect::<Result<Vec<_>, _>>()?;

    let root = |meta: Option<&Arc<MetaType>>| {
        meta.map(|meta| resolver.resolve_named(meta.name()))
            .transpose()
    };

    let sorted = SchemaType::new(SchemaConfig {
        description: schema.description().cloned(),
        query: root(schema.query_type())?,
        mutation: root(schema.mutation_type())?,
        subscription: root(schema.subscription_type())?,
        types,
        directives: Some(directives),
    })?;

    __lexsort_trace_debug!(
        types = sorted.type_count(),
        directives = sorted.directive_list().len(),
        "sorted schema"
    );

    Ok(sorted)
}
