#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

#[macro_use]
mod macros;
mod ast;
pub mod compare;
pub mod introspection;
pub(crate) mod schema;
mod sort;

#[cfg(test)]
mod tests;

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error, From};

pub use crate::{
    ast::{InputValue, Type},
    compare::{CaseOrder, CollationOptions, Comparator, CompareError, CompareOptions, Sensitivity},
    schema::{
        meta::{self, MetaType, TypeKind},
        model::{
            DirectiveLocation, DirectiveType, OperationType, SchemaConfig, SchemaError, SchemaType,
        },
    },
};

/// Error sorting a [`SchemaType`].
///
/// Any error aborts the whole operation: no partially sorted schema is ever
/// produced.
#[derive(Clone, Debug, Display, Eq, Error, From, PartialEq)]
pub enum SortError {
    /// A type reference names a type the schema doesn't contain.
    #[display("Unknown type \"{_0}\" referenced in schema")]
    #[from(ignore)]
    UnknownType(#[error(not(source))] ArcStr),

    /// A named type is of a kind that cannot be sorted.
    #[display("Unexpected type kind of \"{_0}\"")]
    #[from(ignore)]
    UnexpectedKind(#[error(not(source))] ArcStr),

    /// [`CompareOptions`] cannot be turned into a [`Comparator`].
    #[display("Cannot compare names: {_0}")]
    Compare(CompareError),

    /// The sorted schema cannot be built.
    #[display("Cannot build sorted schema: {_0}")]
    Schema(SchemaError),
}

/// Builds a copy of the `schema` with every named collection it contains
/// ordered by name.
///
/// Ordered collections are the schema's types and directives, the fields of
/// objects and interfaces, the arguments of fields and directives, the
/// interfaces implemented by objects and interfaces, union members, enum
/// values, input object fields and directive locations. Introspection types
/// are carried over as they are.
///
/// Names are compared as described by the `options`. With default options
/// they are compared by Unicode code point.
///
/// # Errors
///
/// - [`SortError::Compare`] if the `options` are invalid;
/// - [`SortError::UnknownType`] if a type reference names a type the
///   `schema` doesn't contain;
/// - [`SortError::UnexpectedKind`] if the `schema` contains an unresolved
///   placeholder type.
pub fn lexicographic_sort_schema(
    schema: &SchemaType,
    options: &CompareOptions,
) -> Result<SchemaType, SortError> {
    let comparator = Comparator::new(options)?;
    lexicographic_sort_schema_with(schema, &comparator)
}

/// Same as [`lexicographic_sort_schema()`], but comparing names by Unicode
/// code point.
///
/// # Errors
///
/// See [`lexicographic_sort_schema()`].
pub fn lexicographic_sort_schema_default(schema: &SchemaType) -> Result<SchemaType, SortError> {
    lexicographic_sort_schema_with(schema, &Comparator::code_point())
}

/// Same as [`lexicographic_sort_schema()`], but reusing an already built
/// [`Comparator`].
///
/// # Errors
///
/// See [`lexicographic_sort_schema()`].
pub fn lexicographic_sort_schema_with(
    schema: &SchemaType,
    comparator: &Comparator,
) -> Result<SchemaType, SortError> {
    sort::sort_schema(schema, comparator)
}
