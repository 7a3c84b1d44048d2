use std::sync::Arc;

use arcstr::ArcStr;

use crate::{
    SortError,
    compare::Comparator,
    schema::{
        meta::{
            Argument, EnumMeta, Field, InputObjectMeta, InterfaceMeta, MetaType, ObjectMeta,
            UnionMeta,
        },
        model::DirectiveType,
    },
    sort::resolve::Resolver,
};

/// Rebuilds named types and directives with every nested collection ordered
/// by name.
pub(crate) struct Sorter<'c, 'i, 'a> {
    comparator: &'c Comparator,
    resolver: Resolver<'i, 'a>,
}

impl<'c, 'i, 'a> Sorter<'c, 'i, 'a> {
    pub(crate) fn new(comparator: &'c Comparator, resolver: Resolver<'i, 'a>) -> Self {
        Self {
            comparator,
            resolver,
        }
    }

    /// Produces the sorted replacement of `meta`.
    ///
    /// Scalars and introspection types have nothing to reorder (or must not
    /// be reordered) and are shared as they are.
    pub(crate) fn sort_named_type(
        &self,
        meta: &Arc<MetaType>,
    ) -> Result<Arc<MetaType>, SortError> {
        if meta.is_introspection() {
            return Ok(Arc::clone(meta));
        }

        let sorted = match &**meta {
            MetaType::Scalar(_) => return Ok(Arc::clone(meta)),
            MetaType::Object(ObjectMeta {
                name,
                description,
                fields,
                interface_names,
            }) => MetaType::Object(ObjectMeta {
                name: name.clone(),
                description: description.clone(),
                fields: self.sort_fields(fields)?,
                interface_names: self.sort_names(interface_names)?,
            }),
            MetaType::Interface(InterfaceMeta {
                name,
                description,
                fields,
                interface_names,
            }) => MetaType::Interface(InterfaceMeta {
                name: name.clone(),
                description: description.clone(),
                fields: self.sort_fields(fields)?,
                interface_names: self.sort_names(interface_names)?,
            }),
            MetaType::Union(UnionMeta {
                name,
                description,
                of_type_names,
            }) => MetaType::Union(UnionMeta {
                name: name.clone(),
                description: description.clone(),
                of_type_names: self.sort_names(of_type_names)?,
            }),
            MetaType::Enum(EnumMeta {
                name,
                description,
                values,
            }) => {
                let mut values = values.clone();
                self.comparator.sort_by_name(&mut values, |v| v.name.as_str());
                MetaType::Enum(EnumMeta {
                    name: name.clone(),
                    description: description.clone(),
                    values,
                })
            }
            MetaType::InputObject(InputObjectMeta {
                name,
                description,
                input_fields,
            }) => MetaType::InputObject(InputObjectMeta {
                name: name.clone(),
                description: description.clone(),
                input_fields: self.sort_arguments(input_fields)?,
            }),
            MetaType::Placeholder(p) => return Err(SortError::UnexpectedKind(p.name.clone())),
        };
        Ok(Arc::new(sorted))
    }

    /// Produces the sorted replacement of `directive`: arguments and
    /// locations ordered by name.
    pub(crate) fn sort_directive(
        &self,
        directive: &DirectiveType,
    ) -> Result<DirectiveType, SortError> {
        let mut locations = directive.locations.clone();
        self.comparator.sort_by_name(&mut locations, |l| l.as_str());

        Ok(DirectiveType {
            name: directive.name.clone(),
            description: directive.description.clone(),
            locations,
            arguments: self.sort_arguments(&directive.arguments)?,
            is_repeatable: directive.is_repeatable,
        })
    }

    fn sort_fields(&self, fields: &[Field]) -> Result<Vec<Field>, SortError> {
        let mut sorted = fields
            .iter()
            .map(|f| -> Result<_, SortError> {
                Ok(Field {
                    name: f.name.clone(),
                    description: f.description.clone(),
                    arguments: f
                        .arguments
                        .as_deref()
                        .map(|args| self.sort_arguments(args))
                        .transpose()?,
                    field_type: self.resolver.resolve_type(&f.field_type)?,
                    deprecation_status: f.deprecation_status.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.comparator.sort_by_name(&mut sorted, |f| f.name.as_str());
        Ok(sorted)
    }

    fn sort_arguments(&self, arguments: &[Argument]) -> Result<Vec<Argument>, SortError> {
        let mut sorted = arguments
            .iter()
            .map(|a| -> Result<_, SortError> {
                Ok(Argument {
                    name: a.name.clone(),
                    description: a.description.clone(),
                    arg_type: self.resolver.resolve_type(&a.arg_type)?,
                    default_value: a.default_value.clone(),
                    deprecation_status: a.deprecation_status.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.comparator.sort_by_name(&mut sorted, |a| a.name.as_str());
        Ok(sorted)
    }

    fn sort_names(&self, names: &[ArcStr]) -> Result<Vec<ArcStr>, SortError> {
        let mut sorted = names
            .iter()
            .map(|n| self.resolver.resolve_named(n))
            .collect::<Result<Vec<_>, _>>()?;
        self.comparator.sort_by_name(&mut sorted, |n| n.as_str());
        Ok(sorted)
    }
}
