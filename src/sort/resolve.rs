use std::sync::Arc;

use arcstr::ArcStr;

use crate::{
    SortError,
    ast::Type,
    schema::{meta::MetaType, model::FnvIndexMap},
};

/// Every named type of the schema being sorted, keyed by name, in sorted
/// order.
///
/// It is complete before any type gets rebuilt, so references can be
/// resolved without the referenced type being sorted yet.
pub(crate) type TypeIndex<'a> = FnvIndexMap<ArcStr, &'a Arc<MetaType>>;

/// Resolves type references against a [`TypeIndex`].
///
/// References are satisfied by lookup only and never trigger sorting of the
/// referenced type, which is what makes cyclic type graphs terminate.
#[derive(Clone, Copy)]
pub(crate) struct Resolver<'i, 'a> {
    index: &'i TypeIndex<'a>,
}

impl<'i, 'a> Resolver<'i, 'a> {
    pub(crate) fn new(index: &'i TypeIndex<'a>) -> Self {
        Self { index }
    }

    /// Resolves the type named `name`, returning the name the sorted type is
    /// indexed under.
    pub(crate) fn resolve_named(&self, name: &str) -> Result<ArcStr, SortError> {
        self.index
            .get_key_value(name)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| SortError::UnknownType(name.into()))
    }

    /// Resolves the named type at the bottom of `ty`, keeping all the list
    /// and non-null wrappers around it as they are.
    pub(crate) fn resolve_type(&self, ty: &Type) -> Result<Type, SortError> {
        Ok(match ty {
            Type::Named(name) => Type::Named(self.resolve_named(name)?),
            Type::List(inner) => Type::List(Box::new(self.resolve_type(inner)?)),
            Type::NonNull(inner) => Type::NonNull(Box::new(self.resolve_type(inner)?)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::{
        SortError,
        ast::Type,
        schema::meta::{MetaType, ScalarMeta},
    };

    use super::{Resolver, TypeIndex};

    fn scalars() -> Vec<Arc<MetaType>> {
        ["Int", "String"]
            .into_iter()
            .map(|n| Arc::new(ScalarMeta::new(n).into_meta()))
            .collect()
    }

    #[test]
    fn keeps_wrapper_shape() {
        let types = scalars();
        let index: TypeIndex<'_> = types.iter().map(|t| (t.name().clone(), t)).collect();
        let resolver = Resolver::new(&index);

        let ty = Type::named("Int").non_null().list().non_null();
        assert_eq!(resolver.resolve_type(&ty), Ok(ty.clone()));

        let ty = Type::named("String").list().list();
        assert_eq!(
            resolver.resolve_type(&ty).map(|t| t.to_string()),
            Ok("[[String]]".into()),
        );
    }

    #[test]
    fn reports_unknown_names() {
        let types = scalars();
        let index: TypeIndex<'_> = types.iter().map(|t| (t.name().clone(), t)).collect();
        let resolver = Resolver::new(&index);

        assert_eq!(
            resolver.resolve_type(&Type::named("Float").non_null()),
            Err(SortError::UnknownType("Float".into())),
        );
    }
}
