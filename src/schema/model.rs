use std::{fmt, sync::Arc};

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};
use fnv::FnvBuildHasher;
use indexmap::{IndexMap, map::Entry};

use crate::{
    ast::{InputValue, Type},
    introspection,
    schema::meta::{Argument, MetaType},
};

/// [`IndexMap`] keyed by names, hashed with FNV.
pub type FnvIndexMap<K, V> = IndexMap<K, V, FnvBuildHasher>;

/// Metadata for a schema
///
/// Types and directives are kept in insertion order, which is the order they
/// are listed in when the schema gets introspected or printed.
#[derive(Clone, Debug)]
pub struct SchemaType {
    pub(crate) description: Option<ArcStr>,
    pub(crate) types: FnvIndexMap<ArcStr, Arc<MetaType>>,
    pub(crate) query_type: Option<Arc<MetaType>>,
    pub(crate) mutation_type: Option<Arc<MetaType>>,
    pub(crate) subscription_type: Option<Arc<MetaType>>,
    pub(crate) directives: FnvIndexMap<ArcStr, DirectiveType>,
}

/// Everything needed to build a [`SchemaType`].
///
/// This is also what [`SchemaType::to_config()`] hands back, so a schema can be
/// taken apart, adjusted and built again.
#[derive(Clone, Debug, Default)]
pub struct SchemaConfig {
    /// Description of the schema itself.
    pub description: Option<ArcStr>,
    /// Name of the query root type.
    pub query: Option<ArcStr>,
    /// Name of the mutation root type.
    pub mutation: Option<ArcStr>,
    /// Name of the subscription root type.
    pub subscription: Option<ArcStr>,
    /// All named types of the schema.
    ///
    /// Introspection types and the scalars they need are added when missing.
    pub types: Vec<Arc<MetaType>>,
    /// Directives of the schema.
    ///
    /// [`None`] means the [specified directives](DirectiveType::specified).
    pub directives: Option<Vec<DirectiveType>>,
}

/// The three kinds of GraphQL operations, each rooted at its own type.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum OperationType {
    #[display("query")]
    Query,
    #[display("mutation")]
    Mutation,
    #[display("subscription")]
    Subscription,
}

/// Error building a [`SchemaType`] out of a [`SchemaConfig`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum SchemaError {
    /// Two types share the same name.
    #[display("Schema must contain uniquely named types but contains multiple types named \"{_0}\"")]
    DuplicateType(#[error(not(source))] ArcStr),

    /// Two directives share the same name.
    #[display("Schema must contain uniquely named directives but contains multiple \"@{_0}\"")]
    DuplicateDirective(#[error(not(source))] ArcStr),

    /// A root operation type names a type the schema doesn't have.
    #[display("Root {operation} type \"{name}\" not found in schema")]
    UnknownRootType {
        /// Operation the root type is for.
        #[error(not(source))]
        operation: OperationType,
        /// Name of the missing type.
        #[error(not(source))]
        name: ArcStr,
    },
}

/// Metadata for a directive
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveType {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub locations: Vec<DirectiveLocation>,
    #[doc(hidden)]
    pub arguments: Vec<Argument>,
    #[doc(hidden)]
    pub is_repeatable: bool,
}

/// Places in a GraphQL document or schema a directive may be applied to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl SchemaType {
    /// Builds a new [`SchemaType`] out of the provided [`SchemaConfig`].
    ///
    /// Types keep the order of [`SchemaConfig::types`], followed by any
    /// built-in type that had to be added.
    pub fn new(config: SchemaConfig) -> Result<Self, SchemaError> {
        let SchemaConfig {
            description,
            query,
            mutation,
            subscription,
            types: config_types,
            directives: config_directives,
        } = config;

        let mut types = FnvIndexMap::default();
        for meta in config_types {
            match types.entry(meta.name().clone()) {
                Entry::Occupied(e) => return Err(SchemaError::DuplicateType(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(meta);
                }
            }
        }

        let builtins = introspection::introspection_types()
            .into_iter()
            .chain(introspection::specified_scalar_types())
            .filter(|meta| {
                meta.is_introspection() || matches!(meta.name().as_str(), "String" | "Boolean")
            });
        for meta in builtins {
            if !types.contains_key(meta.name()) {
                types.insert(meta.name().clone(), Arc::new(meta));
            }
        }

        let mut directives = FnvIndexMap::default();
        for directive in config_directives.unwrap_or_else(DirectiveType::specified) {
            match directives.entry(directive.name.clone()) {
                Entry::Occupied(e) => return Err(SchemaError::DuplicateDirective(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(directive);
                }
            }
        }

        let root = |operation, name: Option<ArcStr>| {
            name.map(|name| {
                types
                    .get(&name)
                    .cloned()
                    .ok_or(SchemaError::UnknownRootType { operation, name })
            })
            .transpose()
        };

        Ok(Self {
            query_type: root(OperationType::Query, query)?,
            mutation_type: root(OperationType::Mutation, mutation)?,
            subscription_type: root(OperationType::Subscription, subscription)?,
            description,
            types,
            directives,
        })
    }

    /// Takes this [`SchemaType`] apart into a [`SchemaConfig`] sharing all
    /// of its types.
    pub fn to_config(&self) -> SchemaConfig {
        SchemaConfig {
            description: self.description.clone(),
            query: self.query_type.as_ref().map(|t| t.name().clone()),
            mutation: self.mutation_type.as_ref().map(|t| t.name().clone()),
            subscription: self.subscription_type.as_ref().map(|t| t.name().clone()),
            types: self.types.values().cloned().collect(),
            directives: Some(self.directives.values().cloned().collect()),
        }
    }

    /// Description of this schema, if any.
    pub fn description(&self) -> Option<&ArcStr> {
        self.description.as_ref()
    }

    /// Looks up a type by its name.
    pub fn type_by_name(&self, name: &str) -> Option<&Arc<MetaType>> {
        self.types.get(name)
    }

    /// Looks up a type by its name, without the [`Arc`] wrapper.
    pub fn concrete_type_by_name(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name).map(AsRef::as_ref)
    }

    /// All types of this schema, in order.
    pub fn type_list(&self) -> impl ExactSizeIterator<Item = &Arc<MetaType>> {
        self.types.values()
    }

    /// Number of named types in this schema.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// The query root type, if any.
    pub fn query_type(&self) -> Option<&Arc<MetaType>> {
        self.query_type.as_ref()
    }

    /// The mutation root type, if any.
    pub fn mutation_type(&self) -> Option<&Arc<MetaType>> {
        self.mutation_type.as_ref()
    }

    /// The subscription root type, if any.
    pub fn subscription_type(&self) -> Option<&Arc<MetaType>> {
        self.subscription_type.as_ref()
    }

    /// The root type for the given `operation`, if any.
    pub fn root_type(&self, operation: OperationType) -> Option<&Arc<MetaType>> {
        match operation {
            OperationType::Query => self.query_type(),
            OperationType::Mutation => self.mutation_type(),
            OperationType::Subscription => self.subscription_type(),
        }
    }

    /// All directives of this schema, in order.
    pub fn directive_list(&self) -> impl ExactSizeIterator<Item = &DirectiveType> {
        self.directives.values()
    }

    /// Looks up a directive by its name.
    pub fn directive_by_name(&self, name: &str) -> Option<&DirectiveType> {
        self.directives.get(name)
    }
}

impl DirectiveType {
    /// Builds a new [`DirectiveType`] with the given `name`, `locations` and
    /// `arguments`.
    pub fn new(
        name: impl Into<ArcStr>,
        locations: &[DirectiveLocation],
        arguments: &[Argument],
        is_repeatable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: locations.to_vec(),
            arguments: arguments.to_vec(),
            is_repeatable,
        }
    }

    /// The [specified directives][0]: `@include`, `@skip`, `@deprecated` and
    /// `@specifiedBy`.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec-Type-System.Directives.Built-in-Directives
    pub fn specified() -> Vec<Self> {
        vec![
            Self::new_include(),
            Self::new_skip(),
            Self::new_deprecated(),
            Self::new_specified_by(),
        ]
    }

    /// Builds the `@include(if: Boolean!)` directive.
    pub fn new_include() -> Self {
        Self::new(
            "include",
            &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            &[Argument::new("if", Type::named("Boolean").non_null())
                .description("Included when true.")],
            false,
        )
        .description(
            "Directs the executor to include this field or fragment only when the `if` \
             argument is true.",
        )
    }

    /// Builds the `@skip(if: Boolean!)` directive.
    pub fn new_skip() -> Self {
        Self::new(
            "skip",
            &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            &[Argument::new("if", Type::named("Boolean").non_null())
                .description("Skipped when true.")],
            false,
        )
        .description(
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
        )
    }

    /// Builds the `@deprecated(reason: String)` directive.
    pub fn new_deprecated() -> Self {
        Self::new(
            "deprecated",
            &[
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            &[Argument::new("reason", Type::named("String"))
                .default_value(InputValue::String("No longer supported".into()))],
            false,
        )
        .description("Marks an element of a GraphQL schema as no longer supported.")
    }

    /// Builds the `@specifiedBy(url: String!)` directive.
    pub fn new_specified_by() -> Self {
        Self::new(
            "specifiedBy",
            &[DirectiveLocation::Scalar],
            &[Argument::new("url", Type::named("String").non_null())],
            false,
        )
        .description("Exposes a URL that specifies the behavior of this scalar.")
    }

    /// Sets the `description` of this [`DirectiveType`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl DirectiveLocation {
    /// All locations, in their introspection declaration order.
    pub const ALL: [Self; 19] = [
        Self::Query,
        Self::Mutation,
        Self::Subscription,
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::VariableDefinition,
        Self::Schema,
        Self::Scalar,
        Self::Object,
        Self::FieldDefinition,
        Self::ArgumentDefinition,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::EnumValue,
        Self::InputObject,
        Self::InputFieldDefinition,
    ];

    /// Name of this location as exposed by the `__DirectiveLocation`
    /// introspection enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::{
        ast::Type,
        schema::meta::{Field, ObjectMeta, ScalarMeta},
    };

    use super::{DirectiveType, OperationType, SchemaConfig, SchemaError, SchemaType};

    fn query() -> Arc<crate::MetaType> {
        Arc::new(
            ObjectMeta::new("Query", &[Field::new("hello", Type::named("String"))]).into_meta(),
        )
    }

    #[test]
    fn adds_builtins_after_configured_types() {
        let schema = SchemaType::new(SchemaConfig {
            query: Some("Query".into()),
            types: vec![query()],
            ..SchemaConfig::default()
        })
        .unwrap();

        let names = schema
            .type_list()
            .map(|t| t.name().as_str())
            .collect::<Vec<_>>();
        assert_eq!(names[0], "Query");
        assert!(names.contains(&"__Schema"));
        assert!(names.contains(&"String"));
        assert!(names.contains(&"Boolean"));
        assert!(!names.contains(&"Int"));

        let directives = schema
            .directive_list()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(directives, ["include", "skip", "deprecated", "specifiedBy"]);
    }

    #[test]
    fn root_type_is_shared_with_type_map() {
        let schema = SchemaType::new(SchemaConfig {
            query: Some("Query".into()),
            types: vec![query()],
            ..SchemaConfig::default()
        })
        .unwrap();

        assert!(Arc::ptr_eq(
            schema.root_type(OperationType::Query).unwrap(),
            schema.type_by_name("Query").unwrap(),
        ));
        assert!(schema.mutation_type().is_none());
    }

    #[test]
    fn rejects_unknown_root_type() {
        let err = SchemaType::new(SchemaConfig {
            mutation: Some("Mutation".into()),
            ..SchemaConfig::default()
        })
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::UnknownRootType {
                operation: OperationType::Mutation,
                name: "Mutation".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Root mutation type \"Mutation\" not found in schema",
        );
    }

    #[test]
    fn rejects_duplicates() {
        let err = SchemaType::new(SchemaConfig {
            types: vec![
                Arc::new(ScalarMeta::new("Date").into_meta()),
                Arc::new(ScalarMeta::new("Date").into_meta()),
            ],
            ..SchemaConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateType("Date".into()));

        let err = SchemaType::new(SchemaConfig {
            directives: Some(vec![DirectiveType::new_skip(), DirectiveType::new_skip()]),
            ..SchemaConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, SchemaError::DuplicateDirective("skip".into()));
    }

    #[test]
    fn config_round_trip_shares_types() {
        let schema = SchemaType::new(SchemaConfig {
            description: Some("Greetings".into()),
            query: Some("Query".into()),
            types: vec![query()],
            ..SchemaConfig::default()
        })
        .unwrap();
        let rebuilt = SchemaType::new(schema.to_config()).unwrap();

        assert_eq!(rebuilt.type_count(), schema.type_count());
        assert_eq!(rebuilt.description().map(|d| d.as_str()), Some("Greetings"));
        assert!(Arc::ptr_eq(
            rebuilt.query_type().unwrap(),
            schema.query_type().unwrap(),
        ));
    }
}
