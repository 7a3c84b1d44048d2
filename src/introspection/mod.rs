//! Built-in types every schema carries: the introspection system and the
//! specified scalars.
//!
//! Introspection types keep their fields in declaration order. Tooling
//! consuming introspection results relies on that order, so sorting leaves
//! these types untouched.

use crate::{
    ast::{InputValue, Type},
    schema::{
        meta::{Argument, EnumMeta, EnumValue, Field, MetaType, ObjectMeta, ScalarMeta, TypeKind},
        model::DirectiveLocation,
    },
};

/// Names of the types making up GraphQL's introspection system.
pub const INTROSPECTION_TYPE_NAMES: [&str; 8] = [
    "__Schema",
    "__Directive",
    "__DirectiveLocation",
    "__Type",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__TypeKind",
];

/// Returns true if `name` is one of the introspection-reserved types.
pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPE_NAMES.contains(&name)
}

/// Builds the [specified scalars][0]: `Int`, `Float`, `String`, `Boolean` and
/// `ID`.
///
/// [0]: https://spec.graphql.org/October2021#sec-Scalars.Built-in-Scalars
pub fn specified_scalar_types() -> Vec<MetaType> {
    vec![
        ScalarMeta::new("Int")
            .description(
                "The `Int` scalar type represents non-fractional signed whole numeric values. \
                 Int can represent values between -(2^31) and 2^31 - 1.",
            )
            .into_meta(),
        ScalarMeta::new("Float")
            .description(
                "The `Float` scalar type represents signed double-precision fractional values \
                 as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
            )
            .into_meta(),
        ScalarMeta::new("String")
            .description(
                "The `String` scalar type represents textual data, represented as UTF-8 \
                 character sequences.",
            )
            .into_meta(),
        ScalarMeta::new("Boolean")
            .description("The `Boolean` scalar type represents `true` or `false`.")
            .into_meta(),
        ScalarMeta::new("ID")
            .description(
                "The `ID` scalar type represents a unique identifier, often used to refetch \
                 an object or as key for a cache.",
            )
            .into_meta(),
    ]
}

/// Builds all the introspection types, in the order of
/// [`INTROSPECTION_TYPE_NAMES`].
pub fn introspection_types() -> Vec<MetaType> {
    vec![
        schema_type(),
        directive_type(),
        directive_location_type(),
        type_type(),
        field_type(),
        input_value_type(),
        enum_value_type(),
        type_kind_type(),
    ]
}

fn named(name: &'static str) -> Type {
    Type::named(name)
}

fn non_null_list_of(name: &'static str) -> Type {
    named(name).non_null().list().non_null()
}

fn include_deprecated() -> Argument {
    Argument::new("includeDeprecated", named("Boolean")).default_value(InputValue::Boolean(false))
}

fn deprecation_fields() -> [Field; 2] {
    [
        Field::new("isDeprecated", named("Boolean").non_null()),
        Field::new("deprecationReason", named("String")),
    ]
}

fn schema_type() -> MetaType {
    ObjectMeta::new(
        "__Schema",
        &[
            Field::new("description", named("String")),
            Field::new("types", non_null_list_of("__Type"))
                .description("A list of all types supported by this server."),
            Field::new("queryType", named("__Type").non_null())
                .description("The type that query operations will be rooted at."),
            Field::new("mutationType", named("__Type")).description(
                "If this server supports mutation, the type that mutation operations will be \
                 rooted at.",
            ),
            Field::new("subscriptionType", named("__Type")).description(
                "If this server support subscription, the type that subscription operations \
                 will be rooted at.",
            ),
            Field::new("directives", non_null_list_of("__Directive"))
                .description("A list of all directives supported by this server."),
        ],
    )
    .description(
        "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
         available types and directives on the server, as well as the entry points for \
         query, mutation, and subscription operations.",
    )
    .into_meta()
}

fn directive_type() -> MetaType {
    ObjectMeta::new(
        "__Directive",
        &[
            Field::new("name", named("String").non_null()),
            Field::new("description", named("String")),
            Field::new("isRepeatable", named("Boolean").non_null()),
            Field::new("locations", non_null_list_of("__DirectiveLocation")),
            Field::new("args", non_null_list_of("__InputValue")).argument(include_deprecated()),
        ],
    )
    .into_meta()
}

fn directive_location_type() -> MetaType {
    let values = DirectiveLocation::ALL
        .iter()
        .map(|l| EnumValue::new(l.as_str()))
        .collect::<Vec<_>>();
    EnumMeta::new("__DirectiveLocation", &values)
        .description(
            "A Directive can be adjacent to many parts of the GraphQL language, a \
             __DirectiveLocation describes one such possible adjacencies.",
        )
        .into_meta()
}

fn type_type() -> MetaType {
    ObjectMeta::new(
        "__Type",
        &[
            Field::new("kind", named("__TypeKind").non_null()),
            Field::new("name", named("String")),
            Field::new("description", named("String")),
            Field::new("specifiedByURL", named("String")),
            Field::new("fields", named("__Field").non_null().list())
                .argument(include_deprecated()),
            Field::new("interfaces", named("__Type").non_null().list()),
            Field::new("possibleTypes", named("__Type").non_null().list()),
            Field::new("enumValues", named("__EnumValue").non_null().list())
                .argument(include_deprecated()),
            Field::new("inputFields", named("__InputValue").non_null().list())
                .argument(include_deprecated()),
            Field::new("ofType", named("__Type")),
        ],
    )
    .into_meta()
}

fn field_type() -> MetaType {
    let mut fields = vec![
        Field::new("name", named("String").non_null()),
        Field::new("description", named("String")),
        Field::new("args", non_null_list_of("__InputValue")).argument(include_deprecated()),
        Field::new("type", named("__Type").non_null()),
    ];
    fields.extend(deprecation_fields());
    ObjectMeta::new("__Field", &fields).into_meta()
}

fn input_value_type() -> MetaType {
    let mut fields = vec![
        Field::new("name", named("String").non_null()),
        Field::new("description", named("String")),
        Field::new("type", named("__Type").non_null()),
        Field::new("defaultValue", named("String")).description(
            "A GraphQL-formatted string representing the default value for this input value.",
        ),
    ];
    fields.extend(deprecation_fields());
    ObjectMeta::new("__InputValue", &fields).into_meta()
}

fn enum_value_type() -> MetaType {
    let mut fields = vec![
        Field::new("name", named("String").non_null()),
        Field::new("description", named("String")),
    ];
    fields.extend(deprecation_fields());
    ObjectMeta::new("__EnumValue", &fields).into_meta()
}

fn type_kind_type() -> MetaType {
    let values = TypeKind::ALL
        .iter()
        .map(|k| EnumValue::new(k.as_str()))
        .collect::<Vec<_>>();
    EnumMeta::new("__TypeKind", &values)
        .description("An enum describing what kind of type a given `__Type` is.")
        .into_meta()
}
