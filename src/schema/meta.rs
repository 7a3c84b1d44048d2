//! Types used to describe a `GraphQL` schema

use std::fmt;

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Type},
    introspection,
};

/// Whether an item is deprecated, with context.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The field/variant is not deprecated.
    #[default]
    Current,
    /// The field/variant is deprecated, with an optional reason
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the item is deprecated.
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Current => false,
            Self::Deprecated(_) => true,
        }
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Current => None,
            Self::Deprecated(rsn) => rsn.as_deref(),
        }
    }
}

/// GraphQL type kind
///
/// The GraphQL specification defines a number of type kinds - the meta type
/// of a type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    /// ## Scalar types
    ///
    /// Scalar types appear as the leaf nodes of GraphQL queries.
    Scalar,

    /// ## Object types
    ///
    /// Objects have fields and can implement interfaces.
    Object,

    /// ## Interface types
    ///
    /// Interface types are used to represent overlapping fields between
    /// multiple types, and can be queried for their concrete type.
    Interface,

    /// ## Union types
    ///
    /// Unions are similar to interfaces but can not contain any fields on
    /// their own.
    Union,

    /// ## Enum types
    ///
    /// Like scalars, enum types appear as the leaf nodes of GraphQL queries.
    Enum,

    /// ## Input objects
    ///
    /// Represents complex values provided in queries _into_ the system.
    InputObject,

    /// ## List types
    List,

    /// ## Non-null types
    NonNull,
}

impl TypeKind {
    /// All kinds, in their introspection declaration order.
    pub const ALL: [Self; 8] = [
        Self::Scalar,
        Self::Object,
        Self::Interface,
        Self::Union,
        Self::Enum,
        Self::InputObject,
        Self::List,
        Self::NonNull,
    ];

    /// Name of this kind as exposed by the `__TypeKind` introspection enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar type metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub specified_by_url: Option<ArcStr>,
}

/// Object type metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
}

/// Enum type metadata
#[derive(Clone, Debug, PartialEq)]
pub struct EnumMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: Vec<EnumValue>,
}

/// Interface type metadata
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
}

/// Union type metadata
#[derive(Clone, Debug, PartialEq)]
pub struct UnionMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub of_type_names: Vec<ArcStr>,
}

/// Input object metadata
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: Vec<Argument>,
}

/// A placeholder for a type that was named but never defined
///
/// A schema holding a placeholder is not well-formed; operations walking the
/// schema report it instead of guessing its shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderMeta {
    #[doc(hidden)]
    pub name: ArcStr,
}

/// Generic type metadata
#[derive(Clone, Debug, PartialEq)]
pub enum MetaType {
    #[doc(hidden)]
    Scalar(ScalarMeta),
    #[doc(hidden)]
    Object(ObjectMeta),
    #[doc(hidden)]
    Enum(EnumMeta),
    #[doc(hidden)]
    Interface(InterfaceMeta),
    #[doc(hidden)]
    Union(UnionMeta),
    #[doc(hidden)]
    InputObject(InputObjectMeta),
    #[doc(hidden)]
    Placeholder(PlaceholderMeta),
}

/// Metadata for a field
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arguments: Option<Vec<Argument>>,
    #[doc(hidden)]
    pub field_type: Type,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
}

/// Metadata for an argument to a field, or for a field of an input object
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub default_value: Option<InputValue>,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
}

/// Metadata for a single value in an enum
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    /// The name of the enum value
    ///
    /// This is the string literal representation of the enum in responses.
    pub name: ArcStr,
    /// The optional description of the enum value.
    ///
    /// Note: this is not the description of the enum itself; it's the
    /// description of this enum _value_.
    pub description: Option<ArcStr>,
    /// Whether the field is deprecated or not, with an optional reason.
    pub deprecation_status: DeprecationStatus,
}

impl MetaType {
    /// Access the name of the type
    pub fn name(&self) -> &ArcStr {
        match self {
            Self::Scalar(ScalarMeta { name, .. })
            | Self::Object(ObjectMeta { name, .. })
            | Self::Enum(EnumMeta { name, .. })
            | Self::Interface(InterfaceMeta { name, .. })
            | Self::Union(UnionMeta { name, .. })
            | Self::InputObject(InputObjectMeta { name, .. })
            | Self::Placeholder(PlaceholderMeta { name }) => name,
        }
    }

    /// Access the description of the type, if applicable
    ///
    /// Placeholders don't have descriptions.
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { description, .. })
            | Self::Object(ObjectMeta { description, .. })
            | Self::Enum(EnumMeta { description, .. })
            | Self::Interface(InterfaceMeta { description, .. })
            | Self::Union(UnionMeta { description, .. })
            | Self::InputObject(InputObjectMeta { description, .. }) => description.as_ref(),
            Self::Placeholder(_) => None,
        }
    }

    /// Accesses the [specification URL][0], if applicable.
    ///
    /// Only custom GraphQL scalars can have a [specification URL][0].
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    pub fn specified_by_url(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta {
                specified_by_url, ..
            }) => specified_by_url.as_ref(),
            _ => None,
        }
    }

    /// Construct a `TypeKind` for a given type
    ///
    /// Returns `None` for placeholders, which have no kind yet.
    pub fn type_kind(&self) -> Option<TypeKind> {
        match self {
            Self::Scalar(_) => Some(TypeKind::Scalar),
            Self::Object(_) => Some(TypeKind::Object),
            Self::Enum(_) => Some(TypeKind::Enum),
            Self::Interface(_) => Some(TypeKind::Interface),
            Self::Union(_) => Some(TypeKind::Union),
            Self::InputObject(_) => Some(TypeKind::InputObject),
            Self::Placeholder(_) => None,
        }
    }

    /// Access the fields of an object or interface
    ///
    /// Returns an empty slice for other types.
    pub fn fields(&self) -> &[Field] {
        match self {
            Self::Object(ObjectMeta { fields, .. })
            | Self::Interface(InterfaceMeta { fields, .. }) => fields,
            _ => &[],
        }
    }

    /// Access the names of the interfaces an object or interface implements
    ///
    /// Returns an empty slice for other types.
    pub fn interface_names(&self) -> &[ArcStr] {
        match self {
            Self::Object(ObjectMeta {
                interface_names, ..
            })
            | Self::Interface(InterfaceMeta {
                interface_names, ..
            }) => interface_names,
            _ => &[],
        }
    }

    /// Access a field's meta data given its name
    ///
    /// Only objects and interfaces have fields. This method always returns `None` for other types.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Access an input field's meta data given its name
    ///
    /// Only input objects have input fields. This method always returns `None` for other types.
    pub fn input_field_by_name(&self, name: &str) -> Option<&Argument> {
        match self {
            Self::InputObject(InputObjectMeta { input_fields, .. }) => {
                input_fields.iter().find(|f| f.name == name)
            }
            _ => None,
        }
    }

    /// Returns true if the type belongs to GraphQL's introspection system
    pub fn is_introspection(&self) -> bool {
        introspection::is_introspection_type(self.name())
    }
}

impl ScalarMeta {
    /// Builds a new [`ScalarMeta`] type with the specified `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the [specification URL][0] for this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set [specification URL][0].
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    #[must_use]
    pub fn specified_by_url(mut self, url: impl Into<ArcStr>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    /// Wraps this [`ScalarMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Scalar(self)
    }
}

impl ObjectMeta {
    /// Build a new [`ObjectMeta`] type with the specified `name` and `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: &[Field]) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.to_vec(),
            interface_names: vec![],
        }
    }

    /// Sets the `description` of this [`ObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the `interfaces` this [`ObjectMeta`] type implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: &[Type]) -> Self {
        self.interface_names = interfaces
            .iter()
            .map(|t| t.innermost_name().into())
            .collect();
        self
    }

    /// Wraps this [`ObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Object(self)
    }
}

impl EnumMeta {
    /// Build a new [`EnumMeta`] type with the specified `name` and possible
    /// `values`.
    pub fn new(name: impl Into<ArcStr>, values: &[EnumValue]) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.to_owned(),
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`EnumMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Enum(self)
    }
}

impl InterfaceMeta {
    /// Builds a new [`InterfaceMeta`] type with the specified `name` and
    /// `fields`.
    pub fn new(name: impl Into<ArcStr>, fields: &[Field]) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: fields.to_vec(),
            interface_names: Vec::new(),
        }
    }

    /// Sets the `description` of this [`InterfaceMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the `interfaces` this [`InterfaceMeta`] interface implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: &[Type]) -> Self {
        self.interface_names = interfaces
            .iter()
            .map(|t| t.innermost_name().into())
            .collect();
        self
    }

    /// Wraps this [`InterfaceMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Interface(self)
    }
}

impl UnionMeta {
    /// Build a new [`UnionMeta`] type with the specified `name` and possible
    /// [`Type`]s.
    pub fn new(name: impl Into<ArcStr>, of_types: &[Type]) -> Self {
        Self {
            name: name.into(),
            description: None,
            of_type_names: of_types.iter().map(|t| t.innermost_name().into()).collect(),
        }
    }

    /// Sets the `description` of this [`UnionMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`UnionMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Union(self)
    }
}

impl InputObjectMeta {
    /// Builds a new [`InputObjectMeta`] type with the specified `name` and
    /// `input_fields`.
    pub fn new(name: impl Into<ArcStr>, input_fields: &[Argument]) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_fields: input_fields.to_vec(),
        }
    }

    /// Set the `description` of this [`InputObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`InputObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::InputObject(self)
    }
}

impl PlaceholderMeta {
    /// Builds a new [`PlaceholderMeta`] standing in for the type `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self { name: name.into() }
    }

    /// Wraps this [`PlaceholderMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Placeholder(self)
    }
}

impl Field {
    /// Builds a new [`Field`] of the given [`Type`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>, field_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: None,
            field_type,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Set the `description` of this [`Field`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an `argument` to this [`Field`].
    ///
    /// Arguments are unordered and can't contain duplicates by name.
    #[must_use]
    pub fn argument(mut self, argument: Argument) -> Self {
        match self.arguments {
            None => {
                self.arguments = Some(vec![argument]);
            }
            Some(ref mut args) => {
                args.push(argument);
            }
        };
        self
    }

    /// Sets this [`Field`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }

    /// Iterates over the arguments of this [`Field`], if any.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().flatten()
    }
}

impl Argument {
    /// Builds a new [`Argument`] of the given [`Type`] with the given `name`.
    pub fn new(name: impl Into<ArcStr>, arg_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arg_type,
            default_value: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the `description` of this [`Argument`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default value of this [`Argument`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: InputValue) -> Self {
        self.default_value = Some(val);
        self
    }

    /// Sets this [`Argument`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }
}

impl EnumValue {
    /// Constructs a new [`EnumValue`] with the provided `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the `description` of this [`EnumValue`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets this [`EnumValue`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }
}
