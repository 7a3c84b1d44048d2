use std::sync::Arc;

use crate::{
    InputValue, Type, introspection,
    meta::{
        Argument, EnumMeta, EnumValue, Field, InputObjectMeta, InterfaceMeta, MetaType, ObjectMeta,
        ScalarMeta, UnionMeta,
    },
    schema::model::{DirectiveLocation, DirectiveType, SchemaConfig, SchemaType},
};

/// Builds the Star Wars schema.
///
/// Contains all three root operation types, interfaces implementing interfaces,
/// a self-referencing interface, mutually referencing objects, a union, enums,
/// an input object and a custom repeatable directive.
pub fn schema() -> SchemaType {
    SchemaType::new(config()).unwrap()
}

/// Builds the [`SchemaConfig`] of the Star Wars schema.
pub fn config() -> SchemaConfig {
    let mut types = vec![
        query(),
        review_input(),
        character(),
        episode(),
        starship(),
        droid(),
        search_result(),
        mutation(),
        length_unit(),
        node(),
        human(),
        review(),
        subscription(),
        named(),
        date(),
    ];
    types.extend(
        introspection::specified_scalar_types()
            .into_iter()
            .rev()
            .map(Arc::new),
    );

    SchemaConfig {
        description: Some("A long time ago in a galaxy far, far away.".into()),
        query: Some("Query".into()),
        mutation: Some("Mutation".into()),
        subscription: Some("Subscription".into()),
        types,
        directives: Some(vec![
            DirectiveType::new_skip(),
            cached(),
            DirectiveType::new_include(),
            DirectiveType::new_specified_by(),
            DirectiveType::new_deprecated(),
        ]),
    }
}

fn character_fields() -> Vec<Field> {
    vec![
        Field::new("name", Type::named("String")),
        Field::new("id", Type::named("ID").non_null()),
        Field::new("friends", Type::named("Character").list())
            .description("The friends of the character, or an empty list if they have none."),
        Field::new("appearsIn", Type::named("Episode").non_null().list().non_null()),
        Field::new("secretBackstory", Type::named("String"))
            .deprecated(Some("Nobody cares".into())),
    ]
}

fn query() -> Arc<MetaType> {
    Arc::new(
        ObjectMeta::new(
            "Query",
            &[
                Field::new("search", Type::named("SearchResult").non_null().list())
                    .argument(Argument::new("text", Type::named("String").non_null())),
                Field::new("hero", Type::named("Character")).argument(
                    Argument::new("episode", Type::named("Episode"))
                        .description("If omitted, returns the hero of the whole saga."),
                ),
                Field::new("human", Type::named("Human"))
                    .argument(Argument::new("lang", Type::named("String")))
                    .argument(Argument::new("id", Type::named("ID").non_null())),
                Field::new("droid", Type::named("Droid"))
                    .argument(Argument::new("id", Type::named("ID").non_null())),
                Field::new("node", Type::named("Node"))
                    .argument(Argument::new("id", Type::named("ID").non_null())),
                Field::new("starship", Type::named("Starship"))
                    .argument(Argument::new("id", Type::named("ID").non_null())),
            ],
        )
        .into_meta(),
    )
}

fn mutation() -> Arc<MetaType> {
    Arc::new(
        ObjectMeta::new(
            "Mutation",
            &[Field::new("createReview", Type::named("Review"))
                .argument(Argument::new("review", Type::named("ReviewInput").non_null()))
                .argument(Argument::new("episode", Type::named("Episode")))],
        )
        .into_meta(),
    )
}

fn subscription() -> Arc<MetaType> {
    Arc::new(
        ObjectMeta::new(
            "Subscription",
            &[
                Field::new("reviewAdded", Type::named("Review").non_null())
                    .argument(Argument::new("episode", Type::named("Episode"))),
                Field::new("heroChanged", Type::named("Character").non_null()),
            ],
        )
        .into_meta(),
    )
}

fn named() -> Arc<MetaType> {
    Arc::new(
        InterfaceMeta::new("Named", &[Field::new("name", Type::named("String"))])
            .description("Anything having a name.")
            .into_meta(),
    )
}

fn node() -> Arc<MetaType> {
    Arc::new(
        InterfaceMeta::new("Node", &[Field::new("id", Type::named("ID").non_null())])
            .description("An object with an ID.")
            .into_meta(),
    )
}

fn character() -> Arc<MetaType> {
    Arc::new(
        InterfaceMeta::new("Character", &character_fields())
            .description("A character in the Star Wars Trilogy.")
            .interfaces(&[Type::named("Node"), Type::named("Named")])
            .into_meta(),
    )
}

fn human() -> Arc<MetaType> {
    let mut fields = character_fields();
    fields.push(
        Field::new("homePlanet", Type::named("String"))
            .description("The home planet of the human, or null if unknown."),
    );
    fields.push(Field::new("starships", Type::named("Starship").non_null().list()));
    fields.push(Field::new("born", Type::named("Date")));

    Arc::new(
        ObjectMeta::new("Human", &fields)
            .description("A humanoid creature in the Star Wars universe.")
            .interfaces(&[
                Type::named("Node"),
                Type::named("Named"),
                Type::named("Character"),
            ])
            .into_meta(),
    )
}

fn droid() -> Arc<MetaType> {
    let mut fields = character_fields();
    fields.insert(
        0,
        Field::new("primaryFunction", Type::named("String"))
            .description("The primary function of the droid."),
    );
    fields.push(Field::new("owner", Type::named("Human")));

    Arc::new(
        ObjectMeta::new("Droid", &fields)
            .description("A mechanical creature in the Star Wars universe.")
            .interfaces(&[
                Type::named("Character"),
                Type::named("Node"),
                Type::named("Named"),
            ])
            .into_meta(),
    )
}

fn starship() -> Arc<MetaType> {
    Arc::new(
        ObjectMeta::new(
            "Starship",
            &[
                Field::new("name", Type::named("String").non_null()),
                Field::new("length", Type::named("Float")).argument(
                    Argument::new("unit", Type::named("LengthUnit"))
                        .default_value(InputValue::Enum("METER".into())),
                ),
                Field::new("id", Type::named("ID").non_null()),
                Field::new("pilots", Type::named("Human").non_null().list().non_null()),
            ],
        )
        .interfaces(&[Type::named("Node")])
        .into_meta(),
    )
}

fn search_result() -> Arc<MetaType> {
    Arc::new(
        UnionMeta::new(
            "SearchResult",
            &[
                Type::named("Starship"),
                Type::named("Human"),
                Type::named("Droid"),
            ],
        )
        .into_meta(),
    )
}

fn episode() -> Arc<MetaType> {
    Arc::new(
        EnumMeta::new(
            "Episode",
            &[
                EnumValue::new("NEWHOPE").description("Released in 1977."),
                EnumValue::new("EMPIRE").description("Released in 1980."),
                EnumValue::new("JEDI").description("Released in 1983."),
                EnumValue::new("CLONES").deprecated(Some("Prequels are not canon here".into())),
            ],
        )
        .description("One of the films in the Star Wars Trilogy.")
        .into_meta(),
    )
}

fn length_unit() -> Arc<MetaType> {
    Arc::new(
        EnumMeta::new("LengthUnit", &[EnumValue::new("METER"), EnumValue::new("FOOT")])
            .into_meta(),
    )
}

fn review_input() -> Arc<MetaType> {
    Arc::new(
        InputObjectMeta::new(
            "ReviewInput",
            &[
                Argument::new("stars", Type::named("Int").non_null()),
                Argument::new("commentary", Type::named("String")),
                Argument::new("tags", Type::named("String").non_null().list())
                    .default_value(InputValue::List(vec![])),
            ],
        )
        .into_meta(),
    )
}

fn review() -> Arc<MetaType> {
    Arc::new(
        ObjectMeta::new(
            "Review",
            &[
                Field::new("stars", Type::named("Int").non_null()),
                Field::new("episode", Type::named("Episode")),
                Field::new("commentary", Type::named("String")),
            ],
        )
        .into_meta(),
    )
}

fn date() -> Arc<MetaType> {
    Arc::new(
        ScalarMeta::new("Date")
            .description("Galactic Standard Calendar date.")
            .specified_by_url("https://starwars.fandom.com/wiki/Galactic_Standard_Calendar")
            .into_meta(),
    )
}

fn cached() -> DirectiveType {
    DirectiveType::new(
        "cached",
        &[
            DirectiveLocation::Object,
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::Interface,
        ],
        &[
            Argument::new("ttl", Type::named("Int").non_null()),
            Argument::new("scope", Type::named("String"))
                .default_value(InputValue::String("PUBLIC".into())),
        ],
        true,
    )
    .description("Caches the result of the annotated element.")
}
