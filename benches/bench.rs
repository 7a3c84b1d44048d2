use std::sync::Arc;

use bencher::{Bencher, benchmark_group, benchmark_main};
use graphql_lexsort::{
    Comparator, CompareOptions, SchemaConfig, SchemaType, Type, lexicographic_sort_schema_with,
    meta::{Argument, EnumMeta, EnumValue, Field, ObjectMeta},
};

/// Builds a schema of `count` objects, each referencing its neighbours, with
/// fields, arguments and enum values declared in reverse order.
fn wide_schema(count: usize) -> SchemaType {
    let mut types = (0..count)
        .rev()
        .map(|i| {
            let fields = (0..20)
                .rev()
                .map(|f| {
                    Field::new(
                        format!("field{f}"),
                        Type::named(format!("Object{}", (i + f) % count)),
                    )
                    .argument(Argument::new("last", Type::named("Int")))
                    .argument(Argument::new("first", Type::named("Int")))
                })
                .collect::<Vec<_>>();
            Arc::new(ObjectMeta::new(format!("Object{i}"), &fields).into_meta())
        })
        .collect::<Vec<_>>();

    let values = (0..100)
        .rev()
        .map(|v| EnumValue::new(format!("VALUE_{v}")))
        .collect::<Vec<_>>();
    types.push(Arc::new(EnumMeta::new("Kind", &values).into_meta()));
    types.extend(
        graphql_lexsort::introspection::specified_scalar_types()
            .into_iter()
            .filter(|s| s.name() == "Int")
            .map(Arc::new),
    );

    SchemaType::new(SchemaConfig {
        query: Some("Object0".into()),
        types,
        ..SchemaConfig::default()
    })
    .unwrap()
}

fn sort_code_point(b: &mut Bencher) {
    let schema = wide_schema(500);
    let comparator = Comparator::code_point();

    b.iter(|| lexicographic_sort_schema_with(&schema, &comparator));
}

fn sort_collated(b: &mut Bencher) {
    let schema = wide_schema(500);
    let comparator = Comparator::new(&CompareOptions {
        locales: vec!["en".into()],
        ..CompareOptions::default()
    })
    .unwrap();

    b.iter(|| lexicographic_sort_schema_with(&schema, &comparator));
}

benchmark_group!(sorting, sort_code_point, sort_collated);
benchmark_main!(sorting);
