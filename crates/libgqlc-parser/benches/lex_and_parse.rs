use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgqlc_parser::lexer::Lexer;
use libgqlc_parser::parse_document;

const HERO_QUERY: &str = r#"
query HeroComparison($first: Int = 3, $episode: Episode!) {
  leftComparison: hero(episode: $episode) {
    ...comparisonFields
  }
  rightComparison: hero(episode: JEDI) {
    ...comparisonFields
  }
}

fragment comparisonFields on Character {
  name
  friendsConnection(first: $first) {
    totalCount
    edges {
      node {
        name
        ... on Droid { primaryFunction }
        ... on Human { height(unit: METER) }
      }
    }
  }
}
"#;

fn synthetic_wide_query(fields: usize) -> String {
    let mut source = String::from("query Wide {\n");
    for i in 0..fields {
        source.push_str(&format!(
            "  f{i}: field(id: {i}, tags: [\"a\", \"b\"], filter: {{ min: {i}.5 }}) {{ id name }}\n",
        ));
    }
    source.push_str("}\n");
    source
}

// ─── Lexing ──────────────────────────────────────────────

fn lex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lex");
    let wide = synthetic_wide_query(500);

    for (label, source) in [("hero", HERO_QUERY), ("wide (500 fields)", wide.as_str())] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                let count = Lexer::new(black_box(source))
                    .filter(|token| token.is_ok())
                    .count();
                black_box(count)
            })
        });
    }
    group.finish();
}

// ─── Tree building ───────────────────────────────────────

fn parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let wide = synthetic_wide_query(500);

    for (label, source) in [("hero", HERO_QUERY), ("wide (500 fields)", wide.as_str())] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| black_box(parse_document(black_box(source)).map(|tree| tree.len())))
        });
    }
    group.finish();
}

criterion_group!(benches, lex, parse);
criterion_main!(benches);
