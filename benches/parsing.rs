use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use iot_record::parse;

const MANIFEST: &str = "{cepid=CEP010, filename=orcatech_data/json/home_2001/2022-03-11_2022-03-12/nyce-w-6975_26288.json, filecount=58, loaddate=2022-03-12T04:32:30.124Z}";

const MIXED: &str = r#"{cepid=CEP010, dict={this=thing, hello=world, one=2.0}, listicle=[my, list, of, craps, 1.2, 3], bob="And Bob is \" my uncle", filecount=58, label with spaces=3.14, bool_thing=false, happy_little null=null, loaddate=2022-03-12T04:32:30.124Z}"#;

fn benchmark_parse_manifest(c: &mut Criterion) {
    c.bench_function("parse_manifest", |b| b.iter(|| parse(black_box(MANIFEST))));
}

fn benchmark_parse_mixed(c: &mut Criterion) {
    c.bench_function("parse_mixed_record", |b| b.iter(|| parse(black_box(MIXED))));
}

fn benchmark_parse_wide_dict(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_wide_dict");

    for size in [10, 100, 1000].iter() {
        let pairs: Vec<String> = (0..*size)
            .map(|i| format!("field{}={}", i, i))
            .collect();
        let input = format!("{{{}}}", pairs.join(", "));

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse(black_box(input)));
        });
    }

    group.finish();
}

fn benchmark_parse_long_list(c: &mut Criterion) {
    let items: Vec<String> = (0..1000)
        .map(|i| {
            if i % 3 == 0 {
                format!("{}.5", i)
            } else {
                format!("sensor reading {}", i)
            }
        })
        .collect();
    let input = format!("[{}]", items.join(", "));

    c.bench_function("parse_long_list", |b| b.iter(|| parse(black_box(&input))));
}

criterion_group!(
    benches,
    benchmark_parse_manifest,
    benchmark_parse_mixed,
    benchmark_parse_wide_dict,
    benchmark_parse_long_list
);
criterion_main!(benches);
