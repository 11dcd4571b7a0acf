use criterion::{criterion_group, criterion_main, Criterion};
use std::path::Path;

use mailpeek::model::part::MessagePart;

fn fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(path).unwrap()
}

fn bench_parse_and_resolve(c: &mut Criterion) {
    let raw = fixture("related.eml");

    c.bench_function("parse_and_resolve_related", |b| {
        b.iter(|| {
            let msg = mailpeek::parser::mime::parse_message(&raw).unwrap();
            mailpeek::resolve::resolve(msg.root_part())
        })
    });
}

fn bench_resolve_wide_mixed(c: &mut Criterion) {
    let mut children: Vec<MessagePart> = (0..200)
        .map(|i| MessagePart::leaf("application/octet-stream", format!("blob {i}")))
        .collect();
    children.push(MessagePart::leaf("text/plain", "finally some text"));
    let root = MessagePart::container("multipart/mixed", children);

    c.bench_function("resolve_wide_mixed", |b| {
        b.iter(|| mailpeek::resolve::resolve(&root))
    });
}

criterion_group!(benches, bench_parse_and_resolve, bench_resolve_wide_mixed);
criterion_main!(benches);
