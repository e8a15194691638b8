use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use evgasm_core::ArchDecoder;
use evgasm_evergreen::{ClauseDecoder, ClauseKind};
use evgasm_test::test::Parser;

const SOURCES: &[(&str, ClauseKind, &str, &str)] = &[
    ("cf", ClauseKind::Cf, "", include_str!("../tests/cf.test")),
    ("alu", ClauseKind::Alu, "--", include_str!("../tests/alu.test")),
    ("tc", ClauseKind::Tc, "", include_str!("../tests/tc.test")),
];

fn bench_impl<const PRINT: bool>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for (name, kind, bundle_end, source) in SOURCES {
        let code = Parser::parse_all(source, bundle_end).unwrap();
        let mut decoder = ClauseDecoder::new(*kind);
        let mut lines = Vec::new();

        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &code, |b, code| {
            b.iter(|| {
                let mut offset = 0;
                let mut count = 0;
                while offset < code.len() {
                    match decoder.decode(&code[offset..]) {
                        Ok(len) => {
                            count += 1;
                            offset += len;
                            if PRINT {
                                lines.clear();
                                decoder.print(&mut lines).unwrap();
                            }
                        }
                        Err(_) => panic!(),
                    }
                }
                count
            })
        });
    }
}

fn evergreen_bench(c: &mut Criterion) {
    bench_impl::<false>(c, "decode");
    bench_impl::<true>(c, "print");
}

criterion_group!(benches, evergreen_bench);
criterion_main!(benches);
