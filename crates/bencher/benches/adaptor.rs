use std::hint::black_box;

use bencher::TestCase;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use futures::executor::block_on;
use micro_adaptor::{adapt_with_engine, to_compat, EngineConfig};

static SMALL_BODY: &[u8] = b"hello world";
static LARGE_BODY: &[u8] = &[b'x'; 256 * 1024];

static BROWSER_HEADERS: &[(&str, &str)] = &[
    ("Host", "127.0.0.1:8080"),
    ("Connection", "keep-alive"),
    ("Cache-Control", "max-age=0"),
    ("User-Agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko)"),
    ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Accept-Language", "zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"),
    ("Content-Length", "11"),
];

fn create_test_cases() -> Vec<TestCase> {
    vec![
        TestCase::small("fixed_small", &[("Host", "127.0.0.1:8080"), ("Content-Length", "11")], SMALL_BODY),
        TestCase::normal("fixed_browser_headers", BROWSER_HEADERS, SMALL_BODY),
        TestCase::normal("chunked", &[("Content-Length", "11"), ("Transfer-Encoding", "chunked")], SMALL_BODY),
        TestCase::small("no_framing", &[("Host", "127.0.0.1:8080")], SMALL_BODY),
        TestCase::large("fixed_large", &[("Content-Length", "262144")], LARGE_BODY),
    ]
}

fn benchmark_adapt(criterion: &mut Criterion) {
    let engine = EngineConfig::default();
    let mut group = criterion.benchmark_group("adapt");

    for case in create_test_cases() {
        group.throughput(Throughput::Bytes(case.body().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter_batched_ref(
                || case.external_request(),
                |req| {
                    let request = block_on(adapt_with_engine(&engine, req)).expect("input should be a valid request");
                    black_box(request);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_compat(criterion: &mut Criterion) {
    let engine = EngineConfig::default();
    let mut group = criterion.benchmark_group("compat");

    for case in create_test_cases() {
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &case, |b, case| {
            b.iter_batched(
                || {
                    let mut req = case.external_request();
                    block_on(adapt_with_engine(&engine, &mut req)).expect("input should be a valid request")
                },
                |request| {
                    let compat = block_on(to_compat(request)).expect("request should convert back");
                    black_box(compat);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(adaptor, benchmark_adapt, benchmark_compat);
criterion_main!(adaptor);
