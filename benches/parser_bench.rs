//! Performance benchmarks for request parsing and frame reassembly.
//!
//! Run with:
//! ```sh
//! cargo bench --bench parser_bench
//! ```

use bytes::Bytes;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use depot_protocol::{FrameBuffer, parse_request};
use std::hint::black_box;

/// Benchmark parsing a minimal query request.
fn bench_parse_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_query");
    group.throughput(Throughput::Elements(1));

    let payload = Bytes::from_static(b"QUERY|pckg|");

    group.bench_function("query", |b| {
        b.iter(|| black_box(parse_request(black_box(&payload))));
    });

    group.finish();
}

/// Benchmark parsing an index request with a realistic dependency list.
fn bench_parse_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_index");
    group.throughput(Throughput::Elements(1));

    let payload = Bytes::from_static(
        b"INDEX|ceylon|tcpdump,cyrus-sasl,unixodbc,engine_pkcs11,jasper,aalib,sloccount,pixman",
    );

    group.bench_function("index_8_deps", |b| {
        b.iter(|| black_box(parse_request(black_box(&payload))));
    });

    group.finish();
}

/// Benchmark reassembling one request from a varying number of chunks.
fn bench_frame_reassembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_reassembly");
    group.throughput(Throughput::Elements(1));

    let wire: &[u8] = b"INDEX|pckg|dep1,dep2,dep3,dep4\n";

    for chunk_count in [1usize, 4, 16] {
        let parts: Vec<&[u8]> = wire.chunks(wire.len().div_ceil(chunk_count)).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_count),
            &parts,
            |b, parts| {
                b.iter(|| {
                    let mut buffer = FrameBuffer::new();
                    let mut frame = None;
                    for part in parts {
                        frame = buffer.feed(black_box(part));
                    }
                    black_box(frame)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_query,
    bench_parse_index,
    bench_frame_reassembly
);
criterion_main!(benches);
