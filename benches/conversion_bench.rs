//! Criterion benchmarks for fixint
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixint::convert::{from_bytes, get_bytes, stream_read, stream_write};
use fixint::{Int128, Int16, Int64, SliceReader, UInt32, VecWriter};

fn bench_get_bytes(c: &mut Criterion) {
    c.bench_function("get_bytes_int16", |b| {
        b.iter(|| {
            let window = get_bytes(black_box(&Int16::new(-100)));
            black_box(window);
        });
    });

    c.bench_function("get_bytes_int64", |b| {
        b.iter(|| {
            let window = get_bytes(black_box(&Int64::MIN));
            black_box(window);
        });
    });

    c.bench_function("get_bytes_int128", |b| {
        b.iter(|| {
            let window = get_bytes(black_box(&Int128::new(-2)));
            black_box(window);
        });
    });

    // baseline without the provider indirection
    c.bench_function("to_le_bytes_i64", |b| {
        b.iter(|| {
            let bytes = black_box(i64::MIN).to_le_bytes();
            black_box(bytes);
        });
    });
}

fn bench_from_bytes(c: &mut Criterion) {
    let int16 = get_bytes(&Int16::new(-100));
    let int64 = get_bytes(&Int64::MIN);

    c.bench_function("from_bytes_int16", |b| {
        b.iter(|| {
            let value = from_bytes::<Int16>(black_box(&int16)).unwrap();
            black_box(value);
        });
    });

    c.bench_function("from_bytes_int64", |b| {
        b.iter(|| {
            let value = from_bytes::<Int64>(black_box(&int64)).unwrap();
            black_box(value);
        });
    });
}

fn bench_stream_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_write_uint32");

    for count in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut buf = Vec::with_capacity(count * 4);
            b.iter(|| {
                buf.clear();
                let mut writer = VecWriter::new(&mut buf);
                for i in 0..count {
                    stream_write(&mut writer, &UInt32::new(i as u32)).unwrap();
                }
                black_box(buf.len());
            });
        });
    }

    group.finish();
}

fn bench_stream_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_read_uint32");

    for count in [16usize, 256, 4096] {
        let mut buf = Vec::with_capacity(count * 4);
        let mut writer = VecWriter::new(&mut buf);
        for i in 0..count {
            stream_write(&mut writer, &UInt32::new(i as u32)).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), &buf, |b, buf| {
            b.iter(|| {
                let mut reader = SliceReader::new(&buf[..]);
                for _ in 0..count {
                    let value = stream_read::<UInt32, _>(&mut reader).unwrap();
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_get_bytes,
    bench_from_bytes,
    bench_stream_write,
    bench_stream_read
);
criterion_main!(benches);
