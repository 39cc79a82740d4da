use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrucache::{LruCache, SharedLruCache};

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        for i in 0..1000u64 {
            cache.put(i, vec![b'x'; 64]);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.bench_function("peek_hit", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        for i in 0..1000u64 {
            cache.put(i, vec![b'x'; 64]);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.peek(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_put_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_with_eviction", |b| {
        // Every insert is a new key once warm, so each put evicts
        let mut cache = LruCache::new(100).unwrap();
        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.put(counter, counter));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write_shared", |b| {
        let cache = SharedLruCache::new(1000).unwrap();
        for i in 0..100u64 {
            cache.put(i, i);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 100)));
            } else {
                black_box(cache.put(counter, counter));
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_put_evicting, bench_mixed_50_50);
criterion_main!(benches);
