use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tempfile::TempDir;

use contact_book::{
    contact::ContactDraft,
    persist::{ContactStore, sqlite::SqliteContactStore},
};

fn seeded(dir: &TempDir, n: usize) -> SqliteContactStore {
    let store = SqliteContactStore::open(dir.path().join("bench.db")).expect("open sqlite");
    for i in 0..n {
        store
            .insert(ContactDraft::new(format!("Contact {i}"), format!("555-{i:04}")))
            .expect("insert");
    }
    store
}

fn bench_file_inserts(c: &mut Criterion) {
    c.bench_function("file_insert_100", |b| {
        b.iter(|| {
            let tmp = TempDir::new().expect("tmp");
            let _ = seeded(&tmp, 100);
        });
    });
}

fn bench_list_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all");
    for n in [100usize, 1_000, 5_000] {
        let tmp = TempDir::new().expect("tmp");
        let store = seeded(&tmp, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| store.list_all().expect("list"));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let tmp = TempDir::new().expect("tmp");
    let store = seeded(&tmp, 5_000);
    c.bench_function("search_5k", |b| {
        b.iter(|| store.search("act 42").expect("search"));
    });
}

criterion_group!(benches, bench_file_inserts, bench_list_all, bench_search);
criterion_main!(benches);
