//! 슬라이스 쿼리 벤치마크
//!
//! 샘플 데이터셋 + 합성 행을 대상으로 slice / range / indexed 쿼리 비교

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tutorial_core::client::{
    Cluster, IndexedSlicesQuery, Keyspace, RangeSlicesQuery, SliceQuery,
};
use tutorial_core::config::ClusterConfig;
use tutorial_core::dataset::{NPANXX, STATE_CITY, open_tutorial_store};

/// 테스트용 키스페이스 생성 및 합성 데이터 삽입
fn setup_keyspace(extra_rows: usize) -> (Cluster, Keyspace) {
    let config = ClusterConfig::default();
    let store = open_tutorial_store(&config.keyspace).unwrap();
    let npanxx = store
        .keyspace(&config.keyspace)
        .unwrap()
        .column_family(NPANXX)
        .unwrap();

    for i in 0..extra_rows {
        let key = format!("9{:05}", i);
        npanxx.insert(&key, "city", &format!("City{}", i % 50)).unwrap();
        npanxx.insert(&key, "state", if i % 2 == 0 { "TX" } else { "CA" }).unwrap();
        npanxx.insert(&key, "lat", "30.00").unwrap();
    }

    let cluster = Cluster::connect(&config, store).unwrap();
    let keyspace = Keyspace::create(&config.keyspace, &cluster).unwrap();
    (cluster, keyspace)
}

fn bench_slice(c: &mut Criterion) {
    let (_cluster, keyspace) = setup_keyspace(1_000);
    c.bench_function("slice_by_names", |b| {
        b.iter(|| {
            let result = SliceQuery::new(&keyspace)
                .column_family(NPANXX)
                .key("512202")
                .column_names(["city", "state", "lat", "lng"])
                .execute()
                .unwrap();
            black_box(result);
        });
    });
    c.bench_function("slice_by_range", |b| {
        b.iter(|| {
            let result = SliceQuery::new(&keyspace)
                .column_family(STATE_CITY)
                .key("TX Austin")
                .range("202", "204", false, 5)
                .execute()
                .unwrap();
            black_box(result);
        });
    });
}

fn bench_range_and_indexed(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_row");
    for rows in [1_000, 10_000] {
        let (_cluster, keyspace) = setup_keyspace(rows);

        group.bench_with_input(BenchmarkId::new("range_slices_100", rows), &rows, |b, _| {
            b.iter(|| {
                let result = RangeSlicesQuery::new(&keyspace)
                    .column_family(NPANXX)
                    .keys("9", "")
                    .column_names(["city"])
                    .row_count(100)
                    .execute()
                    .unwrap();
                black_box(result);
            });
        });

        group.bench_with_input(BenchmarkId::new("indexed_eq", rows), &rows, |b, _| {
            b.iter(|| {
                let result = IndexedSlicesQuery::new(&keyspace)
                    .column_family(NPANXX)
                    .add_equals_expression("city", "City7")
                    .add_equals_expression("state", "CA")
                    .column_names(["city", "state"])
                    .execute()
                    .unwrap();
                black_box(result);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_slice, bench_range_and_indexed);
criterion_main!(benches);
