// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use person_lens::search::mapping::{self, SearchResponse};
use serde_json::json;
use std::hint::black_box;

const BASE_URL: &str = "http://search.local:8000";

/// Builds a response shaped like the service's, with a mix of full and
/// sparse payloads.
fn sample_response(count: usize) -> SearchResponse {
    let results: Vec<_> = (0..count)
        .map(|i| {
            if i % 4 == 0 {
                json!({ "id": i, "score": "0.5", "payload": {} })
            } else {
                json!({
                    "id": format!("{i}"),
                    "score": 1.0 - (i as f64 / count as f64),
                    "payload": {
                        "path": format!("/data/frames/cam{}/frame_{i:06}.jpg", i % 8),
                        "metadata": {
                            "person_id": i / 3,
                            "clothes_id": i % 5,
                            "location_id": format!("gate-{}", i % 12),
                            "frame_id": i,
                            "camera": "north"
                        }
                    }
                })
            }
        })
        .collect();

    serde_json::from_value(json!({ "results": results })).unwrap()
}

fn result_mapping_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("result_mapping");

    for count in [10_usize, 100, 500] {
        let response = sample_response(count);
        group.bench_with_input(BenchmarkId::new("map_response", count), &response, |b, r| {
            b.iter(|| black_box(mapping::map_response(BASE_URL, black_box(r))));
        });
    }

    let body = serde_json::to_vec(&json!({
        "results": (0..100)
            .map(|i| json!({"id": i, "score": 0.9, "payload": {"path": "/a/b/x.jpg"}}))
            .collect::<Vec<_>>()
    }))
    .unwrap();
    group.bench_function("decode_and_map_100", |b| {
        b.iter(|| {
            let response: SearchResponse = serde_json::from_slice(black_box(&body)).unwrap();
            black_box(mapping::map_response(BASE_URL, &response))
        });
    });

    group.finish();
}

criterion_group!(benches, result_mapping_benchmark);
criterion_main!(benches);
