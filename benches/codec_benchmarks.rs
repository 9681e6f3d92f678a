//! Sample codec benchmarks
//!
//! - Binary encode (record -> bytes) per variant
//! - Binary decode (bytes -> record) per variant
//! - JSON decode (document -> record) per variant
//!
//! Toyota Way: Measure before optimizing (Genchi Genbutsu)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dempy::timeseries::{from_json, Axes, SampleKind, TimeseriesSample};
use serde_json::{json, Value};

fn create_sample(kind: SampleKind) -> TimeseriesSample {
    let values = [Some(0.1), Some(0.2), Some(0.3), Some(0.4), Some(0.5)];
    TimeseriesSample::builder("sample-0001", 1_700_000_000, "acq-0001", Axes::from_values(kind, values))
        .tags(["imu", "wrist"])
        .metadata_entry("unit", "g")
        .device_id("device-01")
        .sensor_id("sensor-01")
        .build()
}

fn create_document(kind: SampleKind) -> Value {
    let mut document = json!({
        "type": kind.as_str(),
        "id": "sample-0001",
        "tags": ["imu", "wrist"],
        "metadata": {"unit": "g"},
        "timestamp": 1_700_000_000_i64,
        "acquisitionId": "acq-0001",
        "deviceId": "device-01",
        "sensorId": "sensor-01"
    });
    for axis in kind.axes() {
        document[axis.name()] = json!(0.25);
    }
    document
}

fn bench_binary_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_encode");
    for kind in SampleKind::ALL {
        let sample = create_sample(kind);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &sample, |b, sample| {
            b.iter(|| black_box(sample.encode_to_vec()));
        });
    }
    group.finish();
}

fn bench_binary_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_decode");
    for kind in SampleKind::ALL {
        let bytes = create_sample(kind).encode_to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(kind), &bytes, |b, bytes| {
            b.iter(|| TimeseriesSample::decode(black_box(bytes)).unwrap());
        });
    }
    group.finish();
}

fn bench_json_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_decode");
    for kind in SampleKind::ALL {
        let document = create_document(kind);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &document, |b, document| {
            b.iter(|| from_json(black_box(document.clone())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_binary_encode,
    bench_binary_decode,
    bench_json_decode
);
criterion_main!(benches);
