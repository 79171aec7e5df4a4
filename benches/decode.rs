//! Decode throughput benchmarks

use chrono::FixedOffset;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use metar_decoder::app::services::renderer;
use metar_decoder::{DecodeContext, Decoder};

const REPORTS: &[&str] = &[
    "KJFK 161851Z 18010KT 10SM FEW250 24/18 A3000",
    "METAR KORD 161851Z 00000KT 1/4SM FG VV002 18/16 A2992 RMK AO2 SLP132",
    "SPECI KLAX 162353Z 27015G25KT 5SM BR SCT008 BKN015 OVC025 17/16 A2990 RMK PK WND 28030/2340 T01670161",
    "EDDF 161851Z 21010KT 1500 6000NE R25L/0300 BR BKN008 11/10 Q1008 BECMG 3000 BR",
];

fn bench_decode(c: &mut Criterion) {
    let decoder = Decoder::new().unwrap();
    let ctx = DecodeContext::new(6, 2019, FixedOffset::east_opt(0).unwrap()).unwrap();

    c.bench_function("decode_fair_weather", |b| {
        b.iter(|| decoder.decode(black_box(REPORTS[0]), &ctx).unwrap())
    });

    c.bench_function("decode_with_remarks", |b| {
        b.iter(|| decoder.decode(black_box(REPORTS[2]), &ctx).unwrap())
    });

    c.bench_function("decode_batch", |b| {
        b.iter(|| {
            for raw in REPORTS {
                decoder.decode(black_box(raw), &ctx).unwrap();
            }
        })
    });

    let report = decoder.decode(REPORTS[2], &ctx).unwrap();
    c.bench_function("render_text", |b| {
        b.iter(|| renderer::render(black_box(&report)).unwrap())
    });
}

fn bench_catalog_construction(c: &mut Criterion) {
    c.bench_function("decoder_new", |b| b.iter(|| Decoder::new().unwrap()));
}

criterion_group!(benches, bench_decode, bench_catalog_construction);
criterion_main!(benches);
