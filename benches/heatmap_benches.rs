use chinba_libs::event::HeatmapSlot;
use chinba_libs::grid::{slot_lookup, HeatmapGrid};
use chinba_libs::time::{half_hour_slots, slot_key};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn month_of_slots() -> (Vec<String>, Vec<HeatmapSlot>) {
    let dates: Vec<String> = (1..=30).map(|d| format!("2024-03-{:02}", d)).collect();

    let slots = dates
        .iter()
        .flat_map(|date| {
            half_hour_slots(0, 24).into_iter().map(move |time| HeatmapSlot {
                dt: slot_key(date, &time),
                unavailable_count: 3,
                unavailable_members: vec![
                    "a".to_string(),
                    "b".to_string(),
                    "c".to_string(),
                ],
            })
        })
        .collect();

    (dates, slots)
}

fn build_grid(c: &mut Criterion) {
    let (dates, slots) = month_of_slots();

    c.bench_function("slot_lookup", |b| {
        b.iter(|| black_box(slot_lookup(&slots)));
    });

    c.bench_function("build_month_grid", |b| {
        b.iter(|| black_box(HeatmapGrid::build(&dates, 0, 24, &slots, 12)));
    });

    c.bench_function("build_sparse_grid", |b| {
        b.iter(|| black_box(HeatmapGrid::build(&dates, 9, 18, &slots[..40], 12)));
    });
}

criterion_group!(benches, build_grid);
criterion_main!(benches);
