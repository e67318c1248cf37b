use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hangarboard_core::{render, Booking, BookingStore, GridConfig, SlotKey, UndoLog};

fn populated_grid() -> (GridConfig, BookingStore) {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let config = GridConfig::numbered(40, start, 60);
    let mut store = BookingStore::new();
    for (index, key) in config.slots().enumerate() {
        if index % 2 == 0 {
            let booking = Booking::reserved(
                key.hangar.clone(),
                key.date,
                format!("Scheduled maintenance visit {index}"),
            );
            store.set(key, booking);
        }
    }
    (config, store)
}

fn bench_render(c: &mut Criterion) {
    let (config, store) = populated_grid();
    let selection = SlotKey::new("Hangar 20", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

    c.bench_function("render_40x60_grid", |b| {
        b.iter(|| {
            let view = render(
                black_box(&config),
                black_box(&store),
                black_box(Some(&selection)),
            );
            black_box(view.slots.len())
        })
    });
}

fn bench_undo_cycle(c: &mut Criterion) {
    let (config, store) = populated_grid();
    let keys: Vec<SlotKey> = config.slots().take(60).collect();

    c.bench_function("snapshot_and_undo_60_keys", |b| {
        b.iter(|| {
            let mut store = store.clone();
            let mut log = UndoLog::new();
            log.snapshot(&store, keys.iter().cloned(), "bench entry");
            for key in &keys {
                store.set(key.clone(), Booking::blocked(key.hangar.clone(), key.date));
            }
            log.undo(&mut store).unwrap();
            black_box(store.len())
        })
    });
}

criterion_group!(benches, bench_render, bench_undo_cycle);
criterion_main!(benches);
