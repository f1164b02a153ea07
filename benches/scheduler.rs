use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};

use wordbox::{
    engine::scheduler::{self, SchedulerConfig},
    store::{CardStore, memory::MemoryCardStore},
};

fn day_zero() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("date")
}

fn bench_review_transitions(c: &mut Criterion) {
    let config = SchedulerConfig::default();
    c.bench_function("review_transition_chain_10k", |b| {
        b.iter(|| {
            let mut box_level = 0;
            for i in 0..10_000u64 {
                let t = scheduler::review(box_level, i % 7 != 0, &config);
                box_level = t.box_level;
            }
            box_level
        });
    });
}

fn bench_memory_due_scan(c: &mut Criterion) {
    let today = day_zero();
    let tomorrow = today.succ_opt().expect("date");

    let mut store = MemoryCardStore::new();
    for i in 0..10_000u64 {
        let due = if i % 4 == 0 { today } else { tomorrow };
        store
            .insert_exact(&format!("front{i}"), &format!("back{i}"), 0, due)
            .expect("insert");
    }

    c.bench_function("memory_next_due_10k", |b| {
        b.iter(|| store.next_due(today).expect("query"));
    });
}

criterion_group!(benches, bench_review_transitions, bench_memory_due_scan);
criterion_main!(benches);
