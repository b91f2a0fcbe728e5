use amlich::calendar::month_dates;
use amlich::{VIETNAM_TIME_ZONE, lunar_to_solar, solar_to_lunar};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn convert_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(black_box(2023), black_box(3), black_box(22), VIETNAM_TIME_ZONE))
    });
    group.bench_function("lunar_to_solar_leap", |b| {
        b.iter(|| {
            lunar_to_solar(black_box(2023), black_box(2), black_box(1), true, VIETNAM_TIME_ZONE)
                .expect("2023 has a leap month 2")
        })
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    c.bench_function("month_dates", |b| {
        b.iter(|| month_dates(black_box(2023), black_box(3), VIETNAM_TIME_ZONE))
    });
}

criterion_group!(benches, convert_bench, calendar_bench);
criterion_main!(benches);
