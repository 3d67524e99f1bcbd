use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kundli::{
    compare_kundlis, BirthDetails, EngineSettings, Gender, KundliEngine, PlaceOfBirth,
};

fn details(name: &str, date: &str, time: &str, gender: Gender) -> BirthDetails {
    BirthDetails {
        name: name.to_string(),
        date_of_birth: date.to_string(),
        time_of_birth: time.to_string(),
        place_of_birth: PlaceOfBirth {
            city: "Ujjain".to_string(),
            country: "India".to_string(),
            latitude: 23.1765,
            longitude: 75.7885,
            timezone: "Asia/Kolkata".to_string(),
        },
        gender,
    }
}

fn engine() -> KundliEngine {
    KundliEngine::with_settings(EngineSettings {
        reference_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        ..EngineSettings::default()
    })
}

fn bench_generate(c: &mut Criterion) {
    let engine = engine();
    let birth = details("Bench", "1990-06-15", "10:30", Gender::Male);

    c.bench_function("generate_kundli", |b| {
        b.iter(|| engine.generate(black_box(&birth)))
    });
}

fn bench_generate_batch(c: &mut Criterion) {
    let engine = engine();
    let births: Vec<BirthDetails> = (0..100)
        .map(|i| {
            details(
                &format!("Person {}", i),
                &format!("19{:02}-{:02}-{:02}", 50 + i % 50, i % 12 + 1, i % 28 + 1),
                &format!("{:02}:{:02}", i % 24, i % 60),
                if i % 2 == 0 { Gender::Male } else { Gender::Female },
            )
        })
        .collect();

    c.bench_function("generate_kundli_batch_100", |b| {
        b.iter(|| {
            births
                .iter()
                .filter_map(|birth| engine.generate(black_box(birth)).ok())
                .count()
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let engine = engine();
    let groom = engine.generate(&details("Groom", "1989-04-11", "06:00", Gender::Male));
    let bride = engine.generate(&details("Bride", "1992-10-27", "18:20", Gender::Female));
    let (Ok(groom), Ok(bride)) = (groom, bride) else {
        return;
    };

    c.bench_function("compare_kundlis", |b| {
        b.iter(|| compare_kundlis(black_box(&groom), black_box(&bride)))
    });
}

criterion_group!(benches, bench_generate, bench_generate_batch, bench_compare);
criterion_main!(benches);
