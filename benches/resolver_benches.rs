use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zeitfenster::event::Event;
use zeitfenster::request::MeetingRequest;
use zeitfenster::time::{TimeMerge, TimeRange};

fn merge_and_resolve(c: &mut Criterion) {
    c.bench_function("time_merge", |b| {
        let times: Vec<TimeRange> = (0..46u16)
            .map(|i| TimeRange::new(i * 30, i * 30 + 45))
            .collect();

        b.iter(|| black_box(times.iter().time_merge()));
    });

    c.bench_function("resolve", |b| {
        let events: Vec<Event> = (0..24u16)
            .map(|i| {
                let attendees = match i % 3 {
                    0 => vec!["alice"],
                    1 => vec!["bob"],
                    _ => vec!["carol"],
                };
                Event::new(TimeRange::new(i * 60, i * 60 + 30), attendees)
            })
            .collect();
        let request = MeetingRequest::new(vec!["alice", "bob"], vec!["carol"], 30);

        b.iter(|| black_box(request.resolve(&events)));
    });
}

criterion_group!(benches, merge_and_resolve);
criterion_main!(benches);
