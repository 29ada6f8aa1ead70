use criterion::{criterion_group, criterion_main, Criterion};

use kanatype::{Matcher, RuleTable};

const SENTENCE: &str = "きょうはいいてんきですね";
const KEYS: &str = "kyouhaiitenkidesune";

fn bench_replay(c: &mut Criterion) {
    c.bench_function("replay_romaji", |b| {
        b.iter(|| {
            let mut m = Matcher::new(SENTENCE);
            for ch in KEYS.chars() {
                m.input(ch);
            }
            assert!(m.completed());
        })
    });
}

fn bench_resolver(c: &mut Criterion) {
    let table = RuleTable::global();
    let suffix: Vec<char> = "しんじられない".chars().collect();
    c.bench_function("candidate_lookup", |b| b.iter(|| table.candidates(&suffix)));
}

criterion_group!(benches, bench_replay, bench_resolver);
criterion_main!(benches);
