use criterion::{criterion_group, criterion_main, Criterion};
use xkcd_core::search::intersect;
use xkcd_core::tokenizer::tokenize;

const TRANSCRIPT: &str = "[[Someone is in bed, presumably trying to sleep. The top of each panel is a thought bubble showing sheep leaping over a fence.]]\n1 ... 2 ...\n<<baaa>>\n[[Two sheep are jumping from left to right.]]\n\n... 1,306 ... 1,307 ...\n<<baaa>>\n[[A whole flock of sheep is jumping over the fence from right to left. The would-be sleeper is sitting up.]]\n{{Title text: If androids someday DO dream of electric sheep, don't forget to declare sheepCount as a long int.}}";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_transcript", |b| b.iter(|| tokenize(TRANSCRIPT).count()));
}

fn bench_intersect(c: &mut Criterion) {
    let long: Vec<u32> = (1..3000).collect();
    let short: Vec<u32> = (1..3000).step_by(7).collect();
    c.bench_function("intersect_3000_x_430", |b| b.iter(|| intersect(&long, &short)));
}

criterion_group!(benches, bench_tokenize, bench_intersect);
criterion_main!(benches);
