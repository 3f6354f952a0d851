use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyph_weaver::core::{Action, Palette, PuzzleConfig};
use glyph_weaver::level::{DifficultyTier, GoalGenerator, RandomGoalGenerator};
use glyph_weaver::session::{evaluate, Session};

fn bench_generate_hard(c: &mut Criterion) {
    let palette = Palette::default();
    let mut generator = RandomGoalGenerator::from_seed(12345);

    c.bench_function("generate_hard_8x8", |b| {
        b.iter(|| generator.generate(black_box(DifficultyTier::Hard), 8, &palette))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let palette = Palette::default();
    let mut generator = RandomGoalGenerator::from_seed(12345);
    let goal = generator.generate(DifficultyTier::Hard, 8, &palette);
    let player = generator.generate(DifficultyTier::Hard, 8, &palette);

    c.bench_function("evaluate_8x8", |b| {
        b.iter(|| evaluate(black_box(&player), black_box(&goal)))
    });
}

fn bench_replay(c: &mut Criterion) {
    let config = PuzzleConfig::default();
    let goal = RandomGoalGenerator::from_seed(12345).generate(DifficultyTier::Mild, 8, &config.palette);
    let mut session = Session::new(config, goal);
    for i in 0..200 {
        let action = match i % 4 {
            0 => Action::Move(1, -1),
            1 => Action::ROTATE_CW,
            2 => Action::Paint,
            _ => Action::Move(-1, 2),
        };
        session.apply_and_record(action).unwrap();
    }

    c.bench_function("replay_200_actions", |b| {
        b.iter(|| session.replay_all().unwrap())
    });
}

criterion_group!(benches, bench_generate_hard, bench_evaluate, bench_replay);
criterion_main!(benches);
