use criterion::{black_box, criterion_group, criterion_main, Criterion};

use term_tetris::core::{fits, Field, Game};
use term_tetris::types::{Cell, GameAction, KeySet, PieceKind, FIELD_WIDTH};

fn bench_fits(c: &mut Criterion) {
    let field = Field::new();
    c.bench_function("collision_fits", |b| {
        b.iter(|| {
            fits(
                black_box(PieceKind::T),
                black_box(1),
                black_box(FIELD_WIDTH / 2),
                black_box(10),
                &field,
            )
        })
    });
}

fn bench_clear_lines(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 20..24 {
                for x in 1..FIELD_WIDTH - 1 {
                    field.set(x, y, Cell::Block(PieceKind::I));
                }
            }
            field.clear_lines()
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    let mut keys = KeySet::default();
    keys.insert(GameAction::MoveLeft);
    keys.insert(GameAction::Rotate);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            game.tick(black_box(keys));
        })
    });
}

criterion_group!(benches, bench_fits, bench_clear_lines, bench_tick);
criterion_main!(benches);
