use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blocktris::core::{shape_for, Board, GameState};
use blocktris::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if !state.tick() && state.is_game_over() {
                state.new_game();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_shape_for(c: &mut Criterion) {
    c.bench_function("shape_for_three_turns", |b| {
        b.iter(|| shape_for(black_box(PieceKind::L), black_box(3)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(1, 0);
            state.try_move(-1, 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.soft_drop();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_shape_for,
    bench_try_move,
    bench_rotate
);
criterion_main!(benches);
