use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridpoints::board::{Board, EMPTY};
use gridpoints::protocol::parse_board;

/// 8x8 position with a few scattered holes.
const MID_GAME: &str = "0,1,0,1,0,1,0,1/1,0,.,0,1,0,1,0/0,1,0,1,0,1,.,1/1,0,1,0,1,0,1,0/0,.,0,1,.,1,0,1/1,0,1,0,1,0,1,0/0,1,0,1,0,.,0,1/1,0,1,0,1,0,1,.";

fn bench_points_single(c: &mut Criterion) {
    let board = parse_board(MID_GAME).unwrap();
    c.bench_function("giving_points_single_cell", |b| {
        b.iter(|| board.giving_points(black_box(4), black_box(4)))
    });
}

fn bench_points_all_free(c: &mut Criterion) {
    let board = parse_board(MID_GAME).unwrap();
    c.bench_function("giving_points_all_free_cells", |b| {
        b.iter(|| {
            black_box(&board)
                .free_positions()
                .filter_map(|pos| board.giving_points_by_position(pos))
                .sum::<usize>()
        })
    });
}

fn bench_points_empty_board(c: &mut Criterion) {
    let board = Board::new(16);
    c.bench_function("giving_points_empty_16x16", |b| {
        b.iter(|| {
            (0..16)
                .flat_map(|r| (0..16).map(move |c| (r, c)))
                .filter_map(|(r, c)| black_box(&board).giving_points(r, c))
                .sum::<usize>()
        })
    });
}

fn bench_board_clone_and_place(c: &mut Criterion) {
    let board = parse_board(MID_GAME).unwrap();
    c.bench_function("board_clone_and_place", |b| {
        b.iter(|| {
            let mut next = black_box(&board).clone();
            next.set_cell(4, 4, 0);
            next.is_filled()
        })
    });
}

fn bench_is_filled(c: &mut Criterion) {
    let mut board = Board::from_rows(&vec![vec![0; 16]; 16]).unwrap();
    board.set_cell(15, 15, EMPTY);
    c.bench_function("is_filled_16x16_last_cell", |b| {
        b.iter(|| black_box(&board).is_filled())
    });
}

criterion_group!(
    benches,
    bench_points_single,
    bench_points_all_free,
    bench_points_empty_board,
    bench_board_clone_and_place,
    bench_is_filled,
);
criterion_main!(benches);
