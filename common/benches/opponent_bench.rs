use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{BotInput, Board, Cell, Player, calculate_move, evaluate};

const E: Cell = Cell::Empty;
const X: Cell = Cell::MarkA;
const O: Cell = Cell::MarkB;

fn bench_empty_board(c: &mut Criterion) {
    let mut rng = SessionRng::new(1);
    c.bench_function("opponent_empty_board", |b| {
        b.iter(|| {
            let input = BotInput::new(Board::new(), Player::B);
            black_box(calculate_move(&input, &mut rng))
        })
    });
}

fn bench_mid_game(c: &mut Criterion) {
    let mut rng = SessionRng::new(2);
    let board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
    c.bench_function("opponent_mid_game_fallback", |b| {
        b.iter(|| {
            let input = BotInput::new(black_box(board), Player::B);
            black_box(calculate_move(&input, &mut rng))
        })
    });
}

fn bench_near_full(c: &mut Criterion) {
    let mut rng = SessionRng::new(4);
    let board = Board::from_cells([X, O, X, O, X, E, E, O, E]);
    c.bench_function("opponent_near_full_board", |b| {
        b.iter(|| {
            let input = BotInput::new(black_box(board), Player::A);
            black_box(calculate_move(&input, &mut rng))
        })
    });
}

fn bench_self_play(c: &mut Criterion) {
    let mut rng = SessionRng::new(3);
    c.bench_function("opponent_self_play_game", |b| {
        b.iter(|| {
            let mut board = Board::new();
            while evaluate(&board).is_in_progress() {
                let player = board.next_player();
                let Some(index) = calculate_move(&BotInput::new(board, player), &mut rng) else {
                    break;
                };
                board = match board.apply(index, player) {
                    Ok(next) => next,
                    Err(_) => break,
                };
            }
            black_box(evaluate(&board))
        })
    });
}

criterion_group!(benches, bench_empty_board, bench_mid_game, bench_near_full, bench_self_play);
criterion_main!(benches);
