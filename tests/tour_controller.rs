use knights_tour::core::position::Position;
use knights_tour::game::Tour;
use knights_tour::rules::movegen::legal_moves;
use knights_tour::state::{MoveOutcome, Rejection, TourState, TourStatus};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

#[test]
fn initialize_places_knight_on_origin() {
    for n in 1..=10 {
        let s = TourState::initialize(n);
        assert_eq!(s.move_count(), 1);
        assert_eq!(s.occupant(), p(0, 0));
        assert_eq!(s.board().get(p(0, 0)), Some(1));
        assert_eq!(s.board().visited_count(), 1);
        assert!(s.legal_moves().len() <= 8);
        assert!(s.board().is_consistent_with(1));
    }
}

#[test]
fn one_by_one_board_is_won_immediately() {
    let s = TourState::initialize(1);
    assert_eq!(s.move_count(), 1);
    assert_eq!(s.status(), TourStatus::Won);
    assert!(s.legal_moves().is_empty());
    assert_eq!(s.recommend(), None);
}

#[test]
fn first_move_on_eight_by_eight() {
    let mut s = TourState::initialize(8);
    assert_eq!(s.status(), TourStatus::Playing);
    assert_eq!(s.attempt_move(p(2, 1)), MoveOutcome::Accepted);

    assert_eq!(s.move_count(), 2);
    assert_eq!(s.board().get(p(2, 1)), Some(2));
    assert_eq!(s.board().get(p(0, 0)), Some(1));
    assert_eq!(s.occupant(), p(2, 1));
    assert_eq!(s.legal_moves(), legal_moves(p(2, 1), s.board()).as_slice());
    assert_eq!(s.status(), TourStatus::Playing);
}

#[test]
fn illegal_move_leaves_state_unchanged() {
    let mut s = TourState::initialize(8);
    let before = s.clone();

    for target in [p(1, 1), p(0, 0), p(-2, -1), p(8, 8), p(3, 3)] {
        assert_eq!(
            s.attempt_move(target),
            MoveOutcome::Rejected(Rejection::NotLegal)
        );
        assert_eq!(s, before);
    }
}

#[test]
fn revisiting_a_square_is_rejected() {
    let mut s = TourState::initialize(8);
    assert!(s.attempt_move(p(2, 1)).is_accepted());
    assert!(s.attempt_move(p(0, 2)).is_accepted());
    // (2,1) is a knight jump from (0,2) but already visited.
    let before = s.clone();
    assert!(!s.attempt_move(p(2, 1)).is_accepted());
    assert_eq!(s, before);
}

#[test]
fn three_by_three_gets_stuck_with_center_unreachable() {
    let mut s = TourState::initialize(3);
    let path = [p(1, 2), p(2, 0), p(0, 1), p(2, 2), p(1, 0), p(0, 2), p(2, 1)];
    for (i, &sq) in path.iter().enumerate() {
        assert_eq!(s.status(), TourStatus::Playing, "before move {i}");
        assert!(s.attempt_move(sq).is_accepted(), "move {i} to {sq:?}");
    }
    assert_eq!(s.move_count(), 8);
    assert_eq!(s.status(), TourStatus::Stuck);
    assert!(s.legal_moves().is_empty());
    assert_eq!(s.board().get(p(1, 1)), Some(0));

    let before = s.clone();
    assert_eq!(
        s.attempt_move(p(0, 0)),
        MoveOutcome::Rejected(Rejection::NotPlaying)
    );
    assert_eq!(s, before);
}

#[test]
fn completing_the_board_wins_and_clears_moves() {
    // A full 5x5 tour from the corner.
    let order: [[u32; 5]; 5] = [
        [1, 20, 9, 14, 3],
        [10, 15, 2, 19, 24],
        [21, 8, 23, 4, 13],
        [16, 11, 6, 25, 18],
        [7, 22, 17, 12, 5],
    ];
    let mut path = vec![Position::ORIGIN; 25];
    for (r, row) in order.iter().enumerate() {
        for (c, &k) in row.iter().enumerate() {
            path[k as usize - 1] = p(r as i32, c as i32);
        }
    }

    let mut s = TourState::initialize(5);
    for &sq in &path[1..] {
        assert!(s.attempt_move(sq).is_accepted(), "{sq:?}");
    }
    assert_eq!(s.status(), TourStatus::Won);
    assert_eq!(s.move_count(), 25);
    assert!(s.legal_moves().is_empty());
    assert!(s.board().is_consistent_with(25));
    assert_eq!(s.progress_percent(), 100);
}

#[test]
fn visit_orders_stay_consistent_through_a_game() {
    let mut s = TourState::initialize(7);
    while let Some(h) = s.recommend() {
        assert!(s.attempt_move(h.position).is_accepted());
        assert!(s.board().is_consistent_with(s.move_count()));
        assert_eq!(s.board().position_of(s.move_count()), Some(s.occupant()));
    }
}

#[test]
fn initialize_is_deterministic() {
    for n in [1, 5, 8, 12] {
        assert_eq!(TourState::initialize(n), TourState::initialize(n));
    }
}

#[test]
fn reset_twice_yields_identical_state() {
    let mut tour = Tour::new(8);
    tour.attempt_move(p(2, 1));
    tour.reset();
    let first = tour.state().clone();
    tour.reset();
    assert_eq!(tour.state(), &first);
    assert_eq!(&first, &TourState::initialize(8));
}

#[test]
fn reset_leaves_terminal_states() {
    let mut tour = Tour::new(3);
    tour.play_hints();
    assert_eq!(tour.state().status(), TourStatus::Stuck);
    tour.reset();
    assert_eq!(tour.state().status(), TourStatus::Playing);
    assert_eq!(tour.state().move_count(), 1);
}

#[test]
fn resize_changes_board() {
    let mut tour = Tour::new(8);
    tour.attempt_move(p(1, 2));
    tour.resize(5);
    assert_eq!(tour.state(), &TourState::initialize(5));
}

#[test]
fn large_boards_are_accepted() {
    let mut s = TourState::initialize(40);
    assert_eq!(s.legal_moves(), &[p(1, 2), p(2, 1)]);
    assert!(s.attempt_move(p(1, 2)).is_accepted());
    assert_eq!(s.status(), TourStatus::Playing);
}
