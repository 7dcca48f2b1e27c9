use rand::SeedableRng;
use rand::rngs::StdRng;
use serenity::model::id::{MessageId, UserId};
use std::time::{Duration, Instant};
use wagerbot::commands::games::{Dispatch, GameManager};
use wagerbot::commands::mines::game::MinesGame;
use wagerbot::commands::mines::state::{BoardStatus, Cell, MinesBoard, Reveal};
use wagerbot::error::MoveError;
use wagerbot::interactions::ids::mines_cell_id;
use wagerbot::services::wager::Wager;

const OWNER: u64 = 10;
const MSG: u64 = 500;

fn wager(amount: i64) -> Wager {
    Wager {
        user_id: UserId::new(OWNER),
        amount,
    }
}

#[test]
fn shuffled_board_has_the_configured_bomb_count() {
    for bombs in [1, 5, 10, 24] {
        let board = MinesBoard::new(bombs, &mut StdRng::seed_from_u64(bombs as u64));
        let placed = (0..25).filter(|i| board.cell(*i) == Some(Cell::Bomb)).count();
        assert_eq!(placed, bombs);
        assert_eq!(board.safe_total(), 25 - bombs);
    }
}

#[test]
fn revealing_every_safe_cell_clears_the_board() {
    let bombs = [0, 6, 12, 18, 24];
    let mut board = MinesBoard::from_layout(&bombs);
    let safe: Vec<usize> = (0..25).filter(|i| !bombs.contains(i)).collect();

    for (n, idx) in safe.iter().enumerate() {
        let reveal = board.reveal(*idx).unwrap();
        if n + 1 < safe.len() {
            assert_eq!(reveal, Reveal::Safe { revealed: n + 1, remaining: safe.len() - n - 1 });
        } else {
            assert_eq!(reveal, Reveal::Cleared);
        }
    }
    assert_eq!(board.status(), BoardStatus::Cleared);
    assert_eq!(board.reveal(0), Err(MoveError::GameOver));
}

#[test]
fn bomb_busts_and_locks_the_board() {
    let mut board = MinesBoard::from_layout(&[3]);
    assert!(matches!(board.reveal(4), Ok(Reveal::Safe { .. })));
    assert_eq!(board.reveal(4), Err(MoveError::AlreadyRevealed));
    assert_eq!(board.reveal(25), Err(MoveError::OutOfRange(25)));
    assert_eq!(board.reveal(3), Ok(Reveal::Busted));
    assert_eq!(board.status(), BoardStatus::Busted);
    assert_eq!(board.reveal(5), Err(MoveError::GameOver));
}

fn manager_with(board: MinesBoard, started: Instant) -> GameManager {
    let mut manager = GameManager::new();
    manager.start_game_at(
        MessageId::new(MSG),
        Box::new(MinesGame::new(wager(200), board)),
        started,
    );
    manager
}

#[test]
fn clearing_through_the_manager_pays_five_times_exactly_once() {
    let now = Instant::now();
    // Single safe cell: index 7.
    let bombs: Vec<usize> = (0..25).filter(|i| *i != 7).collect();
    let mut manager = manager_with(MinesBoard::from_layout(&bombs), now);

    match manager.dispatch(MessageId::new(MSG), UserId::new(OWNER), &mines_cell_id(7), now) {
        Dispatch::Finished { content, payouts, components } => {
            assert_eq!(payouts.len(), 1);
            assert_eq!(payouts[0].multiplier, 5);
            assert_eq!(payouts[0].wager.payout(payouts[0].multiplier), 1_000);
            assert!(content.contains("Cleared the board"));
            assert_eq!(components.len(), 5);
        }
        _ => panic!("last safe cell must finish the game"),
    }
    assert!(!manager.is_active(&MessageId::new(MSG)));

    // A second press on the finished board finds no session and pays nothing.
    assert!(matches!(
        manager.dispatch(MessageId::new(MSG), UserId::new(OWNER), &mines_cell_id(7), now),
        Dispatch::Rejected(reason) if reason == "This game is no longer active."
    ));
}

#[test]
fn hitting_a_bomb_through_the_manager_pays_nothing() {
    let now = Instant::now();
    let mut manager = manager_with(MinesBoard::from_layout(&[0]), now);
    match manager.dispatch(MessageId::new(MSG), UserId::new(OWNER), &mines_cell_id(0), now) {
        Dispatch::Finished { content, payouts, .. } => {
            assert!(payouts.is_empty());
            assert!(content.contains("You hit a bomb"));
        }
        _ => panic!("bomb must finish the game"),
    }
}

#[test]
fn other_users_are_turned_away_without_changing_the_board() {
    let now = Instant::now();
    let mut manager = manager_with(MinesBoard::from_layout(&[0]), now);

    assert!(matches!(
        manager.dispatch(MessageId::new(MSG), UserId::new(OWNER + 1), &mines_cell_id(0), now),
        Dispatch::Rejected(reason) if reason == "Not your game."
    ));
    // The owner can still play the untouched cell.
    assert!(matches!(
        manager.dispatch(MessageId::new(MSG), UserId::new(OWNER), &mines_cell_id(1), now),
        Dispatch::Updated { .. }
    ));
    assert!(matches!(
        manager.dispatch(MessageId::new(MSG), UserId::new(OWNER), &mines_cell_id(1), now),
        Dispatch::Rejected(reason) if reason == "That cell is already revealed."
    ));
}

#[test]
fn presses_after_the_timeout_are_rejected_and_the_session_dropped() {
    let started = Instant::now();
    let mut manager = manager_with(MinesBoard::from_layout(&[0]), started);
    let late = started + Duration::from_secs(121);

    assert!(matches!(
        manager.dispatch(MessageId::new(MSG), UserId::new(OWNER), &mines_cell_id(1), late),
        Dispatch::Rejected(reason) if reason == "This game has expired."
    ));
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn expire_returns_the_last_rendering_once() {
    let mut manager = manager_with(MinesBoard::from_layout(&[0]), Instant::now());
    let last = manager.expire(&MessageId::new(MSG)).expect("live session");
    assert!(last.contains("Mines Game 5x5"));
    assert!(manager.expire(&MessageId::new(MSG)).is_none());
}
