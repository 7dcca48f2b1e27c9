use wagerbot::interactions::ids::{BJ_HIT, BJ_STAND, Family, family, mines_cell_id, parse_mines_cell};

#[test]
fn mines_cell_ids_round_trip() {
    assert_eq!(mines_cell_id(0), "mines_cell_0");
    assert_eq!(parse_mines_cell("mines_cell_24"), Some(24));
    assert_eq!(parse_mines_cell(&mines_cell_id(13)), Some(13));
}

#[test]
fn parse_mines_cell_bad() {
    assert!(parse_mines_cell("mines_cell_").is_none());
    assert!(parse_mines_cell("mines_cell_x").is_none());
    assert!(parse_mines_cell("mines_cell_-1").is_none());
    assert!(parse_mines_cell("bj_hit").is_none());
}

#[test]
fn families_route_by_prefix() {
    assert_eq!(family("mines_cell_3"), Some(Family::Mines));
    assert_eq!(family(BJ_HIT), Some(Family::Blackjack));
    assert_eq!(family(BJ_STAND), Some(Family::Blackjack));
    assert_eq!(family("help_select_command"), None);
    assert_eq!(family("minesweeper"), None);
}
