//! Ensures the help menu and the registered command set stay in sync.
use wagerbot::commands::help::all_command_names;
use wagerbot::handler::all_commands;

#[test]
fn help_command_names_unique_and_present() {
    let names = all_command_names();
    // Ensure uniqueness
    let mut sorted = names.clone();
    sorted.sort();
    for w in sorted.windows(2) {
        assert_ne!(w[0], w[1], "Duplicate help command name: {}", w[0]);
    }
    let expected = [
        "coinflip", "roulette", "mines", "blackjack", "slots", "bal", "gift", "add", "rem", "help",
    ];
    for e in expected {
        assert!(sorted.contains(&e), "Missing help entry for `{}`", e);
    }
}

#[test]
fn every_help_entry_is_registered() {
    assert_eq!(all_commands().len(), all_command_names().len());
}
