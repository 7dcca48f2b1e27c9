//! Button builders shared by the session games.
use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;
use serenity::model::channel::ReactionType;

pub struct Btn;
impl Btn {
    /// Text button for a game move such as Hit or Stand.
    pub fn action(id: &str, label: &str, style: ButtonStyle, locked: bool) -> CreateButton {
        CreateButton::new(id).label(label).style(style).disabled(locked)
    }

    /// Emoji-only board tile.
    pub fn tile(id: &str, emoji: &str, style: ButtonStyle, locked: bool) -> CreateButton {
        CreateButton::new(id)
            .emoji(ReactionType::Unicode(emoji.to_string()))
            .style(style)
            .disabled(locked)
    }
}
