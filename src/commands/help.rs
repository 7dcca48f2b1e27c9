//! This module implements the interactive help command.
//!
//! Features:
//! - A categorized main menu.
//! - A dropdown for picking a command.
//! - A detailed view for a specific command.

use serenity::all::ComponentInteractionDataKind;
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption,
};
use serenity::model::application::{CommandInteraction, CommandOptionType, ComponentInteraction};
use serenity::prelude::*;

pub const HELP_SELECT_ID: &str = "help_select_command";

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    Games,
    Balance,
    Admin,
}

impl CommandCategory {
    const ALL: [CommandCategory; 3] = [Self::Games, Self::Balance, Self::Admin];

    fn name(&self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Balance => "Balance",
            Self::Admin => "Owner",
        }
    }
    fn emoji(&self) -> &'static str {
        match self {
            Self::Games => "🎲",
            Self::Balance => "💰",
            Self::Admin => "🛡️",
        }
    }
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    details: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "coinflip",
        description: "Wager on a coin flip.",
        usage: "/coinflip <amount>",
        details: "Even odds. A win pays back twice the wager.",
        category: CommandCategory::Games,
    },
    CommandInfo {
        name: "roulette",
        description: "Bet on red or black.",
        usage: "/roulette <amount> <red|black>",
        details: "The ball lands on red or black with even odds. A matching pick pays twice the wager.",
        category: CommandCategory::Games,
    },
    CommandInfo {
        name: "mines",
        description: "Reveal gems on a 5x5 board without hitting a bomb.",
        usage: "/mines <amount>",
        details: "Click cells to reveal them. Clearing every safe cell pays five times the wager; a bomb loses it. The board expires after two minutes.",
        category: CommandCategory::Games,
    },
    CommandInfo {
        name: "blackjack",
        description: "Play Blackjack against the dealer.",
        usage: "/blackjack <amount>",
        details: "Hit or stand. Dealer draws to 17. A win pays twice the wager, a push refunds it. The table expires after one minute.",
        category: CommandCategory::Games,
    },
    CommandInfo {
        name: "slots",
        description: "Spin three reels.",
        usage: "/slots <amount>",
        details: "Three of a kind pays five times the wager, a pair pays twice.",
        category: CommandCategory::Games,
    },
    CommandInfo {
        name: "bal",
        description: "Check your balance.",
        usage: "/bal",
        details: "New players receive a starting balance shortly after their first command.",
        category: CommandCategory::Balance,
    },
    CommandInfo {
        name: "gift",
        description: "Gift coins to another user.",
        usage: "/gift <user> <amount>",
        details: "Moves coins from your balance to theirs. Bots can't receive gifts.",
        category: CommandCategory::Balance,
    },
    CommandInfo {
        name: "help",
        description: "Shows this help menu.",
        usage: "/help [command]",
        details: "Lists every command, or details about one.",
        category: CommandCategory::Balance,
    },
    CommandInfo {
        name: "add",
        description: "Add coins to a user's balance.",
        usage: "/add <user> <amount>",
        details: "Restricted to the bot owner.",
        category: CommandCategory::Admin,
    },
    CommandInfo {
        name: "rem",
        description: "Remove coins from a user's balance.",
        usage: "/rem <user> <amount>",
        details: "Restricted to the bot owner. Balances never drop below zero.",
        category: CommandCategory::Admin,
    },
];

/// Public helper returning all help command names.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help")
        .description("Shows information about commands")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "command",
                "The specific command you want help with",
            )
            .required(false),
        )
}

fn create_command_select_menu() -> CreateActionRow {
    let options = COMMANDS
        .iter()
        .map(|cmd| CreateSelectMenuOption::new(cmd.name, cmd.name).description(cmd.description))
        .collect();
    let select_menu = CreateSelectMenu::new(HELP_SELECT_ID, CreateSelectMenuKind::String { options })
        .placeholder("Select a command for more details...");
    CreateActionRow::SelectMenu(select_menu)
}

fn create_help_embed(command_name: Option<&str>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .footer(CreateEmbedFooter::new("Amounts are whole coins."))
        .color(0x5865F2);

    let Some(name) = command_name else {
        return CommandCategory::ALL.iter().fold(
            embed
                .title("Help Menu")
                .description("Use `/help <command>` or pick one below for details."),
            |embed, category| {
                embed.field(
                    format!("{} {}", category.emoji(), category.name()),
                    commands_in_category(*category),
                    false,
                )
            },
        );
    };

    match COMMANDS.iter().find(|c| c.name == name.trim_start_matches('/')) {
        Some(cmd) => embed
            .title(format!("{} Command: {}", cmd.category.emoji(), cmd.name))
            .field("Description", cmd.description, false)
            .field("Usage", format!("`{}`", cmd.usage), false)
            .field("Details", cmd.details, false),
        None => embed
            .title("Command Not Found")
            .description(format!("Sorry, I don't know a command called `{name}`."))
            .color(0xFF0000),
    }
}

fn commands_in_category(category: CommandCategory) -> String {
    COMMANDS
        .iter()
        .filter(|c| c.category == category)
        .map(|c| format!("`{}`", c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let command_name = interaction
        .data
        .options
        .first()
        .and_then(|opt| opt.value.as_str());
    let mut builder = CreateInteractionResponseMessage::new().embed(create_help_embed(command_name));
    if command_name.is_none() {
        builder = builder.components(vec![create_command_select_menu()]);
    }
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
    {
        tracing::debug!(target="ui.help", error=?e, "help reply failed");
    }
}

pub async fn handle_interaction(ctx: &Context, interaction: &ComponentInteraction) {
    let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
        return;
    };
    let Some(selected) = values.first() else { return };
    let builder = CreateInteractionResponseMessage::new()
        .embed(create_help_embed(Some(selected)))
        .components(vec![]);
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(builder))
        .await
    {
        tracing::debug!(target="ui.help", error=?e, "help update failed");
    }
}
