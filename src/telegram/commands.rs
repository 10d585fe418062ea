use std::fmt::Formatter;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, PartialEq, Eq, Debug)]
#[command(rename_rule = "snake_case", parse_with = "split")]
pub enum UserCommand {
    #[command(description = "show this help")]
    Help,

    #[command(description = "open the spreadsheet")]
    Start,
    #[command(description = "show the spreadsheet button again")]
    Keyboard,
}

pub enum UserCommandDisplay {
    Help,
    Start,
    Keyboard,
}

impl std::fmt::Display for UserCommandDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Self::Help => "help",
            Self::Start => "start",
            Self::Keyboard => "keyboard",
        };

        f.write_str(string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_user_commands() {
        let user_command = UserCommand::Start;

        match user_command {
            UserCommand::Help => UserCommandDisplay::Help,
            UserCommand::Start => UserCommandDisplay::Start,
            UserCommand::Keyboard => UserCommandDisplay::Keyboard,
        };
    }

    #[test]
    fn check_command_parsing() {
        assert_eq!(
            UserCommand::parse("/start", "SheetBot").expect("should parse"),
            UserCommand::Start
        );
        assert_eq!(
            UserCommand::parse("/keyboard", "SheetBot").expect("should parse"),
            UserCommand::Keyboard
        );
    }
}
