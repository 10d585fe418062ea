use indoc::formatdoc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use teloxide::utils::command::{BotCommands, ParseError};
use teloxide::utils::html;

use super::HandleStatus;
use crate::app::App;
use crate::telegram::commands::{UserCommand, UserCommandDisplay};
use crate::telegram::keyboards::StartKeyboard;

pub async fn handle(app: &'static App, m: &Message) -> anyhow::Result<HandleStatus> {
    let Some(text) = m.text() else {
        return Ok(HandleStatus::Skipped);
    };

    if !text.starts_with('/') {
        return Ok(HandleStatus::Skipped);
    }

    let command = match UserCommand::parse(text, "SheetBot") {
        Err(ParseError::UnknownCommand(command)) => {
            app.bot()
                .send_message(
                    m.chat.id,
                    UserCommand::descriptions()
                        .global_description(&format!(
                            "Command <code>{}</code> not found.\n\nThere are commands available to you:",
                            html::escape(&command)
                        ))
                        .to_string(),
                )
                .reply_markup(StartKeyboard::markup(app.webapp_url()))
                .parse_mode(ParseMode::Html)
                .await?;

            return Ok(HandleStatus::Handled);
        },
        Err(ParseError::IncorrectFormat(_)) => return Ok(HandleStatus::Skipped),
        Err(err) => return Err(err.into()),
        Ok(command) => command,
    };

    match command {
        UserCommand::Start | UserCommand::Keyboard => {
            send_sheet_invite(app, m.chat.id).await?;
        },
        UserCommand::Help => {
            app.bot()
                .send_message(
                    m.chat.id,
                    UserCommand::descriptions()
                        .global_description("Commands available to you")
                        .to_string(),
                )
                .reply_markup(StartKeyboard::markup(app.webapp_url()))
                .await?;
        },
    }

    Ok(HandleStatus::Handled)
}

pub async fn send_sheet_invite(app: &'static App, chat_id: ChatId) -> anyhow::Result<()> {
    let text = formatdoc!(
        "
            Tap the button below to open the spreadsheet, pick rows, then press Send to return them here.

            You will get back a short preview of what you picked. Send /{keyboard} anytime to bring the button back.
        ",
        keyboard = UserCommandDisplay::Keyboard,
    );

    app.bot()
        .send_message(chat_id, text)
        .reply_markup(StartKeyboard::markup(app.webapp_url()))
        .await?;

    Ok(())
}
