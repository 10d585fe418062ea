use handlers::HandleStatus;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

pub mod commands;
pub mod handlers;
pub mod keyboards;

macro_rules! return_if_handled {
    ($handle:expr) => {
        if matches!($handle, HandleStatus::Handled) {
            return Ok(HandleStatus::Handled);
        }
    };
}

pub(crate) use return_if_handled;

use crate::app::App;
use crate::telegram::commands::UserCommand;
use crate::telegram::keyboards::StartKeyboard;

#[tracing::instrument(skip_all, fields(chat_id = %m.chat.id))]
pub async fn handle_message(app: &'static App, m: Message) -> anyhow::Result<HandleStatus> {
    return_if_handled!(handlers::web_app_data::handle(app, &m).await?);
    return_if_handled!(handlers::commands::handle(app, &m).await?);

    app.bot()
        .send_message(
            m.chat.id,
            UserCommand::descriptions()
                .global_description(
                    "Your request was not handled 😔\n\nThere are commands available to you:",
                )
                .to_string(),
        )
        .reply_markup(StartKeyboard::markup(app.webapp_url()))
        .await?;

    Ok(HandleStatus::Skipped)
}
