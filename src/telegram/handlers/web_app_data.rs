use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyMarkup};

use super::HandleStatus;
use crate::app::App;
use crate::sheet;

/// Routes Mini App submissions into the payload interpreter. Everything
/// else falls through to the rest of the handler chain.
#[tracing::instrument(skip_all, fields(chat_id = %m.chat.id))]
pub async fn handle(app: &'static App, m: &Message) -> anyhow::Result<HandleStatus> {
    let Some(web_app_data) = m.web_app_data() else {
        return Ok(HandleStatus::Skipped);
    };

    tracing::info!(bytes = web_app_data.data.len(), "Received sheet submission");

    let reply = sheet::interpret(&web_app_data.data);

    let mut request = app
        .bot()
        .send_message(m.chat.id, reply.text)
        .parse_mode(ParseMode::Html);

    if reply.clear_keyboard {
        request = request.reply_markup(ReplyMarkup::kb_remove());
    }

    request.await?;

    Ok(HandleStatus::Handled)
}
