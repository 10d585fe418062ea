#![allow(clippy::explicit_auto_deref)]
#![warn(clippy::unwrap_used)]

use sheetbot::app::App;
use sheetbot::{logger, telegram, utils};
use teloxide::prelude::*;

async fn run() {
    dotenv::dotenv().ok();

    logger::init().await.expect("Logger should be built");

    tracing::info!(
        git_commit_timestamp = env!("GIT_COMMIT_TIMESTAMP"),
        git_sha = env!("GIT_SHA"),
        "Starting Sheetbot..."
    );

    let app = App::init().expect("State to be built");

    tokio::spawn(utils::listen_for_ctrl_c());

    let handler = dptree::entry().branch(Update::filter_message().endpoint(
        move |m: Message, bot: Bot| async move {
            let chat_id = m.chat.id;

            let result = telegram::handle_message(app, m).await;

            if let Err(err) = &result {
                tracing::error!(err = ?err, "Error on message handling");

                bot.send_message(chat_id, "Sorry, error has happened :(")
                    .send()
                    .await?;
            }

            result.map(|_| ())
        },
    ));

    let mut dispatcher = Dispatcher::builder(app.bot().clone(), handler).build();

    let token = dispatcher.shutdown_token();

    tokio::spawn(async move {
        utils::ctrl_c().await;

        token.shutdown().expect("To be good").await;
    });

    dispatcher.dispatch().await;
}

#[tokio::main(worker_threads = 4)]
async fn main() {
    run().await;
}
