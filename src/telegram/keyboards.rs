use strum_macros::AsRefStr;
use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup, ReplyMarkup, WebAppInfo};
use url::Url;

#[derive(Clone, AsRefStr)]
pub enum StartKeyboard {
    #[strum(serialize = "📋 Open spreadsheet")]
    OpenSheet,
}

impl StartKeyboard {
    fn button(self, webapp_url: &Url) -> KeyboardButton {
        KeyboardButton::new(self.as_ref()).request(ButtonRequest::WebApp(WebAppInfo {
            url: webapp_url.clone(),
        }))
    }

    pub fn markup(webapp_url: &Url) -> ReplyMarkup {
        ReplyMarkup::Keyboard(
            KeyboardMarkup::new(vec![vec![Self::OpenSheet.button(webapp_url)]]).resize_keyboard(),
        )
    }
}
