use anyhow::Context;
use teloxide::Bot;
use url::Url;

pub struct App {
    bot: Bot,
    webapp_url: Url,
}

#[derive(Deserialize, Debug)]
struct EnvConfig {
    telegram_bot_token: String,
    webapp_url: String,
}

/// Telegram refuses to open Mini Apps over anything but https.
fn parse_webapp_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw).context("Cannot parse WEBAPP_URL")?;

    if url.scheme() != "https" {
        anyhow::bail!("WEBAPP_URL must be https, got `{}`", url.scheme());
    }

    Ok(url)
}

impl App {
    pub fn init() -> anyhow::Result<&'static Self> {
        tracing::trace!("Init application");

        let env: EnvConfig = envy::from_env().context("Cannot read required environment")?;

        let webapp_url = parse_webapp_url(&env.webapp_url)?;
        let bot = Bot::new(&env.telegram_bot_token);

        // Leaked so handlers can hold a plain &'static App instead of dragging Arc around
        let app = Box::new(Self { bot, webapp_url });
        let app = &*Box::leak(app);

        Ok(app)
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    pub fn webapp_url(&self) -> &Url {
        &self.webapp_url
    }
}
