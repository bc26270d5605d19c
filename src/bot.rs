use crate::commands::{self, memory::GameSettings, util::command_error_handler};
use poise::serenity_prelude as serenity;
use tracing::info;

/// Declares which gateway intents the bot subscribes to.
pub fn gateway_intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
}

pub fn prefix_options(prefix: String) -> poise::PrefixFrameworkOptions<Data, Error> {
    poise::PrefixFrameworkOptions {
        prefix: Some(prefix),
        mention_as_prefix: true,
        ..Default::default()
    }
}

pub struct Data {
    pub settings: GameSettings,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Builds the Poise framework with all commands and the provided prefix options
pub fn build_framework(
    prefix_options: poise::PrefixFrameworkOptions<Data, Error>,
    settings: GameSettings,
) -> poise::Framework<Data, Error> {
    poise::Framework::builder()
        .options(framework_options(prefix_options))
        .setup(move |ctx, ready, framework| {
            Box::pin(async move { setup_framework(ctx, ready, framework, settings).await })
        })
        .build()
}

pub async fn run_client(
    token: String,
    intents: serenity::GatewayIntents,
    framework: poise::Framework<Data, Error>,
) -> Result<(), Error> {
    let mut client = serenity::Client::builder(token, intents)
        .framework(framework)
        .await?;

    client.start_autosharded().await?;

    Ok(())
}

fn framework_options(
    prefix_options: poise::PrefixFrameworkOptions<Data, Error>,
) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands::load_all(),
        prefix_options,
        on_error: |error| Box::pin(command_error_handler(error)),
        ..Default::default()
    }
}

async fn setup_framework(
    ctx: &serenity::Context,
    ready: &serenity::Ready,
    framework: &poise::Framework<Data, Error>,
    settings: GameSettings,
) -> Result<Data, Error> {
    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
    info!(
        user = %ready.user.display_name(),
        tile_count = settings.tile_count,
        reveal_delay_ms = settings.reveal_delay.as_millis() as u64,
        "connected and ready"
    );

    Ok(Data { settings })
}
