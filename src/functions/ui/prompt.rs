use super::component::{MessageHandle, edit_message};
use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use rand::Rng;
use serenity::collector::ComponentInteractionCollector;
use serenity::{CreateActionRow, CreateButton};
use std::time::Duration;
use tracing::debug;

pub enum PromptOutcome {
    /// The player pressed the button. The interaction is still unanswered so
    /// the caller can reply with the next screen.
    Pressed(serenity::ComponentInteraction),
    Timeout,
}

pub struct PlayPromptOptions {
    pub embed: serenity::CreateEmbed,
    pub label: String,
    pub emoji: char,
    pub timeout: Duration,
}

impl PlayPromptOptions {
    pub fn new(embed: serenity::CreateEmbed, label: impl Into<String>) -> Self {
        Self {
            embed,
            label: label.into(),
            emoji: '▶',
            timeout: Duration::from_secs(60),
        }
    }
}

pub struct PlayPromptResult {
    pub outcome: PromptOutcome,
    pub message: MessageHandle,
}

/// Shows `options.embed` with a single button only `player` may press.
///
/// Reuses `existing` when given, otherwise replies to the command. On timeout
/// the embed stays and the button is removed.
pub async fn play_prompt(
    ctx: &Context<'_>,
    player: serenity::UserId,
    existing: Option<MessageHandle>,
    options: PlayPromptOptions,
) -> Result<PlayPromptResult, Error> {
    let button_id = format!("play_{}", rand::rng().random::<u64>());
    let components = play_button(&button_id, &options);

    let message = match existing {
        Some(handle) => {
            edit_message(ctx, handle, options.embed.clone(), components).await?;
            handle
        }
        None => {
            let reply = ctx
                .send(
                    poise::CreateReply::default()
                        .embed(options.embed.clone())
                        .components(components),
                )
                .await?;
            let message = reply.message().await?;
            MessageHandle {
                channel_id: message.channel_id,
                message_id: message.id,
            }
        }
    };

    let interaction = ComponentInteractionCollector::new(ctx.serenity_context())
        .author_id(player)
        .message_id(message.message_id)
        .timeout(options.timeout)
        .await;

    let outcome = match interaction {
        Some(interaction) => PromptOutcome::Pressed(interaction),
        None => {
            debug!(message_id = %message.message_id, "play prompt timed out");
            edit_message(ctx, message, options.embed, Vec::new()).await?;
            PromptOutcome::Timeout
        }
    };

    Ok(PlayPromptResult { outcome, message })
}

fn play_button(button_id: &str, options: &PlayPromptOptions) -> Vec<CreateActionRow> {
    let button = CreateButton::new(button_id)
        .label(&options.label)
        .style(serenity::ButtonStyle::Success)
        .emoji(options.emoji);

    vec![CreateActionRow::Buttons(vec![button])]
}
