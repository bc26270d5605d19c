use crate::{Context, Error};
use poise::serenity_prelude as serenity;
use serenity::CreateActionRow;
use serenity::builder::{CreateInteractionResponseMessage, EditMessage};

/// Points at a bot message that is edited in place across screens.
#[derive(Clone, Copy, Debug)]
pub struct MessageHandle {
    pub channel_id: serenity::ChannelId,
    pub message_id: serenity::MessageId,
}

/// Sends a simple ephemeral message in response to a component interaction.
pub async fn send_ephemeral_response(
    ctx: &Context<'_>,
    interaction: &serenity::ComponentInteraction,
    content: impl Into<String>,
) -> Result<(), Error> {
    let response = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    interaction
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::Message(response),
        )
        .await?;
    Ok(())
}

/// Updates the original message tied to the component interaction.
pub async fn update_component_message(
    ctx: &Context<'_>,
    interaction: &serenity::ComponentInteraction,
    embed: serenity::CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), Error> {
    let response = CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(components);

    interaction
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(response),
        )
        .await?;
    Ok(())
}

/// Edits a message outside of any interaction, e.g. after a timer fires.
pub async fn edit_message(
    ctx: &Context<'_>,
    handle: MessageHandle,
    embed: serenity::CreateEmbed,
    components: Vec<CreateActionRow>,
) -> Result<(), Error> {
    handle
        .channel_id
        .edit_message(
            ctx.serenity_context(),
            handle.message_id,
            EditMessage::new()
                .content("")
                .embed(embed)
                .components(components),
        )
        .await?;
    Ok(())
}
