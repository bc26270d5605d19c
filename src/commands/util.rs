use crate::{
    Data, Error,
    commands::memory::DeckError,
    constants::{colors, icon},
    functions::ui::pretty_message::pretty_message,
};
use poise::FrameworkError;
use tracing::error;

/// Default error handler for application commands
pub async fn command_error_handler(error: FrameworkError<'_, Data, Error>) {
    match error {
        FrameworkError::Command { ctx, error, .. } => {
            error!(command = %ctx.command().name, ?error, "command failed");

            let _ = ctx
                .send(
                    poise::CreateReply::default()
                        .embed(
                            poise::serenity_prelude::CreateEmbed::new()
                                .colour(colors::MOON)
                                .description(pretty_message(icon::ERROR, user_message(&error))),
                        )
                        .ephemeral(true),
                )
                .await;
        }
        other => {
            if let Err(err) = poise::builtins::on_error(other).await {
                error!(?err, "error while handling command error");
            }
        }
    }
}

fn user_message(error: &Error) -> String {
    match error.downcast_ref::<DeckError>() {
        Some(DeckError::InvalidConfiguration {
            tile_count,
            pool_size,
        }) => format!(
            "Não dá para montar um tabuleiro com **{tile_count}** peças. \
             Escolha um número par entre 2 e {}.",
            pool_size * 2
        ),
        None => {
            "Algo deu errado ao executar este comando. Tente novamente em instantes.".to_string()
        }
    }
}
