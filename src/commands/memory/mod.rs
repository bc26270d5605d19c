use crate::{
    Context, Error,
    constants::icon,
    functions::ui::{
        component::{
            MessageHandle, edit_message, send_ephemeral_response, update_component_message,
        },
        pretty_message::pretty_message,
        prompt::{PlayPromptOptions, PromptOutcome, play_prompt},
    },
};
use futures::StreamExt;
use poise::serenity_prelude::{self as serenity, Mentionable};
use rand::Rng;
use serenity::builder::CreateInteractionResponseFollowup;
use serenity::collector::ComponentInteractionCollector;
use std::pin::pin;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, warn};

mod board;
mod deck;
mod render;
mod scheduler;
mod tile;

use board::{Board, FlipOutcome, IgnoreReason, REVEAL_DELAY};
use deck::{DEFAULT_TILE_COUNT, RandomShuffler, SYMBOL_POOL};
use render::{abandoned_embed, finish_embed, parse_index, render_board, start_embed};
use scheduler::TokioScheduler;

pub use deck::DeckError;

const GAME_TIMEOUT: Duration = Duration::from_secs(300);
const PROMPT_TIMEOUT: Duration = Duration::from_secs(60);

/// Board size and pacing shared by every game the bot hosts.
#[derive(Clone, Copy, Debug)]
pub struct GameSettings {
    pub tile_count: usize,
    pub reveal_delay: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tile_count: DEFAULT_TILE_COUNT,
            reveal_delay: REVEAL_DELAY,
        }
    }
}

enum GameOutcome {
    Won { tries: u32, total_pairs: usize },
    Abandoned,
}

/// Jogo da memória: vire as peças procurando pares.
#[poise::command(
    slash_command,
    prefix_command,
    interaction_context = "Guild",
    category = "Jogos",
    rename = "memoria"
)]
pub async fn memory(
    ctx: Context<'_>,
    #[description = "Quantidade de peças (número par)"]
    #[min = 2]
    #[max = 20]
    pecas: Option<u32>,
) -> Result<(), Error> {
    let settings = ctx.data().settings;
    let tile_count = requested_tile_count(pecas, settings)?;
    let player = ctx.author().clone();

    // Deal up front so a bad tile count fails before any screen is shown.
    let mut board = deal_board(tile_count, settings)?;
    info!(player = %player.id, tile_count, "memory game requested");

    let mut prompt = play_prompt(
        &ctx,
        player.id,
        None,
        PlayPromptOptions::new(start_embed(&player, tile_count), "Jogar"),
    )
    .await?;

    loop {
        let PromptOutcome::Pressed(interaction) = prompt.outcome else {
            return Ok(());
        };

        let outcome = run_game(&ctx, &player, board, prompt.message, interaction).await?;
        let GameOutcome::Won { tries, total_pairs } = outcome else {
            return Ok(());
        };

        let mut options = PlayPromptOptions::new(
            finish_embed(&player, tries, total_pairs),
            "Jogar de novo",
        );
        options.emoji = '🔁';
        options.timeout = PROMPT_TIMEOUT;

        board = deal_board(tile_count, settings)?;
        prompt = play_prompt(&ctx, player.id, Some(prompt.message), options).await?;
    }
}

/// Board size for this game. The deck accepts an empty board, a game does not.
fn requested_tile_count(pecas: Option<u32>, settings: GameSettings) -> Result<usize, DeckError> {
    match pecas.map_or(settings.tile_count, |count| count as usize) {
        0 => Err(DeckError::InvalidConfiguration {
            tile_count: 0,
            pool_size: SYMBOL_POOL.len(),
        }),
        tile_count => Ok(tile_count),
    }
}

fn deal_board(tile_count: usize, settings: GameSettings) -> Result<Board<TokioScheduler>, DeckError> {
    Board::deal(
        tile_count,
        &SYMBOL_POOL,
        &mut RandomShuffler(rand::rng()),
        TokioScheduler,
        settings.reveal_delay,
    )
}

async fn run_game(
    ctx: &Context<'_>,
    player: &serenity::User,
    mut board: Board<TokioScheduler>,
    message: MessageHandle,
    opening: serenity::ComponentInteraction,
) -> Result<GameOutcome, Error> {
    let custom_id_prefix = format!("mem_{}_", rand::rng().random::<u64>());
    let mut status = pretty_message(icon::BELL, "Abra duas peças e encontre os pares!");

    let (embed, components) = render_board(&board.snapshot(), player, &custom_id_prefix, &status);
    update_component_message(ctx, &opening, embed, components).await?;

    let mut interactions = pin!(
        ComponentInteractionCollector::new(ctx.serenity_context())
            .message_id(message.message_id)
            .stream()
    );
    let mut idle = pin!(sleep(GAME_TIMEOUT));

    loop {
        tokio::select! {
            interaction = interactions.next() => {
                let Some(interaction) = interaction else {
                    break;
                };
                if interaction.user.id != player.id {
                    send_ephemeral_response(
                        ctx,
                        &interaction,
                        pretty_message(
                            icon::ERROR,
                            "Somente quem começou o jogo pode virar as peças.",
                        ),
                    )
                    .await?;
                    continue;
                }
                idle.as_mut().reset(Instant::now() + GAME_TIMEOUT);

                let Some(index) = parse_index(&interaction.data.custom_id, &custom_id_prefix) else {
                    interaction.defer(ctx.serenity_context()).await?;
                    continue;
                };

                match board.request_flip(index) {
                    FlipOutcome::Ignored(reason) => {
                        send_ephemeral_response(ctx, &interaction, ignored_message(reason)).await?;
                    }
                    FlipOutcome::Revealed => {
                        let (embed, components) =
                            render_board(&board.snapshot(), player, &custom_id_prefix, &status);
                        update_component_message(ctx, &interaction, embed, components).await?;
                    }
                    FlipOutcome::Compared { pair, matched, tries } => {
                        debug!(player = %player.id, ?pair, matched, tries, "pair flipped");
                        status = if matched {
                            pretty_message(
                                icon::CHECK,
                                format!("{} encontrou um par!", player.mention()),
                            )
                        } else {
                            pretty_message(icon::ERROR, "Não foi dessa vez.")
                        };

                        let (embed, components) =
                            render_board(&board.snapshot(), player, &custom_id_prefix, &status);
                        update_component_message(ctx, &interaction, embed, components).await?;

                        if matched {
                            celebrate(ctx, &interaction);
                        }
                    }
                }
            }
            resolution = board.settle() => {
                debug!(pair = ?resolution.pair, matched = resolution.matched, "pair resolved");
                if resolution.finished {
                    return Ok(GameOutcome::Won {
                        tries: board.tries(),
                        total_pairs: board.total_pairs(),
                    });
                }

                status = pretty_message(icon::BELL, "Escolha a próxima peça.");
                let (embed, components) =
                    render_board(&board.snapshot(), player, &custom_id_prefix, &status);
                edit_message(ctx, message, embed, components).await?;
            }
            () = &mut idle => {
                debug!(player = %player.id, "memory game idle");
                break;
            }
        }
    }

    info!(player = %player.id, tries = board.tries(), "memory game abandoned");
    edit_message(ctx, message, abandoned_embed(&board.snapshot(), player), Vec::new()).await?;
    Ok(GameOutcome::Abandoned)
}

fn ignored_message(reason: IgnoreReason) -> String {
    match reason {
        IgnoreReason::ComparisonPending => {
            pretty_message(icon::TIMER, "Espere um instante enquanto confiro as peças.")
        }
        IgnoreReason::AlreadyRevealed | IgnoreReason::AlreadyMatched => {
            pretty_message(icon::ERROR, "Essa peça já está virada. Escolha outra.")
        }
        IgnoreReason::OutOfRange => pretty_message(icon::ERROR, "Essa peça não existe."),
    }
}

/// Fire-and-forget confetti for a found pair. Never awaited by the game loop.
fn celebrate(ctx: &Context<'_>, interaction: &serenity::ComponentInteraction) {
    let http = ctx.serenity_context().http.clone();
    let interaction = interaction.clone();

    tokio::spawn(async move {
        let followup = CreateInteractionResponseFollowup::new()
            .content(format!("{0} Par encontrado! {0}", icon::PARTY))
            .ephemeral(true);

        if let Err(err) = interaction.create_followup(&*http, followup).await {
            warn!(?err, "celebration follow-up failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tiles_cannot_start_a_game() {
        let settings = GameSettings::default();
        assert_eq!(
            requested_tile_count(Some(0), settings),
            Err(DeckError::InvalidConfiguration {
                tile_count: 0,
                pool_size: SYMBOL_POOL.len()
            })
        );

        let empty_default = GameSettings {
            tile_count: 0,
            ..settings
        };
        assert!(requested_tile_count(None, empty_default).is_err());
    }

    #[test]
    fn picks_the_requested_or_configured_size() {
        let settings = GameSettings::default();
        assert_eq!(requested_tile_count(Some(8), settings), Ok(8));
        assert_eq!(requested_tile_count(None, settings), Ok(DEFAULT_TILE_COUNT));
        // Odd sizes are left for the deck to reject.
        assert_eq!(requested_tile_count(Some(7), settings), Ok(7));
    }
}
