use super::board::BoardSnapshot;
use super::deck::SYMBOL_POOL;
use super::tile::{Tile, TileState};
use crate::constants::{colors, icon};
use crate::functions::ui::pretty_message::pretty_message;
use poise::serenity_prelude as serenity;
use serenity::{CreateActionRow, CreateButton};

pub const BOARD_COLUMNS: usize = 4;
/// Discord caps a message at five component rows.
const MAX_ROWS: usize = 5;
const HIDDEN_LABEL: &str = "❔";

const _: () = assert!(SYMBOL_POOL.len() * 2 <= BOARD_COLUMNS * MAX_ROWS);

pub struct TileFace {
    pub label: &'static str,
    pub style: serenity::ButtonStyle,
    pub disabled: bool,
}

pub fn tile_face(tile: &Tile) -> TileFace {
    match tile.state {
        TileState::Hidden => TileFace {
            label: HIDDEN_LABEL,
            style: serenity::ButtonStyle::Primary,
            disabled: false,
        },
        TileState::Revealed => TileFace {
            label: tile.symbol,
            style: serenity::ButtonStyle::Secondary,
            disabled: true,
        },
        TileState::Matched => TileFace {
            label: tile.symbol,
            style: serenity::ButtonStyle::Success,
            disabled: true,
        },
    }
}

pub fn render_board(
    snapshot: &BoardSnapshot<'_>,
    player: &serenity::User,
    custom_id_prefix: &str,
    status: &str,
) -> (serenity::CreateEmbed, Vec<CreateActionRow>) {
    (
        build_embed(snapshot, player, status),
        build_components(snapshot, custom_id_prefix),
    )
}

fn build_embed(
    snapshot: &BoardSnapshot<'_>,
    player: &serenity::User,
    status: &str,
) -> serenity::CreateEmbed {
    let lines = [
        pretty_message(
            icon::CHECK,
            format!(
                "**{}/{}** pares descobertos",
                snapshot.matched_pairs, snapshot.total_pairs
            ),
        ),
        pretty_message(icon::TIMER, format!("**{}** tentativas", snapshot.tries)),
        String::new(),
        status.to_string(),
    ];

    let embed = serenity::CreateEmbed::new()
        .title(format!("{} Memória de {}", icon::BRAIN, player.name))
        .colour(colors::MOON)
        .description(lines.join("\n"));

    if snapshot.pending {
        embed.footer(serenity::CreateEmbedFooter::new("Conferindo o par..."))
    } else {
        embed
    }
}

pub fn build_components(snapshot: &BoardSnapshot<'_>, custom_id_prefix: &str) -> Vec<CreateActionRow> {
    snapshot
        .tiles
        .chunks(BOARD_COLUMNS)
        .enumerate()
        .map(|(row, tiles)| {
            let buttons = tiles
                .iter()
                .enumerate()
                .map(|(column, tile)| {
                    let index = row * BOARD_COLUMNS + column;
                    let face = tile_face(tile);
                    CreateButton::new(format!("{custom_id_prefix}{index}"))
                        .label(face.label)
                        .style(face.style)
                        .disabled(face.disabled)
                })
                .collect();
            CreateActionRow::Buttons(buttons)
        })
        .collect()
}

pub fn start_embed(player: &serenity::User, tile_count: usize) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(format!("{} Memória", icon::BRAIN))
        .colour(colors::MOON)
        .description(pretty_message(
            icon::BELL,
            format!(
                "{}, vire as peças procurando pares! O tabuleiro tem **{tile_count}** peças.",
                player.name
            ),
        ))
}

pub fn finish_embed(player: &serenity::User, tries: u32, total_pairs: usize) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(format!("{} Memória de {}", icon::PARTY, player.name))
        .colour(colors::MINT)
        .description(pretty_message(
            icon::CHECK,
            format!("Todos os **{total_pairs}** pares encontrados em **{tries}** tentativas!"),
        ))
}

pub fn abandoned_embed(snapshot: &BoardSnapshot<'_>, player: &serenity::User) -> serenity::CreateEmbed {
    build_embed(
        snapshot,
        player,
        &pretty_message(icon::ERROR, "Jogo encerrado por inatividade."),
    )
}

pub fn parse_index(custom_id: &str, prefix: &str) -> Option<usize> {
    custom_id.strip_prefix(prefix)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(tiles: &[Tile]) -> BoardSnapshot<'_> {
        BoardSnapshot {
            tiles,
            tries: 0,
            matched_pairs: 0,
            total_pairs: tiles.len() / 2,
            pending: false,
        }
    }

    #[test]
    fn hidden_tiles_keep_their_symbol_secret() {
        let face = tile_face(&Tile::new("🎲"));
        assert_eq!(face.label, HIDDEN_LABEL);
        assert!(!face.disabled);
        assert!(matches!(face.style, serenity::ButtonStyle::Primary));
    }

    #[test]
    fn revealed_and_matched_tiles_show_the_symbol() {
        let revealed = tile_face(&Tile {
            symbol: "🎲",
            state: TileState::Revealed,
        });
        assert_eq!(revealed.label, "🎲");
        assert!(revealed.disabled);
        assert!(matches!(revealed.style, serenity::ButtonStyle::Secondary));

        let matched = tile_face(&Tile {
            symbol: "🎲",
            state: TileState::Matched,
        });
        assert_eq!(matched.label, "🎲");
        assert!(matched.disabled);
        assert!(matches!(matched.style, serenity::ButtonStyle::Success));
    }

    #[test]
    fn lays_tiles_out_four_per_row() {
        let tiles: Vec<Tile> = SYMBOL_POOL
            .iter()
            .chain(SYMBOL_POOL.iter())
            .map(|&symbol| Tile::new(symbol))
            .collect();
        let rows = build_components(&snapshot(&tiles), "mem_1_");
        assert_eq!(rows.len(), MAX_ROWS);

        let short = build_components(&snapshot(&tiles[..6]), "mem_1_");
        assert_eq!(short.len(), 2);
        match &short[1] {
            CreateActionRow::Buttons(buttons) => assert_eq!(buttons.len(), 2),
            _ => panic!("expected a button row"),
        }
    }

    #[test]
    fn parses_indices_from_custom_ids() {
        assert_eq!(parse_index("mem_42_7", "mem_42_"), Some(7));
        assert_eq!(parse_index("mem_42_15", "mem_42_"), Some(15));
        assert_eq!(parse_index("mem_41_7", "mem_42_"), None);
        assert_eq!(parse_index("mem_42_x", "mem_42_"), None);
    }
}
