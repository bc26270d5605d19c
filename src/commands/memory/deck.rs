use super::tile::Tile;
use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

/// Symbols in the order they are dealt. Smaller boards use the first ones.
pub const SYMBOL_POOL: [&str; 10] = [
    "❤️", "💧", "🎲", "☂️", "🧊", "🏐", "🦋", "🐦", "🌸", "📖",
];

pub const DEFAULT_TILE_COUNT: usize = 16;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DeckError {
    #[error(
        "cannot build a board with {tile_count} tiles from {pool_size} symbols \
         (the count must be even and at most twice the pool)"
    )]
    InvalidConfiguration { tile_count: usize, pool_size: usize },
}

/// Source of the permutation applied to a freshly dealt deck.
pub trait Shuffler {
    fn shuffle(&mut self, tiles: &mut [Tile]);
}

/// Uniform shuffle backed by any `rand` generator.
pub struct RandomShuffler<R>(pub R);

impl<R: Rng> Shuffler for RandomShuffler<R> {
    fn shuffle(&mut self, tiles: &mut [Tile]) {
        tiles.shuffle(&mut self.0);
    }
}

/// Deals `tile_count` hidden tiles: the first `tile_count / 2` symbols of the
/// pool, each twice, in the order chosen by `shuffler`.
pub fn build_deck<S>(
    tile_count: usize,
    symbol_pool: &[&'static str],
    shuffler: &mut S,
) -> Result<Vec<Tile>, DeckError>
where
    S: Shuffler + ?Sized,
{
    if tile_count % 2 != 0 || tile_count > symbol_pool.len() * 2 {
        return Err(DeckError::InvalidConfiguration {
            tile_count,
            pool_size: symbol_pool.len(),
        });
    }

    let used = &symbol_pool[..tile_count / 2];
    let mut tiles: Vec<Tile> = used
        .iter()
        .chain(used.iter())
        .map(|&symbol| Tile::new(symbol))
        .collect();

    shuffler.shuffle(&mut tiles);
    Ok(tiles)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::commands::memory::tile::TileState;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashMap;

    /// Leaves the deck as dealt: pool prefix followed by the same prefix again.
    pub(crate) struct DealtOrder;

    impl Shuffler for DealtOrder {
        fn shuffle(&mut self, _: &mut [Tile]) {}
    }

    /// Places the dealt tile `order[i]` at position `i`.
    pub(crate) struct FixedPermutation(pub Vec<usize>);

    impl Shuffler for FixedPermutation {
        fn shuffle(&mut self, tiles: &mut [Tile]) {
            let dealt = tiles.to_vec();
            for (slot, &from) in self.0.iter().enumerate() {
                tiles[slot] = dealt[from];
            }
        }
    }

    fn symbol_counts(tiles: &[Tile]) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::new();
        for tile in tiles {
            *counts.entry(tile.symbol).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_even_count_uses_the_pool_prefix_twice() {
        let mut shuffler = RandomShuffler(StdRng::seed_from_u64(7));
        for tile_count in (2..=SYMBOL_POOL.len() * 2).step_by(2) {
            let tiles = build_deck(tile_count, &SYMBOL_POOL, &mut shuffler).unwrap();
            assert_eq!(tiles.len(), tile_count);
            assert!(tiles.iter().all(|tile| tile.state == TileState::Hidden));

            let counts = symbol_counts(&tiles);
            assert_eq!(counts.len(), tile_count / 2);
            for symbol in &SYMBOL_POOL[..tile_count / 2] {
                assert_eq!(counts.get(symbol), Some(&2), "symbol {symbol}");
            }
        }
    }

    #[test]
    fn rejects_odd_counts() {
        let err = build_deck(7, &SYMBOL_POOL, &mut DealtOrder).unwrap_err();
        assert_eq!(
            err,
            DeckError::InvalidConfiguration {
                tile_count: 7,
                pool_size: SYMBOL_POOL.len()
            }
        );
    }

    #[test]
    fn rejects_counts_beyond_the_pool() {
        assert!(build_deck(22, &SYMBOL_POOL, &mut DealtOrder).is_err());
        assert!(build_deck(6, &["a", "b"], &mut DealtOrder).is_err());
        assert!(build_deck(4, &["a", "b"], &mut DealtOrder).is_ok());
    }

    #[test]
    fn zero_tiles_deal_an_empty_deck() {
        assert_eq!(build_deck(0, &SYMBOL_POOL, &mut DealtOrder), Ok(Vec::new()));
    }

    #[test]
    fn applies_the_supplied_permutation() {
        let mut shuffler = FixedPermutation(vec![0, 2, 1, 3]);
        let tiles = build_deck(4, &["A", "B"], &mut shuffler).unwrap();
        let symbols: Vec<_> = tiles.iter().map(|tile| tile.symbol).collect();
        assert_eq!(symbols, vec!["A", "A", "B", "B"]);
    }

    #[test]
    fn same_seed_deals_the_same_board() {
        let first = build_deck(16, &SYMBOL_POOL, &mut RandomShuffler(StdRng::seed_from_u64(42)));
        let second = build_deck(16, &SYMBOL_POOL, &mut RandomShuffler(StdRng::seed_from_u64(42)));
        assert_eq!(first, second);
    }
}
