/// Where a tile is in its lifecycle. `Matched` is terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TileState {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tile {
    pub symbol: &'static str,
    pub state: TileState,
}

impl Tile {
    pub const fn new(symbol: &'static str) -> Self {
        Self {
            symbol,
            state: TileState::Hidden,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.state == TileState::Revealed
    }

    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }
}
