use rand::seq::SliceRandom;
use rand::Rng;

use crate::{GOAL_H, GOAL_W, TILE_COPIES};

/// A displayed tile token. `Empty` is the reserved unoccupied slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Empty,
    Red,
    Yellow,
    Blue,
    White,
    Green,
    Orange,
}

pub const PALETTE: [Tile; 6] = [
    Tile::Red,
    Tile::Yellow,
    Tile::Blue,
    Tile::White,
    Tile::Green,
    Tile::Orange,
];

impl Tile {
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }
}

/// Full play-grid layout: four of each palette color plus the single empty
/// slot, uniformly shuffled.
pub fn generate_layout(rng: &mut impl Rng) -> Vec<Tile> {
    let mut tiles: Vec<Tile> = PALETTE
        .iter()
        .flat_map(|&tile| std::iter::repeat(tile).take(TILE_COPIES))
        .collect();
    tiles.push(Tile::Empty);
    tiles.shuffle(rng);
    tiles
}

/// Goal pattern: the first nine occupied tiles of an independent shuffle.
/// Never contains `Empty`.
pub fn generate_goal(rng: &mut impl Rng) -> Vec<Tile> {
    generate_layout(rng)
        .into_iter()
        .filter(|tile| !tile.is_empty())
        .take(GOAL_W * GOAL_H)
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn layout_is_a_full_tile_multiset() {
        for seed in 0..32 {
            let layout = generate_layout(&mut StdRng::seed_from_u64(seed));
            assert_eq!(layout.len(), PALETTE.len() * TILE_COPIES + 1);
            assert_eq!(layout.iter().filter(|tile| tile.is_empty()).count(), 1);
            for tile in PALETTE {
                assert_eq!(
                    layout.iter().filter(|&&t| t == tile).count(),
                    TILE_COPIES,
                    "wrong count for {tile:?} with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn goal_pattern_is_never_empty() {
        for seed in 0..32 {
            let goal = generate_goal(&mut StdRng::seed_from_u64(seed));
            assert_eq!(goal.len(), GOAL_W * GOAL_H);
            assert!(goal.iter().all(|tile| !tile.is_empty()));
        }
    }
}
