//! Base data types used throughout the plugin.

use std::fmt;

// ---------------------------------------------------------------------------
// ActorId
// ---------------------------------------------------------------------------

/// Stable unique identifier of a connected participant.
///
/// Assigned by the host for the lifetime of a session, following the same
/// convention as entity runtime IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// BlockPos (i32 x, y, z)
// ---------------------------------------------------------------------------

/// A discrete block coordinate in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring position one step along `face`.
    pub fn offset(&self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.offset();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// BlockFace
// ---------------------------------------------------------------------------

/// One of the six axis-aligned block faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl BlockFace {
    /// All faces, in Bedrock face-index order.
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Down,
        BlockFace::Up,
        BlockFace::North,
        BlockFace::South,
        BlockFace::West,
        BlockFace::East,
    ];

    /// Unit offset vector pointing out of this face.
    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            BlockFace::Down => (0, -1, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::North => (0, 0, -1),
            BlockFace::South => (0, 0, 1),
            BlockFace::West => (-1, 0, 0),
            BlockFace::East => (1, 0, 0),
        }
    }

    /// The face on the opposite side of the block.
    pub fn opposite(&self) -> BlockFace {
        match self {
            BlockFace::Down => BlockFace::Up,
            BlockFace::Up => BlockFace::Down,
            BlockFace::North => BlockFace::South,
            BlockFace::South => BlockFace::North,
            BlockFace::West => BlockFace::East,
            BlockFace::East => BlockFace::West,
        }
    }
}

impl fmt::Display for BlockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockFace::Down => "down",
            BlockFace::Up => "up",
            BlockFace::North => "north",
            BlockFace::South => "south",
            BlockFace::West => "west",
            BlockFace::East => "east",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_pos_offset() {
        let pos = BlockPos::new(10, 64, -3);
        assert_eq!(pos.offset(BlockFace::Up), BlockPos::new(10, 65, -3));
        assert_eq!(pos.offset(BlockFace::Down), BlockPos::new(10, 63, -3));
        assert_eq!(pos.offset(BlockFace::North), BlockPos::new(10, 64, -4));
        assert_eq!(pos.offset(BlockFace::East), BlockPos::new(11, 64, -3));
    }

    #[test]
    fn face_opposites() {
        for face in BlockFace::ALL {
            assert_eq!(face.opposite().opposite(), face);
            let (dx, dy, dz) = face.offset();
            let (ox, oy, oz) = face.opposite().offset();
            assert_eq!((dx + ox, dy + oy, dz + oz), (0, 0, 0));
        }
    }

    #[test]
    fn display_formats() {
        assert_eq!(ActorId(7).to_string(), "actor#7");
        assert_eq!(BlockPos::new(1, -2, 3).to_string(), "(1, -2, 3)");
        assert_eq!(BlockFace::Up.to_string(), "up");
    }
}
