use std::convert::TryFrom;


/// Static part of a cell. Fixed once the level has been parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    /// An ordinary tile the player can walk on.
    Floor,

    /// A square that has to be covered by a box to win.
    Target,

    /// A hole. Nothing can ever enter a void cell.
    Void,
}

/// Dynamic part of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foreground {
    None,
    Box,
    Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub background: Background,
    pub foreground: Foreground,
}

/// What a cell should currently be drawn as. Derived from the cell contents
/// on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    BoxMisplaced,
    BoxOnTarget,
    Target,
    Void,
    Floor,
}

impl TryFrom<char> for Cell {
    type Error = char;

    /// Try to parse a given character as one cell of a level description.
    ///
    /// In the on-disc format the target flag contributes 1, a box 2 and the
    /// player 4, with 6 reserved for void, so every reachable combination has
    /// its own digit:
    ///
    /// ```text
    /// 0 floor            1 target
    /// 2 box              3 box on target
    /// 4 player           5 player on target
    /// 6 void
    /// ```
    fn try_from(c: char) -> Result<Cell, char> {
        use self::Background::*;
        use self::Foreground::*;
        let (background, foreground) = match c {
            '0' => (Floor, None),
            '1' => (Target, None),
            '2' => (Floor, Box),
            '3' => (Target, Box),
            '4' => (Floor, Player),
            '5' => (Target, Player),
            '6' => (Void, None),
            _ => return Err(c),
        };
        Ok(Cell {
            background,
            foreground,
        })
    }
}

impl Cell {
    /// Given a Cell, return the digit representing it in the on-disc format.
    pub fn to_char(self) -> char {
        use self::Background::*;
        use self::Foreground::*;
        match (self.background, self.foreground) {
            (Floor, None) => '0',
            (Target, None) => '1',
            (Floor, Box) => '2',
            (Target, Box) => '3',
            (Floor, Player) => '4',
            (Target, Player) => '5',
            (Void, None) => '6',
            _ => panic!("Invalid cell: {:?}", self),
        }
    }

    /// Can the player or a box enter this cell right now? The player’s own
    /// cell and uncovered targets count as free, void cells never do.
    pub fn is_free(self) -> bool {
        self.background != Background::Void && self.foreground != Foreground::Box
    }

    /// Which sprite a renderer should use for this cell. A box on a target
    /// wins over everything else, then the player, then the bare background.
    pub fn sprite(self) -> Sprite {
        use self::Background::*;
        use self::Foreground::*;
        match (self.background, self.foreground) {
            (Target, Box) => Sprite::BoxOnTarget,
            (_, Player) => Sprite::Player,
            (Target, _) => Sprite::Target,
            (_, Box) => Sprite::BoxMisplaced,
            (Void, _) => Sprite::Void,
            _ => Sprite::Floor,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_from_char_to_char() {
        let s = "0123456";
        assert_eq!(s,
                   s.chars()
                       .map(|c| Cell::try_from(c).unwrap().to_char())
                       .collect::<String>());
    }

    #[test]
    fn test_only_valid_chars() {
        let s = "789 #.@$*+abcdefghij\\/_-αμ∈∩\n\r\t\"'<>[](){}";
        for c in s.chars() {
            assert!(Cell::try_from(c).is_err());
        }
        for c in "0123456".chars() {
            assert!(Cell::try_from(c).is_ok());
        }
    }

    #[test]
    fn test_sprites() {
        let sprites: Vec<_> = "0123456"
            .chars()
            .map(|c| Cell::try_from(c).unwrap().sprite())
            .collect();
        assert_eq!(sprites,
                   vec![Sprite::Floor,
                        Sprite::Target,
                        Sprite::BoxMisplaced,
                        Sprite::BoxOnTarget,
                        Sprite::Player,
                        Sprite::Player,
                        Sprite::Void]);
    }

    #[test]
    fn test_free_cells() {
        for c in "0145".chars() {
            assert!(Cell::try_from(c).unwrap().is_free());
        }
        for c in "236".chars() {
            assert!(!Cell::try_from(c).unwrap().is_free());
        }
    }
}
