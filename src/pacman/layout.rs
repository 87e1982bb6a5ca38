//! ASCII maze layouts.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::grid::Position;

/// A parsed maze: walls, food, capsules, and agent start positions.
///
/// Layouts are written as ASCII text, one row per line:
///
/// - `%` wall
/// - `.` food pellet
/// - `o` power capsule
/// - `P` Pacman start (exactly one)
/// - `G` ghost start
/// - space: empty
///
/// # Examples
///
/// ```
/// use pacsearch::pacman::Layout;
///
/// let layout = Layout::parse(
///     "%%%%%\n\
///      %P.G%\n\
///      %%%%%",
/// ).unwrap();
/// assert_eq!(layout.width, 5);
/// assert_eq!(layout.food.len(), 1);
/// assert_eq!(layout.ghost_starts.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    walls: HashSet<Position>,
    pub food: Vec<Position>,
    pub capsules: Vec<Position>,
    pub pacman_start: Position,
    pub ghost_starts: Vec<Position>,
}

impl Layout {
    /// Parse a layout from ASCII text.
    ///
    /// Leading and trailing blank lines are ignored; all remaining rows must
    /// have the same width.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error for an empty layout, ragged rows, unknown
    /// characters, or a missing or duplicated Pacman start.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.trim_matches('\n').lines().collect();
        if rows.is_empty() || rows.iter().all(|row| row.is_empty()) {
            return Err(Error::EmptyLayout);
        }

        let width = rows[0].chars().count();
        let mut walls = HashSet::new();
        let mut food = Vec::new();
        let mut capsules = Vec::new();
        let mut pacman_starts = Vec::new();
        let mut ghost_starts = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                return Err(Error::RaggedLayout {
                    line: y,
                    got: row_width,
                    expected: width,
                });
            }

            for (x, character) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match character {
                    '%' => {
                        walls.insert(position);
                    }
                    '.' => food.push(position),
                    'o' => capsules.push(position),
                    'P' => pacman_starts.push(position),
                    'G' => ghost_starts.push(position),
                    ' ' => {}
                    _ => {
                        return Err(Error::UnknownLayoutCharacter {
                            character,
                            line: y,
                            column: x,
                        });
                    }
                }
            }
        }

        let pacman_start = match pacman_starts.as_slice() {
            [] => return Err(Error::MissingPacman),
            [start] => *start,
            many => {
                return Err(Error::DuplicatePacman { count: many.len() });
            }
        };

        food.sort();
        capsules.sort();
        ghost_starts.sort();

        Ok(Layout {
            width: width as i32,
            height: rows.len() as i32,
            walls,
            food,
            capsules,
            pacman_start,
            ghost_starts,
        })
    }

    /// Whether the position lies inside the layout rectangle.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Whether the position is blocked. Out-of-bounds cells count as walls.
    pub fn is_wall(&self, position: Position) -> bool {
        !self.in_bounds(position) || self.walls.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
%%%%%
%P o%
%.%G%
%%%%%";

    #[test]
    fn parses_all_cell_kinds() {
        let layout = Layout::parse(SMALL).unwrap();
        assert_eq!(layout.width, 5);
        assert_eq!(layout.height, 4);
        assert_eq!(layout.pacman_start, Position::new(1, 1));
        assert_eq!(layout.food, vec![Position::new(1, 2)]);
        assert_eq!(layout.capsules, vec![Position::new(3, 1)]);
        assert_eq!(layout.ghost_starts, vec![Position::new(3, 2)]);
        assert!(layout.is_wall(Position::new(0, 0)));
        assert!(layout.is_wall(Position::new(2, 2)));
        assert!(!layout.is_wall(Position::new(2, 1)));
    }

    #[test]
    fn out_of_bounds_counts_as_wall() {
        let layout = Layout::parse(SMALL).unwrap();
        assert!(layout.is_wall(Position::new(-1, 0)));
        assert!(layout.is_wall(Position::new(0, 99)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Layout::parse("%%%\n%P%%\n%%%");
        assert!(matches!(result, Err(Error::RaggedLayout { line: 1, .. })));
    }

    #[test]
    fn rejects_unknown_characters() {
        let result = Layout::parse("%%%\n%X%\n%%%");
        assert!(matches!(
            result,
            Err(Error::UnknownLayoutCharacter {
                character: 'X',
                line: 1,
                column: 1,
            })
        ));
    }

    #[test]
    fn rejects_missing_or_duplicate_pacman() {
        assert!(matches!(
            Layout::parse("%%%\n%.%\n%%%"),
            Err(Error::MissingPacman)
        ));
        assert!(matches!(
            Layout::parse("%%%%\n%PP%\n%%%%"),
            Err(Error::DuplicatePacman { count: 2 })
        ));
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(Layout::parse("\n\n"), Err(Error::EmptyLayout)));
    }
}
