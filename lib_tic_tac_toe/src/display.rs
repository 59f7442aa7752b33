use crate::{Board, Mark};
use std::fmt;

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match *self {
            Mark::X => "X",
            Mark::O => "O",
        };

        write!(f, "{}", symbol)
    }
}

impl fmt::Display for Board {
    /// Renders rows top to bottom with 1-based row and column headers.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   1  2  3")?;

        for row in 0..3 {
            write!(f, "\n{} ", row + 1)?;

            for col in 0..3 {
                match self.cells[col + 3 * row] {
                    Some(mark) => write!(f, "[{}]", mark)?,
                    None => write!(f, "[ ]")?,
                }
            }
        }

        Ok(())
    }
}
