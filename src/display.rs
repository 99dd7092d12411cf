use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use four_in_line::{board::*, BOARD_SIZE};

/// Draws the board with coloured pieces, row letters down the side and
/// column digits across the top
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let columns: String = (1..=BOARD_SIZE).map(|x| format!(" {}", x)).collect();
    stdout.queue(PrintStyledContent(
        style(format!(" {}\n", columns)).attribute(Attribute::Bold),
    ))?;

    for row in 0..BOARD_SIZE {
        let letter = (b'A' + row as u8) as char;
        stdout.queue(PrintStyledContent(style(letter).attribute(Attribute::Bold)))?;

        for column in 0..BOARD_SIZE {
            let (symbol, color) = match board.get(row, column) {
                Cell::Computer => ('X', Color::Red),
                Cell::Human => ('O', Color::Yellow),
                Cell::Empty => ('-', Color::DarkGrey),
            };
            stdout.queue(PrintStyledContent(style(format!(" {}", symbol)).with(color)))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
