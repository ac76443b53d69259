use std::collections::HashSet;

use colored::Colorize;

use crate::{
    algorithms::{SearchResult, Strategy},
    maze::{Cell, Grid, Position},
};

pub type Rgb = (u8, u8, u8);

pub fn strategy_color(strategy: Strategy) -> Rgb {
    match strategy {
        Strategy::Greedy => (0x4c, 0xaf, 0x50),
        Strategy::AStar => (0x21, 0x96, 0xf3),
        Strategy::Dfs => (0xff, 0x98, 0x00),
        Strategy::Bfs => (0x9c, 0x27, 0xb0),
        Strategy::Dijkstra => (0x79, 0x55, 0x48),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Start,
    Food,
    Obstacle,
    Path,
    Explored,
    Empty,
}

impl Glyph {
    fn as_char(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Food => 'F',
            Self::Obstacle => '#',
            Self::Path => '*',
            Self::Explored => '·',
            Self::Empty => '.',
        }
    }
}

fn glyph_rows(grid: &Grid, result: &SearchResult, show_trace: bool) -> Vec<Vec<Glyph>> {
    let path: HashSet<Position> = result.path.iter().flatten().copied().collect();
    let explored: HashSet<Position> = if show_trace {
        result.trace.iter().map(|edge| edge.to).collect()
    } else {
        HashSet::new()
    };

    (0..grid.size())
        .map(|y| {
            (0..grid.size())
                .map(|x| {
                    let pos = Position::new(x, y);
                    match grid.kind_at(pos) {
                        _ if pos == grid.start() => Glyph::Start,
                        Cell::Food => Glyph::Food,
                        Cell::Obstacle => Glyph::Obstacle,
                        Cell::Empty if path.contains(&pos) => Glyph::Path,
                        Cell::Empty if explored.contains(&pos) => Glyph::Explored,
                        Cell::Empty => Glyph::Empty,
                    }
                })
                .collect()
        })
        .collect()
}

/// plain-text map of a search result
pub fn render_plain(grid: &Grid, result: &SearchResult, show_trace: bool) -> String {
    glyph_rows(grid, result, show_trace)
        .into_iter()
        .map(|row| row.into_iter().map(Glyph::as_char).collect::<String>() + "\n")
        .collect()
}

/// terminal map with the path painted in `color`
pub fn render(grid: &Grid, result: &SearchResult, show_trace: bool, color: Rgb) -> String {
    let (r, g, b) = color;
    let mut out = String::new();

    for row in glyph_rows(grid, result, show_trace) {
        for glyph in row {
            let text = glyph.as_char().to_string();
            let painted = match glyph {
                Glyph::Start => text.green().bold(),
                Glyph::Food => text.red().bold(),
                Glyph::Obstacle => text.bright_black(),
                Glyph::Path => text.truecolor(r, g, b).bold(),
                Glyph::Explored => text.truecolor(r, g, b).dimmed(),
                Glyph::Empty => text.normal(),
            };
            out.push_str(&painted.to_string());
        }
        out.push('\n');
    }

    out
}
