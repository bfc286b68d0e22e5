use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

/// A word slot in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub i: usize,
    pub j: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    /// Grid cells covered by this slot, in word order
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length)
            .map(|k| match self.direction {
                Direction::Across => (self.i, self.j + k),
                Direction::Down => (self.i + k, self.j),
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("structure grid has no open cells")]
    EmptyStructure,
    #[error("word list is empty")]
    EmptyWords,
}

/// A crossword puzzle: the grid structure and the candidate words
pub struct Crossword {
    pub height: usize,
    pub width: usize,
    /// true marks an open cell
    structure: Vec<Vec<bool>>,
    words: BTreeSet<String>,
    variables: BTreeSet<Variable>,
    /// Indices of the shared cell within each pair of overlapping slots
    overlaps: HashMap<(Variable, Variable), (usize, usize)>,
}

impl Crossword {
    /// Parses a structure grid (`_` marks an open cell, anything else is
    /// blocked) and a newline-separated word list
    pub fn parse(structure: &str, words: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = structure.lines().collect();
        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut grid = vec![vec![false; width]; height];
        for (i, line) in lines.iter().enumerate() {
            for (j, c) in line.chars().enumerate() {
                grid[i][j] = c == '_';
            }
        }

        if !grid.iter().flatten().any(|&cell| cell) {
            return Err(ParseError::EmptyStructure);
        }

        let words: BTreeSet<String> = words
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_uppercase)
            .collect();
        if words.is_empty() {
            return Err(ParseError::EmptyWords);
        }

        let variables = find_variables(&grid);
        let overlaps = find_overlaps(&variables);

        Ok(Crossword {
            height,
            width,
            structure: grid,
            words,
            variables,
            overlaps,
        })
    }

    pub fn is_open(&self, i: usize, j: usize) -> bool {
        self.structure[i][j]
    }

    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn variables(&self) -> &BTreeSet<Variable> {
        &self.variables
    }

    /// The shared cell of two slots as indices into each word, if the slots
    /// overlap
    pub fn overlap(&self, x: Variable, y: Variable) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Slots sharing a cell with `var`
    pub fn neighbors(&self, var: Variable) -> Vec<Variable> {
        self.variables
            .iter()
            .copied()
            .filter(|&other| other != var && self.overlap(var, other).is_some())
            .collect()
    }
}

/// Scans the grid for maximal horizontal and vertical runs of open cells of
/// length at least two
fn find_variables(grid: &[Vec<bool>]) -> BTreeSet<Variable> {
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);
    let open = |i: usize, j: usize| grid[i][j];
    let mut variables = BTreeSet::new();

    for i in 0..height {
        for j in 0..width {
            if !open(i, j) {
                continue;
            }

            // a run starts where the previous cell is blocked or missing
            if j == 0 || !open(i, j - 1) {
                let length = (j..width).take_while(|&jj| open(i, jj)).count();
                if length >= 2 {
                    variables.insert(Variable {
                        i,
                        j,
                        direction: Direction::Across,
                        length,
                    });
                }
            }

            if i == 0 || !open(i - 1, j) {
                let length = (i..height).take_while(|&ii| open(ii, j)).count();
                if length >= 2 {
                    variables.insert(Variable {
                        i,
                        j,
                        direction: Direction::Down,
                        length,
                    });
                }
            }
        }
    }

    variables
}

fn find_overlaps(variables: &BTreeSet<Variable>) -> HashMap<(Variable, Variable), (usize, usize)> {
    let mut overlaps = HashMap::new();

    for &x in variables {
        for &y in variables {
            if x == y {
                continue;
            }

            let y_cells: HashMap<(usize, usize), usize> = y
                .cells()
                .into_iter()
                .enumerate()
                .map(|(index, cell)| (cell, index))
                .collect();

            for (x_index, cell) in x.cells().into_iter().enumerate() {
                if let Some(&y_index) = y_cells.get(&cell) {
                    overlaps.insert((x, y), (x_index, y_index));
                }
            }
        }
    }

    overlaps
}
