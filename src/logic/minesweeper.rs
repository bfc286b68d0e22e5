use rand::seq::IteratorRandom;
use rand::Rng;
use smallvec::SmallVec;
use std::collections::HashSet;

pub type Cell = (usize, usize);

/// Statement about the board: exactly `count` of `cells` are mines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    cells: HashSet<Cell>,
    count: usize,
}

impl Clue {
    pub fn new<I: IntoIterator<Item = Cell>>(cells: I, count: usize) -> Self {
        Clue {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells provably mines: all of them, when the count covers every cell
    pub fn known_mines(&self) -> Option<&HashSet<Cell>> {
        (!self.cells.is_empty() && self.cells.len() == self.count).then_some(&self.cells)
    }

    /// Cells provably safe: all of them, when the count is zero
    pub fn known_safes(&self) -> Option<&HashSet<Cell>> {
        (!self.cells.is_empty() && self.count == 0).then_some(&self.cells)
    }

    /// Removes a cell known to be a mine
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count -= 1;
        }
    }

    /// Removes a cell known to be safe
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Subset inference: when `other`'s cells are a proper subset of ours,
    /// the difference holds the difference of the counts
    fn difference(&self, other: &Clue) -> Option<Clue> {
        if other.cells.is_empty() || !other.cells.is_subset(&self.cells) {
            return None;
        }
        if other.cells.len() == self.cells.len() {
            return None;
        }

        Some(Clue {
            cells: self.cells.difference(&other.cells).copied().collect(),
            count: self.count - other.count,
        })
    }
}

/// Knowledge-based minesweeper player
pub struct Agent {
    height: usize,
    width: usize,
    moves_made: HashSet<Cell>,
    mines: HashSet<Cell>,
    safes: HashSet<Cell>,
    knowledge: Vec<Clue>,
}

impl Agent {
    pub fn new(height: usize, width: usize) -> Self {
        Agent {
            height,
            width,
            moves_made: HashSet::new(),
            mines: HashSet::new(),
            safes: HashSet::new(),
            knowledge: Vec::new(),
        }
    }

    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    pub fn safes(&self) -> &HashSet<Cell> {
        &self.safes
    }

    /// Marks a cell as a mine in every sentence of the knowledge base
    pub fn mark_mine(&mut self, cell: Cell) {
        self.mines.insert(cell);
        for clue in &mut self.knowledge {
            clue.mark_mine(cell);
        }
    }

    /// Marks a cell as safe in every sentence of the knowledge base
    pub fn mark_safe(&mut self, cell: Cell) {
        self.safes.insert(cell);
        for clue in &mut self.knowledge {
            clue.mark_safe(cell);
        }
    }

    fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        let mut neighbors = SmallVec::new();

        for i in cell.0.saturating_sub(1)..=(cell.0 + 1).min(self.height - 1) {
            for j in cell.1.saturating_sub(1)..=(cell.1 + 1).min(self.width - 1) {
                if (i, j) != cell {
                    neighbors.push((i, j));
                }
            }
        }

        neighbors
    }

    /// Records that the safe cell `cell` has `count` neighboring mines, and
    /// derives everything the knowledge base now implies
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) {
        self.moves_made.insert(cell);
        self.mark_safe(cell);

        // the new sentence, reduced by what is already known
        let mut clue = Clue::new(self.neighbors(cell), count);
        for &safe in &self.safes {
            clue.mark_safe(safe);
        }
        for &mine in &self.mines {
            clue.mark_mine(mine);
        }
        self.knowledge.push(clue);

        // close over the knowledge base until nothing new follows
        loop {
            let mut new_safes: HashSet<Cell> = HashSet::new();
            let mut new_mines: HashSet<Cell> = HashSet::new();
            for clue in &self.knowledge {
                if let Some(cells) = clue.known_safes() {
                    new_safes.extend(cells);
                }
                if let Some(cells) = clue.known_mines() {
                    new_mines.extend(cells);
                }
            }
            new_safes.retain(|c| !self.safes.contains(c));
            new_mines.retain(|c| !self.mines.contains(c));

            let mut inferred: Vec<Clue> = Vec::new();
            for a in &self.knowledge {
                for b in &self.knowledge {
                    if let Some(clue) = a.difference(b) {
                        if !self.knowledge.contains(&clue) && !inferred.contains(&clue) {
                            inferred.push(clue);
                        }
                    }
                }
            }

            if new_safes.is_empty() && new_mines.is_empty() && inferred.is_empty() {
                break;
            }

            for &cell in &new_safes {
                self.mark_safe(cell);
            }
            for &cell in &new_mines {
                self.mark_mine(cell);
            }
            for mut clue in inferred {
                for &safe in &self.safes {
                    clue.mark_safe(safe);
                }
                for &mine in &self.mines {
                    clue.mark_mine(mine);
                }
                if !clue.is_empty() && !self.knowledge.contains(&clue) {
                    self.knowledge.push(clue);
                }
            }
            self.knowledge.retain(|clue| !clue.is_empty());
        }
    }

    /// A cell known to be safe that hasn't been played yet
    pub fn safe_move<R: Rng>(&self, rng: &mut R) -> Option<Cell> {
        self.safes
            .difference(&self.moves_made)
            .choose(rng)
            .copied()
    }

    /// A cell that hasn't been played and isn't known to be a mine
    pub fn random_move<R: Rng>(&self, rng: &mut R) -> Option<Cell> {
        let mut candidates = Vec::new();
        for i in 0..self.height {
            for j in 0..self.width {
                let cell = (i, j);
                if !self.moves_made.contains(&cell) && !self.mines.contains(&cell) {
                    candidates.push(cell);
                }
            }
        }
        candidates.into_iter().choose(rng)
    }
}

/// The hidden board the agent plays against
pub struct Minefield {
    height: usize,
    width: usize,
    mines: HashSet<Cell>,
}

impl Minefield {
    /// Places `mines` mines uniformly at random
    pub fn random<R: Rng>(height: usize, width: usize, mines: usize, rng: &mut R) -> Self {
        assert!(mines <= height * width, "more mines than cells");

        let mut placed = HashSet::new();
        while placed.len() < mines {
            placed.insert((rng.gen_range(0..height), rng.gen_range(0..width)));
        }

        Minefield {
            height,
            width,
            mines: placed,
        }
    }

    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    pub fn is_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Number of mines within one row and column of the cell, the cell
    /// itself excluded
    pub fn nearby_mines(&self, cell: Cell) -> usize {
        let mut count = 0;
        for i in cell.0.saturating_sub(1)..=(cell.0 + 1).min(self.height - 1) {
            for j in cell.1.saturating_sub(1)..=(cell.1 + 1).min(self.width - 1) {
                if (i, j) != cell && self.mines.contains(&(i, j)) {
                    count += 1;
                }
            }
        }
        count
    }
}
