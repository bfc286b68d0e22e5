/// All bitboards containing `k` aligned cells on a `rows` x `cols` board.
///
/// Alignments run right, down, down-right and down-left; the bit for cell
/// (i, j) is `i * cols + j`.
pub(crate) fn winning_sets(rows: usize, cols: usize, k: usize) -> Vec<u64> {
    let directions: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
    let mut sets = Vec::new();

    for i in 0..rows as isize {
        for j in 0..cols as isize {
            for (di, dj) in directions {
                let end_i = i + di * (k as isize - 1);
                let end_j = j + dj * (k as isize - 1);
                if end_i >= rows as isize || end_j < 0 || end_j >= cols as isize {
                    continue;
                }

                let mut set = 0u64;
                for step in 0..k as isize {
                    let cell = (i + di * step) * cols as isize + (j + dj * step);
                    set |= 1 << cell;
                }
                sets.push(set);
            }
        }
    }

    sets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tictactoe_has_eight_lines() {
        assert_eq!(winning_sets(3, 3, 3).len(), 8);
    }
}
