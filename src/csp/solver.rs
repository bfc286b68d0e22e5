use super::crossword::{Crossword, Variable};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Words assigned to slots
pub type Assignment = BTreeMap<Variable, String>;

/// Backtracking CSP solver over the crossword's word domains.
///
/// Search order follows the usual heuristics: minimum remaining values for
/// variable selection (ties by highest degree), least-constraining value
/// for the domain order, and arc consistency maintained after every
/// assignment.
pub struct Solver<'a> {
    crossword: &'a Crossword,
    domains: HashMap<Variable, BTreeSet<String>>,
}

impl<'a> Solver<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        let domains = crossword
            .variables()
            .iter()
            .map(|&var| (var, crossword.words().clone()))
            .collect();

        Solver { crossword, domains }
    }

    pub fn domain(&self, var: Variable) -> &BTreeSet<String> {
        &self.domains[&var]
    }

    /// Enforces node and arc consistency, then searches for a complete
    /// assignment
    pub fn solve(&mut self) -> Option<Assignment> {
        self.enforce_node_consistency();
        if !self.ac3(None) {
            return None;
        }
        self.backtrack(&mut Assignment::new())
    }

    /// Drops every word whose length doesn't fit its slot
    pub fn enforce_node_consistency(&mut self) {
        for (var, domain) in &mut self.domains {
            domain.retain(|word| word.len() == var.length);
        }
    }

    /// Makes `x` arc consistent with `y` by removing words of `x` that no
    /// word of `y` agrees with at the overlap. Returns whether the domain
    /// of `x` changed
    pub fn revise(&mut self, x: Variable, y: Variable) -> bool {
        let Some((xi, yj)) = self.crossword.overlap(x, y) else {
            return false;
        };

        let supported: HashSet<char> = self.domains[&y]
            .iter()
            .filter_map(|word| word.chars().nth(yj))
            .collect();

        let domain = self.domains.get_mut(&x).expect("every variable has a domain");
        let before = domain.len();
        domain.retain(|word| {
            word.chars()
                .nth(xi)
                .is_some_and(|letter| supported.contains(&letter))
        });

        domain.len() != before
    }

    /// Enforces arc consistency with the AC-3 queue algorithm, starting
    /// from `arcs` or from every arc in the problem. Returns false when a
    /// domain empties
    pub fn ac3(&mut self, arcs: Option<Vec<(Variable, Variable)>>) -> bool {
        let mut queue: VecDeque<(Variable, Variable)> = match arcs {
            Some(arcs) => arcs.into(),
            None => self
                .crossword
                .variables()
                .iter()
                .flat_map(|&x| {
                    self.crossword
                        .neighbors(x)
                        .into_iter()
                        .map(move |y| (x, y))
                })
                .collect(),
        };

        while let Some((x, y)) = queue.pop_front() {
            if self.revise(x, y) {
                if self.domains[&x].is_empty() {
                    return false;
                }
                for z in self.crossword.neighbors(x) {
                    if z != y {
                        queue.push_back((z, x));
                    }
                }
            }
        }

        true
    }

    /// True when every word fits, words are distinct, and overlapping
    /// letters agree
    fn consistent(&self, assignment: &Assignment) -> bool {
        let words: HashSet<&String> = assignment.values().collect();
        if words.len() != assignment.len() {
            return false;
        }

        for (&var, word) in assignment {
            if word.len() != var.length {
                return false;
            }

            for neighbor in self.crossword.neighbors(var) {
                let Some(other) = assignment.get(&neighbor) else {
                    continue;
                };
                let (i, j) = self
                    .crossword
                    .overlap(var, neighbor)
                    .expect("neighbors always overlap");
                if word.chars().nth(i) != other.chars().nth(j) {
                    return false;
                }
            }
        }

        true
    }

    /// Domain of `var` ordered by how few options each word rules out for
    /// the unassigned neighbors
    fn order_domain_values(&self, var: Variable, assignment: &Assignment) -> Vec<String> {
        let neighbors: Vec<Variable> = self
            .crossword
            .neighbors(var)
            .into_iter()
            .filter(|neighbor| !assignment.contains_key(neighbor))
            .collect();

        let mut ranked: Vec<(usize, &String)> = self.domains[&var]
            .iter()
            .map(|word| {
                let ruled_out = neighbors
                    .iter()
                    .map(|&neighbor| {
                        let (i, j) = self
                            .crossword
                            .overlap(var, neighbor)
                            .expect("neighbors always overlap");
                        let letter = word.chars().nth(i);
                        self.domains[&neighbor]
                            .iter()
                            .filter(|other| other.chars().nth(j) != letter)
                            .count()
                    })
                    .sum();
                (ruled_out, word)
            })
            .collect();

        ranked.sort_by_key(|&(ruled_out, _)| ruled_out);
        ranked.into_iter().map(|(_, word)| word.clone()).collect()
    }

    /// Unassigned variable with the fewest remaining values, ties broken by
    /// the highest degree
    fn select_unassigned_variable(&self, assignment: &Assignment) -> Variable {
        self.crossword
            .variables()
            .iter()
            .copied()
            .filter(|var| !assignment.contains_key(var))
            .min_by_key(|&var| {
                (
                    self.domains[&var].len(),
                    usize::MAX - self.crossword.neighbors(var).len(),
                )
            })
            .expect("called with at least one unassigned variable")
    }

    fn backtrack(&mut self, assignment: &mut Assignment) -> Option<Assignment> {
        if assignment.len() == self.crossword.variables().len() {
            return Some(assignment.clone());
        }

        let var = self.select_unassigned_variable(assignment);
        for value in self.order_domain_values(var, assignment) {
            assignment.insert(var, value.clone());

            if self.consistent(assignment) {
                // maintain arc consistency under the new assignment
                let saved = self.domains.clone();
                self.domains.insert(var, BTreeSet::from([value]));
                let arcs = self
                    .crossword
                    .neighbors(var)
                    .into_iter()
                    .map(|y| (y, var))
                    .collect();

                if self.ac3(Some(arcs)) {
                    if let Some(result) = self.backtrack(assignment) {
                        return Some(result);
                    }
                }
                self.domains = saved;
            }

            assignment.remove(&var);
        }

        None
    }
}

/// Renders an assignment over the grid: letters on open cells, `█` on
/// blocked ones
pub fn render(crossword: &Crossword, assignment: &Assignment) -> String {
    let mut letters = vec![vec![None; crossword.width]; crossword.height];
    for (var, word) in assignment {
        for (cell, letter) in var.cells().into_iter().zip(word.chars()) {
            letters[cell.0][cell.1] = Some(letter);
        }
    }

    let mut output = String::new();
    for i in 0..crossword.height {
        for j in 0..crossword.width {
            if crossword.is_open(i, j) {
                output.push(letters[i][j].unwrap_or(' '));
            } else {
                output.push('█');
            }
        }
        output.push('\n');
    }
    output
}
