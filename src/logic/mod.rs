pub mod minesweeper;

use std::collections::{BTreeSet, HashMap};

/// A truth assignment for propositional symbols
pub type Model = HashMap<String, bool>;

/// Propositional logic formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    Sym(String),
    Not(Box<Formula>),
    And(Vec<Formula>),
    Or(Vec<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn sym(name: &str) -> Self {
        Formula::Sym(name.to_string())
    }

    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    pub fn and<I: IntoIterator<Item = Formula>>(conjuncts: I) -> Self {
        Formula::And(conjuncts.into_iter().collect())
    }

    pub fn or<I: IntoIterator<Item = Formula>>(disjuncts: I) -> Self {
        Formula::Or(disjuncts.into_iter().collect())
    }

    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// Evaluates the formula under a truth assignment. The model must
    /// assign every symbol the formula mentions
    pub fn eval(&self, model: &Model) -> bool {
        match self {
            Formula::Sym(name) => *model
                .get(name)
                .unwrap_or_else(|| panic!("symbol {name:?} missing from model")),
            Formula::Not(inner) => !inner.eval(model),
            Formula::And(conjuncts) => conjuncts.iter().all(|f| f.eval(model)),
            Formula::Or(disjuncts) => disjuncts.iter().any(|f| f.eval(model)),
            Formula::Implies(antecedent, consequent) => {
                !antecedent.eval(model) || consequent.eval(model)
            }
            Formula::Iff(left, right) => left.eval(model) == right.eval(model),
        }
    }

    /// Collects every symbol mentioned in the formula
    pub fn symbols(&self, into: &mut BTreeSet<String>) {
        match self {
            Formula::Sym(name) => {
                into.insert(name.clone());
            }
            Formula::Not(inner) => inner.symbols(into),
            Formula::And(parts) | Formula::Or(parts) => {
                for part in parts {
                    part.symbols(into);
                }
            }
            Formula::Implies(left, right) | Formula::Iff(left, right) => {
                left.symbols(into);
                right.symbols(into);
            }
        }
    }
}

/// Returns true when the knowledge base entails the query: the query holds
/// in every model that satisfies the knowledge base
pub fn model_check(knowledge: &Formula, query: &Formula) -> bool {
    let mut symbols = BTreeSet::new();
    knowledge.symbols(&mut symbols);
    query.symbols(&mut symbols);
    let symbols: Vec<String> = symbols.into_iter().collect();

    check_all(knowledge, query, &symbols, &mut Model::new())
}

/// Enumerates all assignments of the remaining symbols
fn check_all(knowledge: &Formula, query: &Formula, remaining: &[String], model: &mut Model) -> bool {
    match remaining.split_first() {
        None => {
            if knowledge.eval(model) {
                query.eval(model)
            } else {
                // the knowledge base doesn't hold here, so the model is
                // irrelevant
                true
            }
        }
        Some((symbol, rest)) => [false, true].into_iter().all(|value| {
            model.insert(symbol.clone(), value);
            let entailed = check_all(knowledge, query, rest, model);
            model.remove(symbol);
            entailed
        }),
    }
}
