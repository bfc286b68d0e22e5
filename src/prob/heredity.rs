use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};

/// Unconditional probability of carrying 0, 1 or 2 copies of the gene
const GENE_PRIOR: [f64; 3] = [0.96, 0.03, 0.01];

/// Probability of exhibiting the trait given the number of gene copies
const TRAIT_GIVEN_COPIES: [f64; 3] = [0.01, 0.56, 0.65];

/// Probability that a passed-down gene mutates
const MUTATION: f64 = 0.01;

/// A family member. Parents are either both known or both unknown
#[derive(Debug, Clone)]
pub struct Person {
    pub mother: Option<String>,
    pub father: Option<String>,
    pub observed_trait: Option<bool>,
}

/// People by name
pub type Family = BTreeMap<String, Person>;

/// Posterior distribution over gene copies and trait for one person
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    /// Indexed by number of copies
    pub gene: [f64; 3],
    /// Indexed by `has_trait as usize`
    pub trait_: [f64; 2],
}

fn copies(name: &str, one_gene: &HashSet<&str>, two_genes: &HashSet<&str>) -> usize {
    if one_gene.contains(name) {
        1
    } else if two_genes.contains(name) {
        2
    } else {
        0
    }
}

/// Probability that a parent with `copies` copies passes the gene on
fn passes_gene(copies: usize) -> f64 {
    match copies {
        0 => MUTATION,
        1 => 0.5,
        _ => 1.0 - MUTATION,
    }
}

/// Probability that a child inherits `child` copies given each parent's
/// copies
fn inherits(mother: usize, father: usize, child: usize) -> f64 {
    let from_mother = passes_gene(mother);
    let from_father = passes_gene(father);

    match child {
        0 => (1.0 - from_mother) * (1.0 - from_father),
        1 => from_mother * (1.0 - from_father) + from_father * (1.0 - from_mother),
        _ => from_mother * from_father,
    }
}

/// Joint probability that everyone in `one_gene` has one copy, everyone in
/// `two_genes` has two, everyone else has none, and exactly the people in
/// `have_trait` exhibit the trait
pub fn joint_probability(
    family: &Family,
    one_gene: &HashSet<&str>,
    two_genes: &HashSet<&str>,
    have_trait: &HashSet<&str>,
) -> f64 {
    let mut probability = 1.0;

    for (name, person) in family {
        let child_copies = copies(name, one_gene, two_genes);
        let has_trait = have_trait.contains(name.as_str());

        probability *= match (&person.mother, &person.father) {
            (Some(mother), Some(father)) => inherits(
                copies(mother, one_gene, two_genes),
                copies(father, one_gene, two_genes),
                child_copies,
            ),
            _ => GENE_PRIOR[child_copies],
        };

        let trait_probability = TRAIT_GIVEN_COPIES[child_copies];
        probability *= if has_trait {
            trait_probability
        } else {
            1.0 - trait_probability
        };
    }

    probability
}

/// Posterior gene and trait distributions for every family member, obtained
/// by enumerating all assignments consistent with the observed traits
pub fn enumerate(family: &Family) -> BTreeMap<String, Distribution> {
    let names: Vec<&str> = family.keys().map(String::as_str).collect();
    let mut distributions: BTreeMap<String, Distribution> = family
        .keys()
        .map(|name| (name.clone(), Distribution::default()))
        .collect();

    for have_trait in names.iter().copied().powerset() {
        let have_trait: HashSet<&str> = have_trait.into_iter().collect();

        // skip assignments that contradict the observed traits
        let contradicts = family.iter().any(|(name, person)| {
            person
                .observed_trait
                .is_some_and(|observed| observed != have_trait.contains(name.as_str()))
        });
        if contradicts {
            continue;
        }

        for one_gene in names.iter().copied().powerset() {
            let one_gene: HashSet<&str> = one_gene.into_iter().collect();
            let rest: Vec<&str> = names
                .iter()
                .copied()
                .filter(|name| !one_gene.contains(name))
                .collect();

            for two_genes in rest.iter().copied().powerset() {
                let two_genes: HashSet<&str> = two_genes.into_iter().collect();

                let p = joint_probability(family, &one_gene, &two_genes, &have_trait);
                for &name in &names {
                    let distribution = distributions
                        .get_mut(name)
                        .expect("distributions cover every person");
                    distribution.gene[copies(name, &one_gene, &two_genes)] += p;
                    distribution.trait_[have_trait.contains(name) as usize] += p;
                }
            }
        }
    }

    for distribution in distributions.values_mut() {
        normalize(&mut distribution.gene);
        normalize(&mut distribution.trait_);
    }

    distributions
}

/// Rescales the values to sum to 1, keeping their proportions
fn normalize(values: &mut [f64]) {
    let sum: f64 = values.iter().sum();
    if sum > 0.0 {
        for value in values {
            *value /= sum;
        }
    }
}
