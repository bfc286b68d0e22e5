use ailab::prob::heredity::{enumerate, joint_probability, Family, Person};
use std::collections::HashSet;

/// Harry's parents are Lily and James; only James is known to show the
/// trait
fn family() -> Family {
    Family::from([
        (
            "Harry".to_string(),
            Person {
                mother: Some("Lily".to_string()),
                father: Some("James".to_string()),
                observed_trait: None,
            },
        ),
        (
            "James".to_string(),
            Person {
                mother: None,
                father: None,
                observed_trait: Some(true),
            },
        ),
        (
            "Lily".to_string(),
            Person {
                mother: None,
                father: None,
                observed_trait: Some(false),
            },
        ),
    ])
}

#[test]
fn joint_probability_matches_hand_computation() {
    let family = family();
    let one_gene: HashSet<&str> = HashSet::from(["Harry"]);
    let two_genes: HashSet<&str> = HashSet::from(["James"]);
    let have_trait: HashSet<&str> = HashSet::from(["James"]);

    // James: P(2 copies) * P(trait | 2)        = 0.01 * 0.65
    // Lily:  P(0 copies) * P(no trait | 0)     = 0.96 * 0.99
    // Harry: P(1 copy | parents) * P(no trait | 1)
    //        = (0.99 * 0.99 + 0.01 * 0.01) * 0.44
    let p = joint_probability(&family, &one_gene, &two_genes, &have_trait);
    assert!((p - 0.0026643247488).abs() < 1e-12);
}

#[test]
fn founders_use_the_prior() {
    let family = Family::from([(
        "Solo".to_string(),
        Person {
            mother: None,
            father: None,
            observed_trait: None,
        },
    )]);

    let empty = HashSet::new();
    let p = joint_probability(&family, &empty, &empty, &empty);
    // P(0 copies) * P(no trait | 0)
    assert!((p - 0.96 * 0.99).abs() < 1e-12);
}

#[test]
fn distributions_are_normalized() {
    let distributions = enumerate(&family());

    for distribution in distributions.values() {
        let gene_total: f64 = distribution.gene.iter().sum();
        let trait_total: f64 = distribution.trait_.iter().sum();
        assert!((gene_total - 1.0).abs() < 1e-9);
        assert!((trait_total - 1.0).abs() < 1e-9);
    }
}

#[test]
fn observed_traits_are_respected() {
    let distributions = enumerate(&family());

    // James shows the trait and Lily doesn't; the evidence filter makes
    // those certainties
    assert!((distributions["James"].trait_[1] - 1.0).abs() < 1e-9);
    assert!((distributions["Lily"].trait_[1]).abs() < 1e-9);

    // Harry's trait stays uncertain
    let harry = &distributions["Harry"];
    assert!(harry.trait_[1] > 0.0 && harry.trait_[1] < 1.0);
}
