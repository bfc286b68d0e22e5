use ailab::prob::heredity::{enumerate, Family, Person};
use anyhow::{bail, ensure, Context, Result};
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct HeredityCommand {
    /// CSV with columns name, mother, father, trait
    data: PathBuf,
}

#[derive(Deserialize)]
struct FamilyRecord {
    name: String,
    mother: String,
    father: String,
    #[serde(rename = "trait")]
    observed_trait: String,
}

fn load_family(cmd: &HeredityCommand) -> Result<Family> {
    let mut family = Family::new();

    let mut reader = csv::Reader::from_path(&cmd.data)?;
    for record in reader.deserialize() {
        let record: FamilyRecord = record?;

        let observed_trait = match record.observed_trait.as_str() {
            "1" => Some(true),
            "0" => Some(false),
            "" => None,
            other => bail!("invalid trait value for {}: {other:?}", record.name),
        };

        let parent = |name: &str| (!name.is_empty()).then(|| name.to_string());
        family.insert(
            record.name,
            Person {
                mother: parent(&record.mother),
                father: parent(&record.father),
                observed_trait,
            },
        );
    }

    // parents must both be known or both unknown, and must be listed
    for (name, person) in &family {
        ensure!(
            person.mother.is_some() == person.father.is_some(),
            "{name} has only one known parent"
        );
        for parent in [&person.mother, &person.father].into_iter().flatten() {
            ensure!(family.contains_key(parent), "unknown parent: {parent}");
        }
    }

    Ok(family)
}

pub fn run(cmd: HeredityCommand) -> Result<()> {
    let family = load_family(&cmd)
        .with_context(|| format!("failed to load {}", cmd.data.display()))?;
    ensure!(!family.is_empty(), "the family is empty");

    let distributions = enumerate(&family);

    for (name, distribution) in &distributions {
        println!("{name}:");
        println!("  Gene:");
        for copies in (0..=2).rev() {
            println!("    {copies}: {:.4}", distribution.gene[copies]);
        }
        println!("  Trait:");
        println!("    True: {:.4}", distribution.trait_[1]);
        println!("    False: {:.4}", distribution.trait_[0]);
    }

    Ok(())
}
