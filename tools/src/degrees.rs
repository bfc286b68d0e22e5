use ailab::search::bfs::shortest_path;
use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct DegreesCommand {
    /// Directory containing people.csv, movies.csv and stars.csv
    directory: PathBuf,

    /// Name of the starting actor (prompted for when omitted)
    source: Option<String>,

    /// Name of the target actor (prompted for when omitted)
    target: Option<String>,
}

#[derive(Deserialize)]
struct PersonRecord {
    id: String,
    name: String,
    birth: String,
}

#[derive(Deserialize)]
struct MovieRecord {
    id: String,
    title: String,
}

#[derive(Deserialize)]
struct StarRecord {
    person_id: String,
    movie_id: String,
}

struct Person {
    name: String,
    birth: String,
    movies: HashSet<String>,
}

struct Movie {
    title: String,
    stars: HashSet<String>,
}

struct Database {
    people: HashMap<String, Person>,
    movies: HashMap<String, Movie>,
    /// Lowercased names to the matching person ids
    names: HashMap<String, Vec<String>>,
}

impl Database {
    fn load(directory: &Path) -> Result<Self> {
        let mut people = HashMap::new();
        let mut names: HashMap<String, Vec<String>> = HashMap::new();

        let mut reader = csv::Reader::from_path(directory.join("people.csv"))?;
        for record in reader.deserialize() {
            let record: PersonRecord = record?;
            names
                .entry(record.name.to_lowercase())
                .or_default()
                .push(record.id.clone());
            people.insert(
                record.id,
                Person {
                    name: record.name,
                    birth: record.birth,
                    movies: HashSet::new(),
                },
            );
        }

        let mut movies = HashMap::new();
        let mut reader = csv::Reader::from_path(directory.join("movies.csv"))?;
        for record in reader.deserialize() {
            let record: MovieRecord = record?;
            movies.insert(
                record.id,
                Movie {
                    title: record.title,
                    stars: HashSet::new(),
                },
            );
        }

        let mut reader = csv::Reader::from_path(directory.join("stars.csv"))?;
        for record in reader.deserialize() {
            let record: StarRecord = record?;
            // skip stars referencing unknown people or movies
            if let Some(person) = people.get_mut(&record.person_id) {
                person.movies.insert(record.movie_id.clone());
            }
            if let Some(movie) = movies.get_mut(&record.movie_id) {
                movie.stars.insert(record.person_id);
            }
        }

        Ok(Database {
            people,
            movies,
            names,
        })
    }

    /// Resolves a name to a person id, asking which one on ambiguity
    fn person_id(&self, name: &str) -> Result<String> {
        let ids = self
            .names
            .get(&name.to_lowercase())
            .with_context(|| format!("person not found: {name}"))?;

        if ids.len() == 1 {
            return Ok(ids[0].clone());
        }

        println!("Which '{name}'?");
        for id in ids {
            let person = &self.people[id];
            println!("ID: {id}, Name: {}, Birth: {}", person.name, person.birth);
        }

        let choice = prompt("Intended Person ID: ")?;
        if !ids.contains(&choice) {
            bail!("invalid person id: {choice}");
        }
        Ok(choice)
    }

    /// `(movie_id, person_id)` pairs for everyone who starred with the
    /// given person
    fn neighbors(&self, person_id: &str) -> Vec<(String, String)> {
        let mut neighbors = Vec::new();
        for movie_id in &self.people[person_id].movies {
            for star in &self.movies[movie_id].stars {
                neighbors.push((movie_id.clone(), star.clone()));
            }
        }
        neighbors
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

pub fn run(cmd: DegreesCommand) -> Result<()> {
    let db = Database::load(&cmd.directory)
        .with_context(|| format!("failed to load data from {}", cmd.directory.display()))?;

    let source = match cmd.source {
        Some(name) => name,
        None => prompt("Name: ")?,
    };
    let target = match cmd.target {
        Some(name) => name,
        None => prompt("Name: ")?,
    };

    let source = db.person_id(&source)?;
    let target = db.person_id(&target)?;

    let path = shortest_path(source.clone(), |id| *id == target, |id| db.neighbors(id));

    match path {
        None => println!("Not connected."),
        Some(path) => {
            println!("{} degrees of separation.", path.len());
            let mut previous = source;
            for (step, (movie_id, person_id)) in path.iter().enumerate() {
                println!(
                    "{}: {} and {} starred in {}",
                    step + 1,
                    db.people[&previous].name,
                    db.people[person_id].name,
                    db.movies[movie_id].title,
                );
                previous = person_id.clone();
            }
        }
    }

    Ok(())
}
