//! Interactive menu over the trailhead engine.
//!
//! All matching and gap logic lives in `trailhead_core`; this binary only
//! collects input, re-prompts on bad values, and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use trailhead_core::catalog::{load_catalog, Catalog};
use trailhead_core::matching::recommend;
use trailhead_core::store::ProfileStore;
use trailhead_core::trail::learning_trail;
use trailhead_core::types::{Profile, Skill, MAX_LEVEL, MIN_LEVEL};

#[derive(Parser, Debug)]
#[command(name = "trailhead", version, about = "Career orientation from skill profiles")]
struct Args {
    /// Directory holding saved profiles (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Extra careers to register, as a YAML file
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Re-prompts until the input parses and sits inside the level range.
fn prompt_level(label: &str) -> Result<f64> {
    loop {
        let input = prompt(label)?;
        match input.parse::<f64>() {
            Ok(value) if (MIN_LEVEL..=MAX_LEVEL).contains(&value) => return Ok(value),
            Ok(_) => println!(
                "Value must be between {:.1} and {:.1}",
                MIN_LEVEL, MAX_LEVEL
            ),
            Err(_) => println!("Invalid input, try again."),
        }
    }
}

fn create_profile() -> Result<Profile> {
    let name = prompt("Name: ")?;
    let age = prompt("Age (optional): ")?.parse::<u32>().ok();
    let description = prompt("Description (optional): ")?;
    println!("Profile created.");
    Ok(Profile::new(&name, age, &description))
}

fn load_profile(store: &ProfileStore) -> Result<Option<Profile>> {
    let files = store.list().context("listing saved profiles")?;
    if files.is_empty() {
        println!("No saved profiles.");
        return Ok(None);
    }
    println!("Profiles:");
    for (i, file) in files.iter().enumerate() {
        println!("{}) {}", i + 1, file);
    }
    let choice = prompt("Pick a number: ")?;
    let index = match choice.parse::<usize>() {
        Ok(n) if n >= 1 && n <= files.len() => n - 1,
        _ => {
            println!("Invalid choice.");
            return Ok(None);
        }
    };
    let profile = store.load(&files[index])?;
    println!("Profile '{}' loaded.", profile.name);
    Ok(Some(profile))
}

fn show_profile(profile: &Profile) {
    println!("\n--- Profile ---");
    println!("Name: {}", profile.name);
    match profile.age {
        Some(age) => println!("Age: {}", age),
        None => println!("Age: -"),
    }
    println!("Description: {}", profile.description);
    println!("Created at: {}", profile.created_at);
    println!("Skills:");
    for skill in &profile.skills {
        println!(" - {} ({}) : {:.1}", skill.name, skill.category, skill.level);
    }
    let averages = profile.category_averages();
    if !averages.is_empty() {
        println!("Averages by category:");
        let mut sorted: Vec<_> = averages.into_iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        for (category, average) in sorted {
            println!("  * {}: {:.2}", category, average);
        }
    }
    println!("---------------\n");
}

fn show_recommendations(profile: &Profile, catalog: &Catalog) {
    let ranked = recommend(profile, catalog, 10);
    println!("Recommendations (score 0-100):");
    for (i, result) in ranked.iter().enumerate() {
        println!(
            "{}) {} - score: {:.1} - {}",
            i + 1,
            result.career.name,
            result.score,
            result.career.description
        );
        if !result.gaps.is_empty() {
            let mut gaps: Vec<_> = result.gaps.iter().collect();
            gaps.sort_by(|a, b| a.0.cmp(b.0));
            let rendered: Vec<String> = gaps
                .iter()
                .map(|(skill, gap)| format!("{} (gap {:.1})", skill, gap))
                .collect();
            println!("   Gaps: {}", rendered.join(", "));
        }
    }
    if let Some(best) = ranked.first() {
        println!("\nSuggested trail for the best match:");
        for item in learning_trail(profile, &best.career, 5) {
            println!(" - {}", item);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let store = match &args.data_dir {
        Some(dir) => ProfileStore::new(dir.clone()),
        None => ProfileStore::open_default(),
    }
    .context("opening profile store")?;

    let mut catalog = Catalog::builtin();
    if let Some(path) = &args.catalog {
        for career in load_catalog(path).context("loading extra catalog")? {
            catalog.register(career);
        }
    }
    log::debug!(
        "store at {}, catalog holds {} careers",
        store.root().display(),
        catalog.len()
    );

    let mut current: Option<Profile> = None;

    loop {
        println!("=== Trailhead Career Orientation ===");
        println!("1) Create new profile");
        println!("2) Load profile");
        println!("3) Save current profile");
        println!("4) Add/update skill");
        println!("5) Remove skill");
        println!("6) Show current profile");
        println!("7) Recommend careers");
        println!("8) List saved profiles");
        println!("9) Quit");

        match prompt("Choose: ")?.as_str() {
            "1" => current = Some(create_profile()?),
            "2" => {
                if let Some(profile) = load_profile(&store)? {
                    current = Some(profile);
                }
            }
            "3" => match &current {
                Some(profile) => {
                    let path = store.save(profile).context("saving profile")?;
                    println!("Profile saved to: {}", path.display());
                }
                None => println!("No profile in memory."),
            },
            "4" => match current.as_mut() {
                Some(profile) => {
                    let name = prompt("Skill name: ")?;
                    let category = {
                        let input = prompt("Category ('technical' or 'behavioral'): ")?;
                        if input.is_empty() {
                            "technical".to_string()
                        } else {
                            input
                        }
                    };
                    let level = prompt_level("Level (0.0-10.0): ")?;
                    profile.upsert_skill(Skill::new(&name, &category, level));
                    println!("Skill added/updated.");
                }
                None => println!("Create or load a profile first."),
            },
            "5" => match current.as_mut() {
                Some(profile) => {
                    let name = prompt("Skill name to remove: ")?;
                    if profile.remove_skill(&name) {
                        println!("Removed.");
                    } else {
                        println!("Skill not found.");
                    }
                }
                None => println!("Create or load a profile first."),
            },
            "6" => match &current {
                Some(profile) => show_profile(profile),
                None => println!("No profile loaded."),
            },
            "7" => match &current {
                Some(profile) => show_recommendations(profile, &catalog),
                None => println!("Create or load a profile first."),
            },
            "8" => {
                let files = store.list().context("listing saved profiles")?;
                if files.is_empty() {
                    println!("No saved profiles.");
                } else {
                    println!("Saved profiles:");
                    for file in files {
                        println!(" - {}", file);
                    }
                }
            }
            "9" => {
                println!("Bye.");
                break;
            }
            _ => println!("Invalid option, try again."),
        }
    }

    Ok(())
}
