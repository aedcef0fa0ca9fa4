mod extractor;
mod models;
mod ranker;

use anyhow::Result;
use clap::{Arg, Command};
use models::{Config, RankedMatches};
use rand::prelude::*;
use ranker::MatchRanker;
use std::path::Path;

fn main() -> Result<()> {
    let matches = Command::new("pathway-matcher")
        .version("1.0")
        .about("Matches students to enrichment programs by shared interest tags")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .get_matches();

    let config_file = matches.get_one::<String>("config").unwrap();

    // Load or create configuration
    let config = if Path::new(config_file).exists() {
        println!("📋 Loading configuration from: {}", config_file);
        Config::load_from_file(config_file)?
    } else {
        println!("📝 Creating default configuration file: {}", config_file);
        let default_config = Config::default();
        default_config.save_to_file(config_file)?;
        println!(
            "⚠️  Please edit {} and set the input and output files, then run the program again.",
            config_file
        );
        return Ok(());
    };

    // Validate configuration
    if config.student_file.is_empty() || config.program_file.is_empty() || config.output_file.is_empty() {
        println!("❌ Error: student_file, program_file and output_file must all be set");
        println!("   Please edit {} and fill in the file paths", config_file);
        return Ok(());
    }

    // The two column maps are maintained separately; warn when they drift
    let unmatched_tags = extractor::unmatched_program_tags();
    if !unmatched_tags.is_empty() {
        println!(
            "⚠️  Program interest tags with no student-side counterpart: {}",
            unmatched_tags.join(", ")
        );
    }

    println!("🔍 Finding up to {} matches per student", config.matches_to_find);

    println!("📂 Reading students from: {}", config.student_file);
    let students = extractor::read_students(&config.student_file)?;
    println!("   ✅ Found {} students", students.len());

    println!("📂 Reading programs from: {}", config.program_file);
    let programs = extractor::read_programs(&config.program_file)?;
    println!("   ✅ Found {} programs", programs.len());

    let mut rng: StdRng = match config.random_seed {
        Some(seed) => {
            println!("🎲 Tie-break shuffle seeded with: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let match_ranker = MatchRanker::new(config.matches_to_find, config.exclude_first_program);
    let mut results: Vec<(String, RankedMatches)> = Vec::new();
    for student in &students {
        let matched = match_ranker.rank_matches(student, &programs, &mut rng);
        results.push((student.id.clone(), matched));
    }

    write_matches_csv(&results, &config.output_file)?;
    print_summary(&results, programs.len(), &config.output_file);
    Ok(())
}

fn write_matches_csv(results: &[(String, RankedMatches)], output_file: &str) -> Result<()> {
    // Match counts can differ between students, so rows are ragged
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_file)?;

    for (student_id, matched) in results {
        let mut row: Vec<&str> = vec![student_id.as_str()];
        row.extend(matched.names());
        row.extend(matched.organizations());
        row.extend(matched.urls());
        row.extend(matched.descriptions());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

fn print_summary(results: &[(String, RankedMatches)], program_count: usize, output_file: &str) {
    let total_matches: usize = results.iter().map(|(_, matched)| matched.len()).sum();
    let unmatched_students = results.iter().filter(|(_, matched)| matched.is_empty()).count();

    println!("\n📊 SUMMARY");
    println!("==========");
    println!("   Students processed: {}", results.len());
    println!("   Programs considered: {}", program_count);
    println!("   Matches written: {}", total_matches);
    if unmatched_students > 0 {
        println!("   ⚠️  Students with no matches: {}", unmatched_students);
    }

    println!("\n✅ Matching complete!");
    println!("📄 Results written to: {}", output_file);
}
