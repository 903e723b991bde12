mod display;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use careersense_data::ArtifactStore;
use careersense_ml::{Pipeline, split_skills, train};

#[derive(Parser)]
#[command(name = "careersense", version, about = "Career path recommendation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a model from a labelled CSV dataset and save the artifacts.
    Train {
        /// Path to the dataset CSV.
        #[arg(long, env = "CAREERSENSE_DATASET")]
        dataset: PathBuf,
        /// Directory to write the trained artifacts into.
        #[arg(long, env = "CAREERSENSE_MODEL_DIR", default_value = "model")]
        model_dir: PathBuf,
    },
    /// Recommend a career path from an interest, skills, and marks.
    Predict {
        /// Directory holding the trained artifacts.
        #[arg(long, env = "CAREERSENSE_MODEL_DIR", default_value = "model")]
        model_dir: PathBuf,
        /// Your interest, e.g. "Data Scientist".
        #[arg(long)]
        interest: String,
        /// Your skills, semicolon-delimited, e.g. "Python;SQL;HTML".
        #[arg(long, default_value = "")]
        skills: String,
        /// Maths marks.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        maths: u8,
        /// Computer Science marks.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        cs: u8,
        /// English marks.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        english: u8,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    // Single error boundary: nothing partial is printed, the process
    // reports a generic failure plus the full diagnostic chain.
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Something went wrong.");
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Train { dataset, model_dir } => run_train(&dataset, &model_dir),
        Command::Predict {
            model_dir,
            interest,
            skills,
            maths,
            cs,
            english,
        } => run_predict(&model_dir, &interest, &skills, maths, cs, english),
    }
}

fn run_train(dataset_path: &Path, model_dir: &Path) -> anyhow::Result<()> {
    let dataset = careersense_data::load_dataset(dataset_path)
        .with_context(|| format!("loading dataset {}", dataset_path.display()))?;

    let (model, report) = train(&dataset).context("training model")?;

    match report.holdout_accuracy {
        Some(acc) => println!(
            "Trained on {} rows; held-out accuracy {:.1}% over {} rows.",
            report.rows_trained,
            acc * 100.0,
            report.rows_held_out
        ),
        None => println!(
            "Trained on {} rows (dataset too small for a holdout).",
            report.rows_trained
        ),
    }

    ArtifactStore::new(model_dir)
        .save(&model)
        .context("saving artifacts")?;
    println!("Artifacts saved to {}.", model_dir.display());
    Ok(())
}

fn run_predict(
    model_dir: &Path,
    interest: &str,
    skills: &str,
    maths: u8,
    cs: u8,
    english: u8,
) -> anyhow::Result<()> {
    let model = ArtifactStore::new(model_dir)
        .load()
        .with_context(|| format!("loading artifacts from {}", model_dir.display()))?;

    let user_skills = split_skills(skills);
    let recommendation = Pipeline::new(model)
        .recommend(interest, &user_skills, maths, cs, english)
        .context("running prediction")?;

    display::print_report(&recommendation, interest.trim(), maths, cs, english);
    Ok(())
}
