use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vdm_tree::ui::cli::drivers::InquireDriver;
use vdm_tree::ui::cli::wizard::prompt_choice;
use vdm_tree::ui::types::build::build_task;
use vdm_tree::ui::types::choices::{TaskChoice, UIChoice};

/// Cross-validate ID3 and value-difference-metric k-NN learners on
/// categorical datasets.
#[derive(Parser, Debug)]
#[command(name = "vdm-tree", version)]
struct Cli {
    /// JSON task file; without it an interactive wizard asks for one
    #[arg(long, short = 't')]
    task: Option<PathBuf>,

    /// Print the JSON schema of task files and exit
    #[arg(long)]
    print_schema: bool,

    /// Save the task assembled by the wizard to this file
    #[arg(long)]
    save_task: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", serde_json::to_string_pretty(&TaskChoice::schema())?);
        return Ok(());
    }

    let choice: TaskChoice = match &cli.task {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading task file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing task file {}", path.display()))?
        }
        None => {
            let choice = prompt_choice::<TaskChoice, _>(&InquireDriver)?;
            if let Some(path) = &cli.save_task {
                fs::write(path, serde_json::to_string_pretty(&choice)?)
                    .with_context(|| format!("writing task file {}", path.display()))?;
            }
            choice
        }
    };

    let (tx, rx) = mpsc::channel();
    let printer = thread::spawn(move || {
        for fold in rx {
            println!("{fold}");
        }
    });

    let job = build_task(choice)?.with_progress(tx);
    let report = job.run();
    // the job owned the sender, so the printer drains and stops here
    let _ = printer.join();

    let report = report?;
    println!("{report}");
    Ok(())
}
