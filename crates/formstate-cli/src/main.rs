//! formstate CLI
//!
//! Drives the example name form through its three variants from the
//! command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use formstate::forms::{FIRST_NAME_MAX_LENGTH, NameField, name_form_with_max};
use formstate::{
    BindingConfig, FieldSet, FormBinding, FormEvent, FormModel, SubmitOutcome, ValidationMode,
};

/// Fill and submit the example name form.
#[derive(Parser)]
#[command(name = "formstate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with `mode` and `revalidateMode` keys.
    #[arg(short, long, env = "FORMSTATE_CONFIG")]
    config: Option<PathBuf>,

    /// Validation trigger before the first submit (overrides the config file).
    #[arg(long)]
    mode: Option<ValidationMode>,

    /// Validation trigger after the first submit (overrides the config file).
    #[arg(long)]
    revalidate_mode: Option<ValidationMode>,

    /// Maximum length of the first name.
    #[arg(long, default_value_t = FIRST_NAME_MAX_LENGTH)]
    max_length: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type the given values, leave each field, then press submit.
    Fill {
        /// Which fields the form handler owns.
        #[arg(long, value_enum, default_value_t = Variant::Store)]
        variant: Variant,

        /// Value typed into the first name field.
        #[arg(long)]
        first_name: Option<String>,

        /// Value typed into the last name field.
        #[arg(long)]
        last_name: Option<String>,
    },

    /// Apply a JSON array of form events in order.
    Replay {
        /// Event script.
        script: PathBuf,

        /// Which fields the form handler owns.
        #[arg(long, value_enum, default_value_t = Variant::Store)]
        variant: Variant,
    },

    /// List the fields and their validation messages.
    Rules,
}

/// How the name form is split between store and form handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Every field validated on blur by the store.
    Store,
    /// First name owned by the form handler, last name by the store.
    Gradual,
    /// Every field owned by the form handler.
    Migrated,
}

impl Variant {
    fn bind(self, model: FormModel<NameField>, config: BindingConfig) -> FormBinding<NameField> {
        match self {
            Self::Store => FormBinding::store(model),
            Self::Gradual => FormBinding::gradual(model, [NameField::FirstName], config),
            Self::Migrated => FormBinding::migrated(model, config),
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<BindingConfig> {
    let mut config = match &cli.config {
        Some(path) => BindingConfig::from_json_file(path)?,
        None => BindingConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(mode) = cli.revalidate_mode {
        config.revalidate_mode = mode;
    }
    Ok(config)
}

fn fill_events(
    first_name: Option<String>,
    last_name: Option<String>,
) -> Vec<FormEvent<NameField>> {
    let mut events = Vec::new();
    let typed = [
        (NameField::FirstName, first_name),
        (NameField::LastName, last_name),
    ];
    for (field, value) in typed {
        if let Some(value) = value {
            events.push(FormEvent::changed(field, value));
        }
        events.push(FormEvent::blurred(field));
    }
    events.push(FormEvent::submit());
    events
}

fn report(outcome: &SubmitOutcome<NameField>) -> anyhow::Result<()> {
    match outcome {
        Ok(payload) => println!("Submitted: {}", serde_json::to_string(payload)?),
        Err(e) => {
            warn!("{e}");
            println!("Not submitted: {e}");
        }
    }
    Ok(())
}

fn run(
    binding: &mut FormBinding<NameField>,
    events: Vec<FormEvent<NameField>>,
) -> anyhow::Result<()> {
    for event in events {
        if let Some(outcome) = binding.dispatch(event) {
            report(&outcome)?;
        }
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&binding.model().snapshot())?
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = load_config(&cli)?;
    let model = name_form_with_max(cli.max_length)?;

    match cli.command {
        Commands::Fill {
            variant,
            first_name,
            last_name,
        } => {
            info!(?variant, mode = %config.mode, "Filling name form");
            let mut binding = variant.bind(model, config);
            run(&mut binding, fill_events(first_name, last_name))?;
        }

        Commands::Replay { script, variant } => {
            let json = std::fs::read_to_string(&script)?;
            let events: Vec<FormEvent<NameField>> = serde_json::from_str(&json)?;
            info!(events = events.len(), script = %script.display(), "Replaying events");
            let mut binding = variant.bind(model, config);
            run(&mut binding, events)?;
        }

        Commands::Rules => {
            for field in NameField::ALL {
                println!("{} ({})", model.field_label(*field), field.as_str());
                for message in model.field_rule(*field).messages() {
                    println!("  - {message}");
                }
            }
        }
    }

    Ok(())
}
