use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payment_router::application::selection::ProcessPaymentUseCase;
use payment_router::application::wiring::chain_from_priority;
use payment_router::config::RouterConfig;
use payment_router::domain::payment::PaymentId;
use payment_router::domain::ports::PaymentRepository;
use payment_router::infrastructure::in_memory::InMemoryPaymentRepository;
use payment_router::infrastructure::simulated::SimulatedProviderFactory;
use payment_router::interfaces::csv::decision_writer::{
    DecisionRecord, DecisionWriter, JsonDecisionWriter,
};
use payment_router::interfaces::csv::payment_reader::PaymentReader;
use payment_router::logging;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file
    input: PathBuf,

    /// Path to a TOML configuration file (optional)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Payment to route. May be repeated; defaults to every payment in the input
    #[arg(long = "payment-id")]
    payment_ids: Vec<PaymentId>,

    /// Only select a provider, do not process the payment
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

enum Output<W: Write> {
    Csv(DecisionWriter<W>),
    Json(JsonDecisionWriter<W>),
}

impl<W: Write> Output<W> {
    fn new(format: OutputFormat, sink: W) -> Self {
        match format {
            OutputFormat::Csv => Output::Csv(DecisionWriter::new(sink)),
            OutputFormat::Json => Output::Json(JsonDecisionWriter::new(sink)),
        }
    }

    fn write(&mut self, record: &DecisionRecord) -> payment_router::error::Result<()> {
        match self {
            Output::Csv(writer) => writer.write(record),
            Output::Json(writer) => writer.write(record),
        }
    }

    fn flush(&mut self) -> payment_router::error::Result<()> {
        match self {
            Output::Csv(writer) => writer.flush(),
            Output::Json(writer) => writer.flush(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RouterConfig::load(cli.config.as_deref())
        .and_then(RouterConfig::with_env_overrides)
        .into_diagnostic()?;
    logging::init(&config.logging).into_diagnostic()?;

    let chain = chain_from_priority(&config.priority).into_diagnostic()?;
    info!(providers = ?chain.providers().collect::<Vec<_>>(), "decider chain built");

    // Seed the repository from the input file
    let repository = InMemoryPaymentRepository::new();
    let mut input_ids = Vec::new();
    let mut seen = HashSet::new();
    let file = File::open(&cli.input).into_diagnostic()?;
    for payment_result in PaymentReader::new(file).payments() {
        match payment_result {
            Ok(payment) => {
                // First row wins; a repeated id must not be charged twice
                if !seen.insert(payment.id) {
                    eprintln!("Error reading payment: duplicate id {}", payment.id);
                    continue;
                }
                input_ids.push(payment.id);
                repository.store(payment).await.into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
            }
        }
    }

    let payment_ids = if cli.payment_ids.is_empty() {
        input_ids
    } else {
        cli.payment_ids
    };

    let factory = SimulatedProviderFactory::with_providers(config.enabled_providers);
    let use_case = ProcessPaymentUseCase::new(Box::new(repository), Box::new(factory), chain);

    let stdout = io::stdout();
    let mut output = Output::new(cli.format, stdout.lock());
    for payment_id in payment_ids {
        let record = if cli.dry_run {
            use_case
                .select_provider(payment_id)
                .await
                .map(|provider| DecisionRecord::selected(payment_id, provider))
        } else {
            use_case.execute(payment_id).await.map(DecisionRecord::from)
        };

        match record {
            Ok(record) => output.write(&record).into_diagnostic()?,
            Err(e) => {
                eprintln!("Error processing payment {}: {}", payment_id, e);
            }
        }
    }
    output.flush().into_diagnostic()?;

    Ok(())
}
