use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gas_turbine_performance::{app, config, i18n, turbine, ui_cli};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gas_turbine_performance_cli")]
#[command(about = "Gas turbine + evaporative cooler performance calculator", long_about = None)]
struct Cli {
    /// Language: auto/ko/en
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// Path to the TOML config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the cycle at one dry-bulb temperature
    Evaluate {
        /// Dry-bulb temperature in the configured input unit
        #[arg(long, allow_negative_numbers = true)]
        dry_bulb: f64,
    },
    /// Sweep dry-bulb temperature and print a table
    Sweep {
        /// Start temperature [°F]
        #[arg(long)]
        from: Option<f64>,
        /// End temperature [°F]
        #[arg(long)]
        to: Option<f64>,
        /// Number of points
        #[arg(long)]
        points: Option<usize>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lang = i18n::resolve_language(&cli.lang, None);
    let tr = i18n::Translator::new_with_pack(&lang, None);
    if let Err(err) = try_run(cli, tr.clone()) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli, tr: i18n::Translator) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    let tr = if cli.lang == "auto" {
        let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
        i18n::Translator::new_with_pack(&lang, None)
    } else {
        tr
    };

    match cli.command {
        None => app::run(&mut cfg, &tr)?,
        Some(Commands::Evaluate { dry_bulb }) => {
            let t = ui_cli::dry_bulb_from_input(dry_bulb, cfg.input_temperature_unit)
                .ok_or_else(|| {
                    let msg = tr.t(i18n::keys::EVALUATE_NON_POSITIVE).to_string();
                    app::AppError::InvalidInput(msg)
                })?;
            let result = turbine::evaluate_cycle(t, &cfg.design);
            for line in ui_cli::format_result(&tr, &result) {
                println!("{line}");
            }
        }
        Some(Commands::Sweep { from, to, points }) => {
            let mut range = cfg.sweep;
            range.start_f = from.unwrap_or(range.start_f);
            range.end_f = to.unwrap_or(range.end_f);
            range.points = points.unwrap_or(range.points);
            let series = turbine::sweep(&cfg.design, &range);
            for line in ui_cli::format_sweep_table(&tr, &series) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
