use clap::Parser;
use first_fit_packer::app::output::{render_report, write_failure};
use first_fit_packer::domain::ports::ConfigProvider;
use first_fit_packer::utils::logger;
use first_fit_packer::{
    CliConfig, FirstFitPacker, InteractiveShell, LineConsole, PackerError, PackingEngine, Prompts,
    Settings,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            let _ = write_failure(&e, &mut std::io::stderr());
            std::process::exit(e.severity().exit_code());
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose, &settings.log_level);
    } else {
        logger::init_cli_logger(settings.verbose, &settings.log_level);
    }

    tracing::info!("Starting first-fit");
    tracing::debug!("Settings: {:?}", settings);

    let prompts = Prompts::new(settings.language);
    let packer = FirstFitPacker::new(settings.oversize_policy());
    let engine = PackingEngine::new_with_monitoring(packer, settings.monitoring_enabled());
    let mut shell = InteractiveShell::new(LineConsole::stdio(), engine, prompts);

    match shell.run() {
        Ok(report) => {
            let rendered = render_report(
                &report,
                settings.output_format(),
                settings.show_bins(),
                &prompts,
            )?;
            println!();
            println!("{}", rendered);
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: PackerError) -> ! {
    tracing::error!(
        "❌ Packing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    let _ = write_failure(&e, &mut std::io::stderr());
    std::process::exit(e.severity().exit_code());
}
