// main.rs - CLI entry point

use mafcollect::output::{open_output, write_missing_count, write_report};
use mafcollect::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    if args.version {
        println!("{}", mafcollect::get_info());
        return Ok(());
    }

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        return Ok(());
    }

    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // stderr carries only the missing count unless asked otherwise
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .init();

    let validation = validate_args(&args)?;
    log::info!("{}", mafcollect::get_info());
    log::info!(
        "Collecting {} ({}, min lines {})",
        validation.dir.display(),
        validation.options.order.description(),
        validation.options.min_lines
    );

    let mut writer = open_output(args.output.as_deref())?;
    let result = collect_alignments(&validation.dir, &validation.options, &mut writer);
    // Blocks written before a failure still reach the output
    let flushed = writer.finish();
    let summary = result?;
    flushed?;

    write_missing_count(&mut std::io::stderr().lock(), summary.missing)?;

    if let Some(report_path) = &args.report {
        let report = RunReport::new(&args.dir, &command_line, summary);
        write_report(report_path, &report)?;
    }

    Ok(())
}
