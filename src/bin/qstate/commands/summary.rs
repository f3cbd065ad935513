use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use charge_state::{ChargeState, SummaryRow};

use crate::cli::{OutputFormat, SummaryArgs};
use crate::config::build_model_config;
use crate::display::{Context as DisplayContext, write_kv_table, write_summary};
use crate::io::create_output;

#[derive(Serialize)]
struct SummaryReport<'a> {
    energy_per_nucleon: f64,
    rest_energy: f64,
    rows: &'a [SummaryRow],
}

pub fn run_summary(args: SummaryArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_model_config(&args.beam, &args.model, charge_state::DEFAULT_ONESIDED_LEN)?;
    let calc = ChargeState::new(&config).context("Failed to set up the charge-state model")?;

    let rows = calc
        .summary_table(config.energy_per_nucleon, config.rest_energy)
        .context("Failed to build the summary table")?;

    let report = SummaryReport {
        energy_per_nucleon: config.energy_per_nucleon,
        rest_energy: config.rest_energy,
        rows: &rows,
    };

    if ctx.interactive && args.io.output.is_some() {
        let beam = [
            ("Energy", format!("{} MeV/u", report.energy_per_nucleon)),
            ("Rest energy", format!("{} MeV", report.rest_energy)),
            ("Elements", rows.len().to_string()),
        ];
        write_kv_table(&mut std::io::stderr().lock(), "Summary", &beam)?;
    }

    let mut out = create_output(args.io.output.as_deref())?;
    let written = match args.io.format {
        OutputFormat::Table => write_table(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &report),
        OutputFormat::Csv => write_csv(&mut out, &rows),
    };
    written.context("Failed to write summary table")?;

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn write_table(out: &mut impl Write, report: &SummaryReport<'_>) -> Result<()> {
    let title = format!(
        "Equilibrium Charge States at {} MeV/u",
        report.energy_per_nucleon
    );
    write_summary(out, &title, report.rows)?;
    Ok(())
}

fn write_json(out: &mut impl Write, report: &SummaryReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize summary")?;
    writeln!(out)?;
    Ok(())
}

fn write_csv(out: &mut impl Write, rows: &[SummaryRow]) -> Result<()> {
    writeln!(out, "atomic_number,symbol,name,mean,std")?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{},{}",
            row.atomic_number, row.symbol, row.name, row.mean, row.std
        )?;
    }
    Ok(())
}
