use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;

use charge_state::{ChargeState, Distribution, Element};

use crate::cli::{DistArgs, OutputFormat};
use crate::config::build_model_config;
use crate::display::{Context as DisplayContext, write_distribution, write_kv_table};
use crate::io::create_output;

#[derive(Serialize)]
struct DistReport<'a> {
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
    energy_per_nucleon: f64,
    rest_energy: f64,
    mean: f64,
    std: f64,
    most_probable: Option<i32>,
    distribution: &'a Distribution,
}

pub fn run_dist(args: DistArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_model_config(&args.beam, &args.model, args.width)?;
    let calc = ChargeState::new(&config).context("Failed to set up the charge-state model")?;

    let atomic_number = resolve_atomic_number(&args.element)?;
    let element = calc.element(atomic_number)?;

    let stats = calc.stats(atomic_number)?;
    let dist = calc.distribution(atomic_number)?;

    log::info!(
        "{} at {} MeV/u: mean {:.3}, std {:.3}, {} charge states",
        element.name(),
        config.energy_per_nucleon,
        stats.mean,
        stats.std,
        dist.len()
    );

    let report = DistReport {
        atomic_number: element.atomic_number(),
        symbol: element.symbol(),
        name: element.name(),
        energy_per_nucleon: config.energy_per_nucleon,
        rest_energy: config.rest_energy,
        mean: stats.mean,
        std: stats.std,
        most_probable: dist.most_probable(),
        distribution: &dist,
    };

    let writes_table_to_stdout = args.io.format == OutputFormat::Table && args.io.output.is_none();
    if ctx.interactive && !writes_table_to_stdout {
        write_overview(&mut std::io::stderr().lock(), element, &report)?;
    }

    let mut out = create_output(args.io.output.as_deref())?;
    let written = match args.io.format {
        OutputFormat::Table => write_table(&mut out, element, &report),
        OutputFormat::Json => write_json(&mut out, &report),
        OutputFormat::Csv => write_csv(&mut out, &dist),
    };
    written.context("Failed to write distribution")?;

    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Accepts an atomic number, a symbol or an element name. Numbers are
/// passed through unchecked so range errors come from the model.
pub fn resolve_atomic_number(input: &str) -> Result<i32> {
    let trimmed = input.trim();
    if let Ok(z) = trimmed.parse::<i32>() {
        return Ok(z);
    }
    let element = Element::from_str(trimmed)?;
    Ok(i32::from(element.atomic_number()))
}

fn write_overview(out: &mut impl Write, element: Element, report: &DistReport<'_>) -> Result<()> {
    let most_probable = report
        .most_probable
        .map(|q| format!("{q}+"))
        .unwrap_or_else(|| "-".to_string());

    let rows = [
        (
            "Element",
            format!(
                "{} ({}), Z = {}",
                element.name(),
                element.symbol(),
                report.atomic_number
            ),
        ),
        ("Energy", format!("{} MeV/u", report.energy_per_nucleon)),
        ("Rest energy", format!("{} MeV", report.rest_energy)),
        ("Mean charge", format!("{:.2}", report.mean)),
        ("Standard deviation", format!("{:.2}", report.std)),
        ("Most probable", most_probable),
    ];
    write_kv_table(out, "Equilibrium Charge State", &rows)?;
    Ok(())
}

fn write_table(out: &mut impl Write, element: Element, report: &DistReport<'_>) -> Result<()> {
    write_overview(out, element, report)?;
    let title = format!("Charge State Distribution for {}", element.name().to_lowercase());
    write_distribution(out, &title, report.distribution)?;
    Ok(())
}

fn write_json(out: &mut impl Write, report: &DistReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize distribution")?;
    writeln!(out)?;
    Ok(())
}

fn write_csv(out: &mut impl Write, dist: &Distribution) -> Result<()> {
    writeln!(out, "charge_state,probability")?;
    for (q, p) in dist.iter() {
        writeln!(out, "{q},{p}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_numbers_symbols_and_names() {
        assert_eq!(resolve_atomic_number("82").unwrap(), 82);
        assert_eq!(resolve_atomic_number(" Pb ").unwrap(), 82);
        assert_eq!(resolve_atomic_number("lead").unwrap(), 82);
        assert_eq!(resolve_atomic_number("-5").unwrap(), -5);
        assert!(resolve_atomic_number("Unobtainium").is_err());
    }

    #[test]
    fn csv_has_header_and_one_line_per_state() {
        let dist = Distribution {
            charge_states: vec![1, 2],
            probabilities: vec![0.75, 0.25],
        };
        let mut buf = Vec::new();
        write_csv(&mut buf, &dist).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "charge_state,probability\n1,0.75\n2,0.25\n"
        );
    }
}
