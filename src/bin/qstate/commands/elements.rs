use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use charge_state::Element;

use crate::cli::{ElementsArgs, OutputFormat};
use crate::display::{Context as DisplayContext, write_element_list};
use crate::io::create_output;

#[derive(Serialize)]
struct ElementEntry {
    atomic_number: u8,
    symbol: &'static str,
    name: &'static str,
}

impl From<Element> for ElementEntry {
    fn from(element: Element) -> Self {
        Self {
            atomic_number: element.atomic_number(),
            symbol: element.symbol(),
            name: element.name(),
        }
    }
}

pub fn run_elements(args: ElementsArgs, _ctx: DisplayContext) -> Result<()> {
    let elements = Element::all();
    log::debug!("listing {} supported elements", elements.len());

    let mut out = create_output(args.io.output.as_deref())?;
    let written = match args.io.format {
        OutputFormat::Table => write_element_list(&mut out, elements).map_err(anyhow::Error::from),
        OutputFormat::Json => write_json(&mut out, elements),
        OutputFormat::Csv => write_csv(&mut out, elements),
    };
    written.context("Failed to write element list")?;

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn write_json(out: &mut impl Write, elements: &[Element]) -> Result<()> {
    let entries: Vec<ElementEntry> = elements.iter().copied().map(ElementEntry::from).collect();
    serde_json::to_writer_pretty(&mut *out, &entries).context("Failed to serialize elements")?;
    writeln!(out)?;
    Ok(())
}

fn write_csv(out: &mut impl Write, elements: &[Element]) -> Result<()> {
    writeln!(out, "atomic_number,symbol,name")?;
    for element in elements {
        writeln!(
            out,
            "{},{},{}",
            element.atomic_number(),
            element.symbol(),
            element.name()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_ends_with_fermium() {
        let mut buf = Vec::new();
        write_csv(&mut buf, Element::all()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 101);
        assert_eq!(text.lines().last(), Some("100,Fm,Fermium"));
    }
}
