use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_model_hints(err);
        collector.collect_element_hints(err);
        collector.collect_io_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_model_hints(&mut self, err: &Error) {
        use charge_state::{Error as ModelError, MAX_ATOMIC_NUMBER, MIN_ATOMIC_NUMBER};

        let Some(model_err) = err.downcast_ref::<ModelError>() else {
            return;
        };

        self.mark_typed();

        match model_err {
            ModelError::NotFound { .. } => {
                self.add(format!(
                    "Supported atomic numbers are {MIN_ATOMIC_NUMBER} through {MAX_ATOMIC_NUMBER}"
                ));
                self.add("Run `qstate elements` to list every supported projectile");
            }

            ModelError::InvalidKinematics {
                energy_per_nucleon,
                rest_energy,
                ..
            } => {
                if !(energy_per_nucleon.is_finite() && *energy_per_nucleon > 0.0) {
                    self.add("Enter a positive kinetic energy per nucleon with --energy (MeV/u)");
                }
                if !(rest_energy.is_finite() && *rest_energy > 0.0) {
                    self.add("Enter a positive rest energy with --rest-energy (MeV)");
                    self.add("The nucleon rest energy is about 931.5 MeV");
                }
            }

            ModelError::InvalidChargeState(_) => {
                self.add("The model needs a positive atomic number and a non-negative velocity");
                self.add("Check the --energy and --rest-energy values");
            }

            ModelError::InvalidDistribution(_) => {
                self.add(format!(
                    "Use --width with 0 through {} charge states",
                    charge_state::MAX_ONESIDED_LEN
                ));
                self.add("Check that custom coefficients give a non-negative width_scale");
            }

            ModelError::ParameterParse(_) => {
                self.add("Coefficient file has invalid TOML syntax");
                self.add("Expected a [model] table with k1, k2 and width_scale");
            }

            ModelError::InvalidCoefficient { name, .. } => {
                self.add(format!("Fix the value of '{name}' in the coefficient file"));
                self.add("k1 must be positive, k2 finite, width_scale non-negative");
            }
        }
    }

    fn collect_element_hints(&mut self, err: &Error) {
        if err.downcast_ref::<charge_state::ParseElementError>().is_none() {
            return;
        }

        self.mark_typed();
        self.add("Give an atomic number (82), a symbol (Pb) or a name (Lead)");
        self.add("Symbols are case-sensitive; names are not");
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use std::io::ErrorKind;

        let Some(io_err) = err.downcast_ref::<std::io::Error>() else {
            return;
        };

        self.mark_typed();

        match io_err.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer exited");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
