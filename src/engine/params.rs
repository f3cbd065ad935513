use super::constants::{BARON_K1, BARON_K2, BARON_WIDTH_SCALE};
use super::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_COEFFICIENTS_TOML: &str = include_str!("../../resources/default.coefficients.toml");

static DEFAULT_COEFFICIENTS: OnceLock<Coefficients> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
struct CoefficientFile {
    #[serde(default)]
    model: Coefficients,
}

/// Fitted constants of the semi-empirical charge-state formula.
///
/// `k1` multiplies the reduced velocity (Bohr units), `k2` is the
/// atomic-number exponent and `width_scale` sets the distribution width.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coefficients {
    #[serde(default = "default_k1")]
    pub k1: f64,
    #[serde(default = "default_k2")]
    pub k2: f64,
    #[serde(default = "default_width_scale")]
    pub width_scale: f64,
}

fn default_k1() -> f64 {
    BARON_K1
}
fn default_k2() -> f64 {
    BARON_K2
}
fn default_width_scale() -> f64 {
    BARON_WIDTH_SCALE
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            k1: default_k1(),
            k2: default_k2(),
            width_scale: default_width_scale(),
        }
    }
}

impl Coefficients {
    fn validate(self) -> Result<Self, Error> {
        if !(self.k1.is_finite() && self.k1 > 0.0) {
            return Err(Error::invalid_coefficient(
                "k1",
                self.k1,
                "must be a positive finite number",
            ));
        }
        if !self.k2.is_finite() {
            return Err(Error::invalid_coefficient(
                "k2",
                self.k2,
                "must be a finite number",
            ));
        }
        if !(self.width_scale.is_finite() && self.width_scale >= 0.0) {
            return Err(Error::invalid_coefficient(
                "width_scale",
                self.width_scale,
                "must be a non-negative finite number",
            ));
        }
        Ok(self)
    }
}

/// Parses a custom coefficient document, or returns the embedded defaults.
///
/// Keys missing from a custom `[model]` table fall back to the defaults one
/// by one.
pub fn load_coefficients(custom_toml: Option<&str>) -> Result<Coefficients, Error> {
    match custom_toml {
        Some(toml) => {
            let file: CoefficientFile = toml::from_str(toml)?;
            log::debug!("loaded custom model coefficients: {:?}", file.model);
            file.model.validate()
        }
        None => Ok(*get_default_coefficients()),
    }
}

pub fn get_default_coefficients() -> &'static Coefficients {
    DEFAULT_COEFFICIENTS.get_or_init(|| {
        toml::from_str::<CoefficientFile>(DEFAULT_COEFFICIENTS_TOML)
            .expect("Failed to parse embedded default coefficients. This is a library bug.")
            .model
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_coefficients_match_constants() {
        let c = get_default_coefficients();
        assert_eq!(c.k1, BARON_K1);
        assert_eq!(c.k2, BARON_K2);
        assert_eq!(c.width_scale, BARON_WIDTH_SCALE);
        assert_eq!(*c, Coefficients::default());
    }

    #[test]
    fn load_without_custom_returns_defaults() {
        let c = load_coefficients(None).unwrap();
        assert_eq!(c, *get_default_coefficients());
    }

    #[test]
    fn custom_coefficients_fill_missing_keys() {
        let custom = r#"
            [model]
            k2 = 0.5
        "#;
        let c = load_coefficients(Some(custom)).unwrap();
        let defaults = get_default_coefficients();
        assert_eq!(c.k2, 0.5);
        assert_eq!(c.k1, defaults.k1);
        assert_eq!(c.width_scale, defaults.width_scale);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let c = load_coefficients(Some("")).unwrap();
        assert_eq!(c, Coefficients::default());
        assert_eq!(c, load_coefficients(None).unwrap());

        let c = load_coefficients(Some("[model]\n")).unwrap();
        assert_eq!(c, *get_default_coefficients());
    }

    #[test]
    fn errors_on_invalid_custom_toml() {
        let invalid = "not valid [[[toml";
        let result = load_coefficients(Some(invalid));
        assert!(matches!(result, Err(Error::ParameterParse(_))));
    }

    #[test]
    fn rejects_non_positive_k1() {
        let result = load_coefficients(Some("[model]\nk1 = 0.0\n"));
        assert!(matches!(
            result,
            Err(Error::InvalidCoefficient { name: "k1", .. })
        ));
    }

    #[test]
    fn rejects_negative_width_scale() {
        let result = load_coefficients(Some("[model]\nwidth_scale = -0.1\n"));
        assert!(matches!(
            result,
            Err(Error::InvalidCoefficient {
                name: "width_scale",
                ..
            })
        ));
    }
}
