use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element: '{0}'")]
pub struct ParseElementError(String);

/// Lowest atomic number in the reference table.
pub const MIN_ATOMIC_NUMBER: i32 = 1;
/// Highest atomic number in the reference table (fermium).
pub const MAX_ATOMIC_NUMBER: i32 = 100;

/// Projectile elements supported by the charge-state model, hydrogen
/// through fermium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
    Cs,
    Ba,
    La,
    Ce,
    Pr,
    Nd,
    Pm,
    Sm,
    Eu,
    Gd,
    Tb,
    Dy,
    Ho,
    Er,
    Tm,
    Yb,
    Lu,
    Hf,
    Ta,
    W,
    Re,
    Os,
    Ir,
    Pt,
    Au,
    Hg,
    Tl,
    Pb,
    Bi,
    Po,
    At,
    Rn,
    Fr,
    Ra,
    Ac,
    Th,
    Pa,
    U,
    Np,
    Pu,
    Am,
    Cm,
    Bk,
    Cf,
    Es,
    Fm = 100,
}

struct ElementRecord {
    symbol: &'static str,
    name: &'static str,
}

#[rustfmt::skip]
static RECORDS: [ElementRecord; 100] = [
    ElementRecord { symbol: "H", name: "Hydrogen" },
    ElementRecord { symbol: "He", name: "Helium" },
    ElementRecord { symbol: "Li", name: "Lithium" },
    ElementRecord { symbol: "Be", name: "Beryllium" },
    ElementRecord { symbol: "B", name: "Boron" },
    ElementRecord { symbol: "C", name: "Carbon" },
    ElementRecord { symbol: "N", name: "Nitrogen" },
    ElementRecord { symbol: "O", name: "Oxygen" },
    ElementRecord { symbol: "F", name: "Fluorine" },
    ElementRecord { symbol: "Ne", name: "Neon" },
    ElementRecord { symbol: "Na", name: "Sodium" },
    ElementRecord { symbol: "Mg", name: "Magnesium" },
    ElementRecord { symbol: "Al", name: "Aluminum" },
    ElementRecord { symbol: "Si", name: "Silicon" },
    ElementRecord { symbol: "P", name: "Phosphorus" },
    ElementRecord { symbol: "S", name: "Sulfur" },
    ElementRecord { symbol: "Cl", name: "Chlorine" },
    ElementRecord { symbol: "Ar", name: "Argon" },
    ElementRecord { symbol: "K", name: "Potassium" },
    ElementRecord { symbol: "Ca", name: "Calcium" },
    ElementRecord { symbol: "Sc", name: "Scandium" },
    ElementRecord { symbol: "Ti", name: "Titanium" },
    ElementRecord { symbol: "V", name: "Vanadium" },
    ElementRecord { symbol: "Cr", name: "Chromium" },
    ElementRecord { symbol: "Mn", name: "Manganese" },
    ElementRecord { symbol: "Fe", name: "Iron" },
    ElementRecord { symbol: "Co", name: "Cobalt" },
    ElementRecord { symbol: "Ni", name: "Nickel" },
    ElementRecord { symbol: "Cu", name: "Copper" },
    ElementRecord { symbol: "Zn", name: "Zinc" },
    ElementRecord { symbol: "Ga", name: "Gallium" },
    ElementRecord { symbol: "Ge", name: "Germanium" },
    ElementRecord { symbol: "As", name: "Arsenic" },
    ElementRecord { symbol: "Se", name: "Selenium" },
    ElementRecord { symbol: "Br", name: "Bromine" },
    ElementRecord { symbol: "Kr", name: "Krypton" },
    ElementRecord { symbol: "Rb", name: "Rubidium" },
    ElementRecord { symbol: "Sr", name: "Strontium" },
    ElementRecord { symbol: "Y", name: "Yttrium" },
    ElementRecord { symbol: "Zr", name: "Zirconium" },
    ElementRecord { symbol: "Nb", name: "Niobium" },
    ElementRecord { symbol: "Mo", name: "Molybdenum" },
    ElementRecord { symbol: "Tc", name: "Technetium" },
    ElementRecord { symbol: "Ru", name: "Ruthenium" },
    ElementRecord { symbol: "Rh", name: "Rhodium" },
    ElementRecord { symbol: "Pd", name: "Palladium" },
    ElementRecord { symbol: "Ag", name: "Silver" },
    ElementRecord { symbol: "Cd", name: "Cadmium" },
    ElementRecord { symbol: "In", name: "Indium" },
    ElementRecord { symbol: "Sn", name: "Tin" },
    ElementRecord { symbol: "Sb", name: "Antimony" },
    ElementRecord { symbol: "Te", name: "Tellurium" },
    ElementRecord { symbol: "I", name: "Iodine" },
    ElementRecord { symbol: "Xe", name: "Xenon" },
    ElementRecord { symbol: "Cs", name: "Cesium" },
    ElementRecord { symbol: "Ba", name: "Barium" },
    ElementRecord { symbol: "La", name: "Lanthanum" },
    ElementRecord { symbol: "Ce", name: "Cerium" },
    ElementRecord { symbol: "Pr", name: "Praseodymium" },
    ElementRecord { symbol: "Nd", name: "Neodymium" },
    ElementRecord { symbol: "Pm", name: "Promethium" },
    ElementRecord { symbol: "Sm", name: "Samarium" },
    ElementRecord { symbol: "Eu", name: "Europium" },
    ElementRecord { symbol: "Gd", name: "Gadolinium" },
    ElementRecord { symbol: "Tb", name: "Terbium" },
    ElementRecord { symbol: "Dy", name: "Dysprosium" },
    ElementRecord { symbol: "Ho", name: "Holmium" },
    ElementRecord { symbol: "Er", name: "Erbium" },
    ElementRecord { symbol: "Tm", name: "Thulium" },
    ElementRecord { symbol: "Yb", name: "Ytterbium" },
    ElementRecord { symbol: "Lu", name: "Lutetium" },
    ElementRecord { symbol: "Hf", name: "Hafnium" },
    ElementRecord { symbol: "Ta", name: "Tantalum" },
    ElementRecord { symbol: "W", name: "Tungsten" },
    ElementRecord { symbol: "Re", name: "Rhenium" },
    ElementRecord { symbol: "Os", name: "Osmium" },
    ElementRecord { symbol: "Ir", name: "Iridium" },
    ElementRecord { symbol: "Pt", name: "Platinum" },
    ElementRecord { symbol: "Au", name: "Gold" },
    ElementRecord { symbol: "Hg", name: "Mercury" },
    ElementRecord { symbol: "Tl", name: "Thallium" },
    ElementRecord { symbol: "Pb", name: "Lead" },
    ElementRecord { symbol: "Bi", name: "Bismuth" },
    ElementRecord { symbol: "Po", name: "Polonium" },
    ElementRecord { symbol: "At", name: "Astatine" },
    ElementRecord { symbol: "Rn", name: "Radon" },
    ElementRecord { symbol: "Fr", name: "Francium" },
    ElementRecord { symbol: "Ra", name: "Radium" },
    ElementRecord { symbol: "Ac", name: "Actinium" },
    ElementRecord { symbol: "Th", name: "Thorium" },
    ElementRecord { symbol: "Pa", name: "Protactinium" },
    ElementRecord { symbol: "U", name: "Uranium" },
    ElementRecord { symbol: "Np", name: "Neptunium" },
    ElementRecord { symbol: "Pu", name: "Plutonium" },
    ElementRecord { symbol: "Am", name: "Americium" },
    ElementRecord { symbol: "Cm", name: "Curium" },
    ElementRecord { symbol: "Bk", name: "Berkelium" },
    ElementRecord { symbol: "Cf", name: "Californium" },
    ElementRecord { symbol: "Es", name: "Einsteinium" },
    ElementRecord { symbol: "Fm", name: "Fermium" },
];

#[rustfmt::skip]
const ALL: [Element; 100] = [
    Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C, Element::N,
    Element::O, Element::F, Element::Ne, Element::Na, Element::Mg, Element::Al, Element::Si,
    Element::P, Element::S, Element::Cl, Element::Ar, Element::K, Element::Ca, Element::Sc,
    Element::Ti, Element::V, Element::Cr, Element::Mn, Element::Fe, Element::Co, Element::Ni,
    Element::Cu, Element::Zn, Element::Ga, Element::Ge, Element::As, Element::Se, Element::Br,
    Element::Kr, Element::Rb, Element::Sr, Element::Y, Element::Zr, Element::Nb, Element::Mo,
    Element::Tc, Element::Ru, Element::Rh, Element::Pd, Element::Ag, Element::Cd, Element::In,
    Element::Sn, Element::Sb, Element::Te, Element::I, Element::Xe, Element::Cs, Element::Ba,
    Element::La, Element::Ce, Element::Pr, Element::Nd, Element::Pm, Element::Sm, Element::Eu,
    Element::Gd, Element::Tb, Element::Dy, Element::Ho, Element::Er, Element::Tm, Element::Yb,
    Element::Lu, Element::Hf, Element::Ta, Element::W, Element::Re, Element::Os, Element::Ir,
    Element::Pt, Element::Au, Element::Hg, Element::Tl, Element::Pb, Element::Bi, Element::Po,
    Element::At, Element::Rn, Element::Fr, Element::Ra, Element::Ac, Element::Th, Element::Pa,
    Element::U, Element::Np, Element::Pu, Element::Am, Element::Cm, Element::Bk, Element::Cf,
    Element::Es, Element::Fm,
];

impl Element {
    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn symbol(&self) -> &'static str {
        self.record().symbol
    }

    /// English element name, as used by the element picker ("Lead").
    pub fn name(&self) -> &'static str {
        self.record().name
    }

    /// Returns the element with atomic number `z`, or `None` outside
    /// `MIN_ATOMIC_NUMBER..=MAX_ATOMIC_NUMBER`.
    pub fn from_atomic_number(z: i32) -> Option<Self> {
        if (MIN_ATOMIC_NUMBER..=MAX_ATOMIC_NUMBER).contains(&z) {
            Some(ALL[(z - 1) as usize])
        } else {
            None
        }
    }

    /// All supported elements in ascending atomic-number order.
    pub fn all() -> &'static [Element] {
        &ALL
    }

    fn record(&self) -> &'static ElementRecord {
        &RECORDS[*self as usize - 1]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Accepts an exact symbol ("Pb") or a case-insensitive name ("lead").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL.iter()
            .copied()
            .find(|el| el.symbol() == trimmed)
            .or_else(|| {
                ALL.iter()
                    .copied()
                    .find(|el| el.name().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn element_from_str_symbol() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("He").unwrap(), Element::He);
        assert_eq!(Element::from_str("Pb").unwrap(), Element::Pb);
        assert_eq!(Element::from_str("Fm").unwrap(), Element::Fm);
    }

    #[test]
    fn element_from_str_name_ignores_case() {
        assert_eq!(Element::from_str("Lead").unwrap(), Element::Pb);
        assert_eq!(Element::from_str("uranium").unwrap(), Element::U);
        assert_eq!(Element::from_str(" Xenon ").unwrap(), Element::Xe);
    }

    #[test]
    fn element_from_str_invalid() {
        let err = Element::from_str("Og").unwrap_err();
        assert_eq!(err.to_string(), "invalid or unsupported element: 'Og'");

        assert!(Element::from_str("pb").is_err());
    }

    #[test]
    fn element_symbol_display_and_atomic_number() {
        let el = Element::Na;
        assert_eq!(el.symbol(), "Na");
        assert_eq!(el.name(), "Sodium");
        assert_eq!(el.to_string(), "Na");
        assert_eq!(el.atomic_number(), 11u8);
        assert_eq!(Element::Pb.atomic_number(), 82u8);
    }

    #[test]
    fn from_atomic_number_bounds() {
        assert_eq!(Element::from_atomic_number(1), Some(Element::H));
        assert_eq!(Element::from_atomic_number(82), Some(Element::Pb));
        assert_eq!(Element::from_atomic_number(100), Some(Element::Fm));
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(-5), None);
        assert_eq!(Element::from_atomic_number(101), None);
    }

    #[test]
    fn table_is_ordered_by_atomic_number() {
        let all = Element::all();
        assert_eq!(all.len(), MAX_ATOMIC_NUMBER as usize);
        for (i, el) in all.iter().enumerate() {
            assert_eq!(el.atomic_number() as usize, i + 1);
        }
    }
}
