//! Case/control split of an identifier list

use crate::relatedness::Identifier;

/// Binary phenotype flag from the identifier file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phenotype {
    /// Phenotype `1`
    Case,

    /// Phenotype `0`
    Control,
}

impl Phenotype {
    /// Parse the literal flag used in identifier files
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Phenotype::Case),
            "0" => Some(Phenotype::Control),
            _ => None,
        }
    }

    /// Suffix used for per-group output files
    pub fn suffix(&self) -> &'static str {
        match self {
            Phenotype::Case => "cases",
            Phenotype::Control => "controls",
        }
    }
}

/// Identifiers bucketed by phenotype, each in first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cohort {
    /// Identifiers flagged `1`
    pub cases: Vec<Identifier>,

    /// Identifiers flagged `0`
    pub controls: Vec<Identifier>,
}

impl Cohort {
    /// Add an identifier to the matching group
    pub fn push(&mut self, id: Identifier, phenotype: Phenotype) {
        match phenotype {
            Phenotype::Case => self.cases.push(id),
            Phenotype::Control => self.controls.push(id),
        }
    }

    /// Identifiers of one group
    pub fn group(&self, phenotype: Phenotype) -> &[Identifier] {
        match phenotype {
            Phenotype::Case => &self.cases,
            Phenotype::Control => &self.controls,
        }
    }

    /// Total number of identifiers across both groups
    pub fn len(&self) -> usize {
        self.cases.len() + self.controls.len()
    }

    /// True when neither group has identifiers
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phenotype_parse() {
        assert_eq!(Phenotype::parse("1"), Some(Phenotype::Case));
        assert_eq!(Phenotype::parse("0"), Some(Phenotype::Control));
        assert_eq!(Phenotype::parse("2"), None);
        assert_eq!(Phenotype::parse(" 1"), None);
    }

    #[test]
    fn test_push_routes_by_phenotype() {
        let mut cohort = Cohort::default();
        cohort.push("A".to_string(), Phenotype::Case);
        cohort.push("B".to_string(), Phenotype::Control);
        cohort.push("C".to_string(), Phenotype::Case);

        assert_eq!(cohort.group(Phenotype::Case), ["A", "C"]);
        assert_eq!(cohort.group(Phenotype::Control), ["B"]);
        assert_eq!(cohort.len(), 3);
    }
}
