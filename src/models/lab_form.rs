//! Lab input form model
//!
//! Holds the raw field values of a single form session. Values are kept as
//! entered; parsing and validation happen at compute time, on the explicit
//! trigger. Nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::labs::PlateletUnit;

/// Identifier for one of the four numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabField {
    Age,
    Ast,
    Alt,
    Platelets,
}

impl LabField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabField::Age => "age",
            LabField::Ast => "ast",
            LabField::Alt => "alt",
            LabField::Platelets => "platelets",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "age" => Some(LabField::Age),
            "ast" => Some(LabField::Ast),
            "alt" => Some(LabField::Alt),
            "platelets" | "plt" => Some(LabField::Platelets),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LabField::Age => "Age (years)",
            LabField::Ast => "AST (IU/L)",
            LabField::Alt => "ALT (IU/L)",
            LabField::Platelets => "Platelets",
        }
    }
}

/// Raw values of a single form session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabForm {
    pub age: String,
    pub ast: String,
    pub alt: String,
    pub platelets: String,
    pub platelet_unit: PlateletUnit,
}

impl LabForm {
    /// Replace one field's raw value
    pub fn set(&mut self, field: LabField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LabField::Age => self.age = value,
            LabField::Ast => self.ast = value,
            LabField::Alt => self.alt = value,
            LabField::Platelets => self.platelets = value,
        }
    }

    /// Raw value of one field
    pub fn get(&self, field: LabField) -> &str {
        match field {
            LabField::Age => &self.age,
            LabField::Ast => &self.ast,
            LabField::Alt => &self.alt,
            LabField::Platelets => &self.platelets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str() {
        assert_eq!(LabField::from_str("age"), Some(LabField::Age));
        assert_eq!(LabField::from_str("AST"), Some(LabField::Ast));
        assert_eq!(LabField::from_str("plt"), Some(LabField::Platelets));
        assert_eq!(LabField::from_str("weight"), None);
    }

    #[test]
    fn test_set_and_get_by_field_name() {
        let mut form = LabForm::default();
        for (name, value) in [("age", "50"), ("ast", "80"), ("alt", "40"), ("platelets", "150")] {
            let field = LabField::from_str(name).unwrap();
            form.set(field, value);
            assert_eq!(form.get(field), value);
        }
        assert_eq!(form.age, "50");
        assert_eq!(form.platelets, "150");
    }

    #[test]
    fn test_default_unit_is_canonical() {
        let form = LabForm::default();
        assert_eq!(form.platelet_unit, PlateletUnit::GigaPerLiter);
    }
}
