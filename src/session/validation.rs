//! Form validation
//!
//! Both fields are required: a field counts as filled when its trimmed
//! value is non-empty. Failures name exactly which fields are missing.

/// Message shown under the form when a submit is rejected
pub const VALIDATION_MESSAGE: &str = "Bestie, don't leave me hanging! Fill in the deets. 💅";

/// The two user-owned form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub product_name: String,
    pub features: String,
}

impl FormInput {
    #[cfg(test)]
    pub fn new(product_name: impl Into<String>, features: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            features: features.into(),
        }
    }
}

/// Identifies one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProductName,
    Features,
}

/// Form input that passed validation
///
/// Values are passed on as typed; trimming is only used for the emptiness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub product_name: String,
    pub features: String,
}

/// Per-field validation flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name_invalid: bool,
    pub features_invalid: bool,
}

impl ValidationErrors {
    pub fn any(&self) -> bool {
        self.name_invalid || self.features_invalid
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        match field {
            Field::ProductName => self.name_invalid,
            Field::Features => self.features_invalid,
        }
    }

    /// Clear a field's flag once its value is non-empty after trim
    ///
    /// Only the edited field is touched.
    pub fn clear_if_filled(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        match field {
            Field::ProductName => self.name_invalid = false,
            Field::Features => self.features_invalid = false,
        }
    }
}

/// Check that both fields are filled
pub fn validate(input: &FormInput) -> Result<ValidatedInput, ValidationErrors> {
    let errors = ValidationErrors {
        name_invalid: input.product_name.trim().is_empty(),
        features_invalid: input.features.trim().is_empty(),
    };

    if errors.any() {
        return Err(errors);
    }

    Ok(ValidatedInput {
        product_name: input.product_name.clone(),
        features: input.features.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_only_flags_name() {
        let err = validate(&FormInput::new("", "tastes fiery")).unwrap_err();
        assert_eq!(
            err,
            ValidationErrors {
                name_invalid: true,
                features_invalid: false
            }
        );
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let err = validate(&FormInput::new("   ", "\n\t")).unwrap_err();
        assert!(err.name_invalid);
        assert!(err.features_invalid);
    }

    #[test]
    fn valid_input_keeps_original_text() {
        let ok = validate(&FormInput::new(" Lip Balm ", "neon")).unwrap();
        assert_eq!(ok.product_name, " Lip Balm ");
        assert_eq!(ok.features, "neon");
    }

    #[test]
    fn clearing_touches_only_the_edited_field() {
        let mut errors = ValidationErrors {
            name_invalid: true,
            features_invalid: true,
        };

        errors.clear_if_filled(Field::ProductName, "  ");
        assert!(errors.name_invalid);

        errors.clear_if_filled(Field::ProductName, "Cheetos");
        assert!(!errors.name_invalid);
        assert!(errors.features_invalid);
    }
}
