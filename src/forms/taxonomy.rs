use serde::Deserialize;
use validator::Validate;

use crate::domain::taxonomy::NewSalaryRange;

#[derive(Deserialize, Validate)]
/// Form data for adding a vocabulary entry.
pub struct AddEntryForm {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Deserialize, Validate)]
/// Form data for adding a salary bracket.
pub struct AddSalaryRangeForm {
    #[validate(length(min = 1))]
    pub label: String,
    #[validate(range(min = 0))]
    pub min_amount: i32,
    #[validate(range(min = 0))]
    pub max_amount: i32,
}

impl From<&AddSalaryRangeForm> for NewSalaryRange {
    fn from(form: &AddSalaryRangeForm) -> Self {
        Self {
            label: form.label.trim().to_string(),
            min_amount: form.min_amount,
            max_amount: form.max_amount,
        }
    }
}
