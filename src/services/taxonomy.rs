use validator::Validate;

use crate::domain::taxonomy::TaxonomyKind;
use crate::dto::taxonomy::{TaxonomyPageData, TaxonomySection};
use crate::forms::taxonomy::{AddEntryForm, AddSalaryRangeForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{TaxonomyReader, TaxonomyWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult};
use crate::ADMIN_ROLE;

/// The name-only vocabularies shown as plain add/remove blocks. Salary
/// ranges render separately with their amounts.
const NAME_KINDS: [TaxonomyKind; 5] = [
    TaxonomyKind::Skills,
    TaxonomyKind::Levels,
    TaxonomyKind::Positions,
    TaxonomyKind::Categories,
    TaxonomyKind::CompanySizes,
];

/// Loads every vocabulary for the admin taxonomy page.
pub fn load_taxonomy<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<TaxonomyPageData>
where
    R: TaxonomyReader + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let mut sections = Vec::with_capacity(NAME_KINDS.len());
    for kind in NAME_KINDS {
        sections.push(TaxonomySection {
            kind,
            entries: repo.list_taxonomy(kind)?,
        });
    }
    let salary_ranges = repo.list_salary_ranges()?;

    Ok(TaxonomyPageData {
        sections,
        salary_ranges,
    })
}

fn parse_kind(kind: &str) -> ServiceResult<TaxonomyKind> {
    TaxonomyKind::try_from(kind)
        .map_err(|_| ServiceError::Form("Unknown vocabulary.".to_string()))
}

/// Adds an entry to one of the name-only vocabularies.
pub fn add_entry<R>(
    repo: &R,
    user: &AuthenticatedUser,
    kind: &str,
    form: AddEntryForm,
) -> ServiceResult<()>
where
    R: TaxonomyWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    let kind = parse_kind(kind)?;
    if kind == TaxonomyKind::Salaries {
        return Err(ServiceError::Form(
            "Salary ranges are added with their amounts.".to_string(),
        ));
    }
    if let Err(err) = form.validate() {
        log::error!("Failed to validate taxonomy form: {err}");
        return Err(ServiceError::Form("A name is required.".to_string()));
    }

    repo.create_taxonomy_entry(kind, form.name.trim())?;
    Ok(())
}

/// Adds a salary bracket.
pub fn add_salary_range<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddSalaryRangeForm,
) -> ServiceResult<()>
where
    R: TaxonomyWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    if let Err(err) = form.validate() {
        log::error!("Failed to validate salary range form: {err}");
        return Err(ServiceError::Form("A label and amounts are required.".to_string()));
    }
    if form.min_amount > form.max_amount {
        return Err(ServiceError::Form(
            "The minimum amount must not exceed the maximum.".to_string(),
        ));
    }

    repo.create_salary_range(&(&form).into())?;
    Ok(())
}

/// Removes an entry from a vocabulary.
pub fn delete_entry<R>(
    repo: &R,
    user: &AuthenticatedUser,
    kind: &str,
    entry_id: i32,
) -> ServiceResult<()>
where
    R: TaxonomyWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    let kind = parse_kind(kind)?;
    repo.delete_taxonomy_entry(kind, entry_id)?;
    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "1".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            roles: vec!["admin".to_string()],
            companies: vec![],
            exp: 0,
        }
    }

    #[test]
    fn inverted_salary_bounds_are_rejected() {
        let repo = MockRepository::new();
        let form = AddSalaryRangeForm {
            label: "$100k+".to_string(),
            min_amount: 200_000,
            max_amount: 100_000,
        };

        let result = add_salary_range(&repo, &admin(), form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn unknown_kind_is_a_form_error() {
        let repo = MockRepository::new();
        let form = AddEntryForm {
            name: "Rust".to_string(),
        };

        let result = add_entry(&repo, &admin(), "frameworks", form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
