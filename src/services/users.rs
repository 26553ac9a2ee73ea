use crate::domain::user::UserRole;
use crate::dto::filters::SectionDef;
use crate::dto::users::UsersPageData;
use crate::forms::users::SetRoleForm;
use crate::listing::{FilterSet, ListQuery};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{TaxonomyReader, UserListQuery, UserReader, UserWriter};
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, filters, paginate};
use crate::ADMIN_ROLE;

/// Filter keys recognized by the admin user list.
pub const USER_FILTER_KEYS: &[&str] = &["search", "role"];

pub(crate) fn to_list_query(filters: &FilterSet) -> UserListQuery {
    let mut query = UserListQuery::new();
    if let Some(search) = filters.get("search") {
        query = query.search(search);
    }
    if let Some(role) = filters.get("role").and_then(|r| UserRole::try_from(r).ok()) {
        query = query.role(role);
    }
    query
}

/// Loads the admin user list.
pub fn load_users<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: &ListQuery,
) -> ServiceResult<UsersPageData>
where
    R: UserReader + TaxonomyReader + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let list_query =
        to_list_query(query.filters()).paginate(query.page(), DEFAULT_ITEMS_PER_PAGE);
    let (total, users) = repo.list_users(list_query)?;

    let defs = vec![SectionDef::computed(
        "role",
        "Role",
        UserRole::ALL
            .iter()
            .map(|r| (r.as_str().to_string(), r.as_str().to_string()))
            .collect(),
    )];
    let sections = filters::build_sections(repo, defs, query)?;

    Ok(UsersPageData {
        users: paginate(users, total, query.page()),
        sections,
        filter_query: query.filters().to_query_string(),
    })
}

/// Changes another user's role. Admins cannot change their own role, so the
/// system always keeps at least the acting admin.
pub fn set_user_role<R>(
    repo: &R,
    user: &AuthenticatedUser,
    user_id: i32,
    form: SetRoleForm,
) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    if user.user_id() == Some(user_id) {
        return Err(ServiceError::Form(
            "You cannot change your own role.".to_string(),
        ));
    }
    let role = UserRole::try_from(form.role.as_str())
        .map_err(|_| ServiceError::Form("Unknown role.".to_string()))?;

    repo.set_user_role(user_id, role)?;
    Ok(())
}

pub fn delete_user<R>(repo: &R, user: &AuthenticatedUser, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    if !check_role(ADMIN_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }
    if user.user_id() == Some(user_id) {
        return Err(ServiceError::Form(
            "You cannot delete your own account.".to_string(),
        ));
    }
    repo.delete_user(user_id)?;
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
    fn admins_cannot_change_their_own_role() {
        let repo = MockRepository::new();
        let form = SetRoleForm {
            role: "candidate".to_string(),
        };

        let result = set_user_role(&repo, &admin(), 1, form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn role_filter_ignores_unknown_values() {
        let mut filters = FilterSet::new();
        filters.set("role", "superuser");
        assert_eq!(to_list_query(&filters).role, None);

        filters.set("role", "recruiter");
        assert_eq!(to_list_query(&filters).role, Some(UserRole::Recruiter));
    }
}
