use crate::domain::user::User;
use crate::dto::filters::FilterSection;
use crate::pagination::Paginated;

/// Data required to render the admin user list.
pub struct UsersPageData {
    pub users: Paginated<User>,
    pub sections: Vec<FilterSection>,
    pub filter_query: String,
}
