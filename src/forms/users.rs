use serde::Deserialize;

/// Form data for changing a user's role.
#[derive(Deserialize)]
pub struct SetRoleForm {
    pub role: String,
}
