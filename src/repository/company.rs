use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CompanyListQuery, CompanyReader, CompanyWriter, DieselRepository};

fn filtered(query: &CompanyListQuery) -> crate::schema::companies::BoxedQuery<'static, Sqlite> {
    use crate::schema::companies;

    let mut q = companies::table.into_boxed();
    if let Some(name) = &query.name {
        q = q.filter(companies::name.like(format!("%{name}%")));
    }
    if let Some(location) = &query.location {
        q = q.filter(companies::location.like(format!("%{location}%")));
    }
    if let Some(size) = &query.size {
        q = q.filter(companies::size.eq(size.clone()));
    }
    if let Some(status) = query.status {
        q = q.filter(companies::status.eq(status.as_str()));
    }
    q
}

impl CompanyReader for DieselRepository {
    fn get_company_by_id(&self, company_id: i32) -> RepositoryResult<Option<Company>> {
        use crate::models::company::Company as DbCompany;
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let company = companies::table
            .find(company_id)
            .first::<DbCompany>(&mut conn)
            .optional()?;

        Ok(company.map(Into::into))
    }

    fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)> {
        use crate::models::company::Company as DbCompany;
        use crate::schema::companies;

        let mut conn = self.conn()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items = filtered(&query).order(companies::name.asc());
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            items = items.limit(per_page).offset((page - 1) * per_page);
        }

        let companies = items
            .load::<DbCompany>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, companies))
    }

    fn list_memberships(&self, user_id: i32) -> RepositoryResult<Vec<i32>> {
        use crate::schema::company_members;

        let mut conn = self.conn()?;
        let companies = company_members::table
            .filter(company_members::user_id.eq(user_id))
            .select(company_members::company_id)
            .load::<i32>(&mut conn)?;

        Ok(companies)
    }
}

impl CompanyWriter for DieselRepository {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company> {
        use crate::models::company::{Company as DbCompany, NewCompany as DbNewCompany};
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let insertable: DbNewCompany = new_company.into();
        let company = diesel::insert_into(companies::table)
            .values(&insertable)
            .get_result::<DbCompany>(&mut conn)?;

        Ok(company.into())
    }

    fn update_company(
        &self,
        company_id: i32,
        updates: &UpdateCompany,
    ) -> RepositoryResult<Company> {
        use crate::models::company::{Company as DbCompany, UpdateCompany as DbUpdateCompany};
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let changes: DbUpdateCompany = updates.into();
        let company = diesel::update(companies::table.find(company_id))
            .set(&changes)
            .get_result::<DbCompany>(&mut conn)?;

        Ok(company.into())
    }

    fn delete_company(&self, company_id: i32) -> RepositoryResult<()> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let affected = diesel::delete(companies::table.find(company_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn add_member(&self, company_id: i32, user_id: i32) -> RepositoryResult<()> {
        use crate::models::company::CompanyMember;
        use crate::schema::company_members;

        let mut conn = self.conn()?;
        diesel::insert_or_ignore_into(company_members::table)
            .values(&CompanyMember {
                user_id,
                company_id,
            })
            .execute(&mut conn)?;

        Ok(())
    }

    fn remove_member(&self, company_id: i32, user_id: i32) -> RepositoryResult<()> {
        use crate::schema::company_members;

        let mut conn = self.conn()?;
        diesel::delete(
            company_members::table
                .filter(company_members::company_id.eq(company_id))
                .filter(company_members::user_id.eq(user_id)),
        )
        .execute(&mut conn)?;

        Ok(())
    }
}
