use diesel::prelude::*;

use crate::domain::taxonomy::{NewSalaryRange, SalaryRange, TaxonomyEntry, TaxonomyKind};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TaxonomyReader, TaxonomyWriter};

impl TaxonomyReader for DieselRepository {
    fn list_taxonomy(&self, kind: TaxonomyKind) -> RepositoryResult<Vec<TaxonomyEntry>> {
        use crate::models::taxonomy::{
            Category, CompanySize, Level, Position, SalaryRange as DbSalaryRange, Skill,
        };
        use crate::schema::{categories, company_sizes, levels, positions, salary_ranges, skills};

        let mut conn = self.conn()?;
        let entries = match kind {
            TaxonomyKind::Skills => skills::table
                .order(skills::name.asc())
                .load::<Skill>(&mut conn)?
                .into_iter()
                .map(TaxonomyEntry::from)
                .collect(),
            TaxonomyKind::Levels => levels::table
                .order(levels::name.asc())
                .load::<Level>(&mut conn)?
                .into_iter()
                .map(TaxonomyEntry::from)
                .collect(),
            TaxonomyKind::Positions => positions::table
                .order(positions::name.asc())
                .load::<Position>(&mut conn)?
                .into_iter()
                .map(TaxonomyEntry::from)
                .collect(),
            TaxonomyKind::Categories => categories::table
                .order(categories::name.asc())
                .load::<Category>(&mut conn)?
                .into_iter()
                .map(TaxonomyEntry::from)
                .collect(),
            TaxonomyKind::CompanySizes => company_sizes::table
                .order(company_sizes::id.asc())
                .load::<CompanySize>(&mut conn)?
                .into_iter()
                .map(TaxonomyEntry::from)
                .collect(),
            TaxonomyKind::Salaries => salary_ranges::table
                .order(salary_ranges::min_amount.asc())
                .load::<DbSalaryRange>(&mut conn)?
                .into_iter()
                .map(TaxonomyEntry::from)
                .collect(),
        };

        Ok(entries)
    }

    fn list_salary_ranges(&self) -> RepositoryResult<Vec<SalaryRange>> {
        use crate::models::taxonomy::SalaryRange as DbSalaryRange;
        use crate::schema::salary_ranges;

        let mut conn = self.conn()?;
        let ranges = salary_ranges::table
            .order(salary_ranges::min_amount.asc())
            .load::<DbSalaryRange>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ranges)
    }
}

impl TaxonomyWriter for DieselRepository {
    fn create_taxonomy_entry(
        &self,
        kind: TaxonomyKind,
        name: &str,
    ) -> RepositoryResult<TaxonomyEntry> {
        use crate::models::taxonomy::{
            Category, CompanySize, Level, NewCategory, NewCompanySize, NewLevel, NewPosition,
            NewSkill, Position, Skill,
        };
        use crate::schema::{categories, company_sizes, levels, positions, skills};

        let mut conn = self.conn()?;
        let entry = match kind {
            TaxonomyKind::Skills => diesel::insert_into(skills::table)
                .values(&NewSkill { name })
                .get_result::<Skill>(&mut conn)?
                .into(),
            TaxonomyKind::Levels => diesel::insert_into(levels::table)
                .values(&NewLevel { name })
                .get_result::<Level>(&mut conn)?
                .into(),
            TaxonomyKind::Positions => diesel::insert_into(positions::table)
                .values(&NewPosition { name })
                .get_result::<Position>(&mut conn)?
                .into(),
            TaxonomyKind::Categories => diesel::insert_into(categories::table)
                .values(&NewCategory { name })
                .get_result::<Category>(&mut conn)?
                .into(),
            TaxonomyKind::CompanySizes => diesel::insert_into(company_sizes::table)
                .values(&NewCompanySize { label: name })
                .get_result::<CompanySize>(&mut conn)?
                .into(),
            // Salary ranges carry amounts; they go through create_salary_range.
            TaxonomyKind::Salaries => {
                return Err(RepositoryError::ValidationError(
                    "Salary ranges require amounts".to_string(),
                ));
            }
        };

        Ok(entry)
    }

    fn create_salary_range(&self, range: &NewSalaryRange) -> RepositoryResult<SalaryRange> {
        use crate::models::taxonomy::{
            NewSalaryRange as DbNewSalaryRange, SalaryRange as DbSalaryRange,
        };
        use crate::schema::salary_ranges;

        let mut conn = self.conn()?;
        let insertable: DbNewSalaryRange = range.into();
        let created = diesel::insert_into(salary_ranges::table)
            .values(&insertable)
            .get_result::<DbSalaryRange>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_taxonomy_entry(&self, kind: TaxonomyKind, entry_id: i32) -> RepositoryResult<()> {
        use crate::schema::{categories, company_sizes, levels, positions, salary_ranges, skills};

        let mut conn = self.conn()?;
        let affected = match kind {
            TaxonomyKind::Skills => {
                diesel::delete(skills::table.find(entry_id)).execute(&mut conn)?
            }
            TaxonomyKind::Levels => {
                diesel::delete(levels::table.find(entry_id)).execute(&mut conn)?
            }
            TaxonomyKind::Positions => {
                diesel::delete(positions::table.find(entry_id)).execute(&mut conn)?
            }
            TaxonomyKind::Categories => {
                diesel::delete(categories::table.find(entry_id)).execute(&mut conn)?
            }
            TaxonomyKind::CompanySizes => {
                diesel::delete(company_sizes::table.find(entry_id)).execute(&mut conn)?
            }
            TaxonomyKind::Salaries => {
                diesel::delete(salary_ranges::table.find(entry_id)).execute(&mut conn)?
            }
        };
        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
