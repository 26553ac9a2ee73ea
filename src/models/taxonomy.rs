use diesel::prelude::*;

use crate::domain::taxonomy::{
    NewSalaryRange as DomainNewSalaryRange, SalaryRange as DomainSalaryRange, TaxonomyEntry,
};

/// Row shape shared by the name-only taxonomy tables (skills, levels,
/// positions, categories). Each table gets its own Queryable alias below
/// because Diesel ties the derive to one table.
macro_rules! taxonomy_model {
    ($model:ident, $new_model:ident, $table:ident) => {
        #[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
        #[diesel(table_name = crate::schema::$table)]
        pub struct $model {
            pub id: i32,
            pub name: String,
        }

        #[derive(Insertable)]
        #[diesel(table_name = crate::schema::$table)]
        pub struct $new_model<'a> {
            pub name: &'a str,
        }

        impl From<$model> for TaxonomyEntry {
            fn from(row: $model) -> Self {
                Self {
                    id: row.id,
                    name: row.name,
                }
            }
        }
    };
}

taxonomy_model!(Skill, NewSkill, skills);
taxonomy_model!(Level, NewLevel, levels);
taxonomy_model!(Position, NewPosition, positions);
taxonomy_model!(Category, NewCategory, categories);

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::company_sizes)]
pub struct CompanySize {
    pub id: i32,
    pub label: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::company_sizes)]
pub struct NewCompanySize<'a> {
    pub label: &'a str,
}

impl From<CompanySize> for TaxonomyEntry {
    fn from(row: CompanySize) -> Self {
        Self {
            id: row.id,
            name: row.label,
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::salary_ranges)]
pub struct SalaryRange {
    pub id: i32,
    pub label: String,
    pub min_amount: i32,
    pub max_amount: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::salary_ranges)]
pub struct NewSalaryRange<'a> {
    pub label: &'a str,
    pub min_amount: i32,
    pub max_amount: i32,
}

impl From<SalaryRange> for DomainSalaryRange {
    fn from(row: SalaryRange) -> Self {
        Self {
            id: row.id,
            label: row.label,
            min_amount: row.min_amount,
            max_amount: row.max_amount,
        }
    }
}

impl From<SalaryRange> for TaxonomyEntry {
    fn from(row: SalaryRange) -> Self {
        Self {
            id: row.id,
            name: row.label,
        }
    }
}

impl<'a> From<&'a DomainNewSalaryRange> for NewSalaryRange<'a> {
    fn from(range: &'a DomainNewSalaryRange) -> Self {
        Self {
            label: &range.label,
            min_amount: range.min_amount,
            max_amount: range.max_amount,
        }
    }
}
