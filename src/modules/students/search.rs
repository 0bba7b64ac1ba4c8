//! Whitelisted field search for the students table.
//!
//! An externally supplied field name never reaches a query in identifier
//! position: it is resolved to a [`SearchField`] variant first, and each
//! variant owns a fixed column plus the comparison and coercion rules for
//! its values. A name outside the whitelist or a value that does not parse
//! is rejected before any SQL is built.

use chrono::NaiveDate;

use crate::utils::errors::AppError;

/// The closed set of searchable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Id,
    Name,
    Age,
    Email,
    BirthDate,
}

/// How a field matches its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Exact,
    Substring,
}

/// A field paired with a value already coerced to the field's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerm {
    Id(i32),
    Name(String),
    Age(i32),
    Email(String),
    BirthDate(NaiveDate),
}

impl SearchField {
    /// Resolve an untrusted field name against the whitelist. The name is
    /// trimmed and case-folded before matching; anything else is rejected.
    pub fn resolve(name: &str) -> Result<Self, AppError> {
        match name.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "email" => Ok(Self::Email),
            "birth_date" => Ok(Self::BirthDate),
            _ => Err(AppError::bad_request(anyhow::anyhow!(
                "Unsupported search field: {}",
                name.trim()
            ))),
        }
    }

    /// The column this field reads. Only these identifiers can appear in a
    /// search statement.
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Age => "age",
            Self::Email => "email",
            Self::BirthDate => "birth_date",
        }
    }

    pub fn comparison(self) -> Comparison {
        match self {
            Self::Name => Comparison::Substring,
            _ => Comparison::Exact,
        }
    }

    /// Coerce a raw value to this field's type. A rejected value never
    /// reaches a query.
    pub fn coerce(self, value: &str) -> Result<SearchTerm, AppError> {
        match self {
            Self::Id => value
                .trim()
                .parse()
                .map(SearchTerm::Id)
                .map_err(|_| invalid_value(self, value)),
            Self::Age => value
                .trim()
                .parse()
                .map(SearchTerm::Age)
                .map_err(|_| invalid_value(self, value)),
            Self::BirthDate => value
                .trim()
                .parse()
                .map(SearchTerm::BirthDate)
                .map_err(|_| invalid_value(self, value)),
            Self::Name => Ok(SearchTerm::Name(value.to_string())),
            Self::Email => Ok(SearchTerm::Email(value.to_string())),
        }
    }
}

fn invalid_value(field: SearchField, value: &str) -> AppError {
    AppError::bad_request(anyhow::anyhow!(
        "Invalid value {:?} for field {}",
        value,
        field.column()
    ))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_resolve_known_fields() {
        assert_eq!(SearchField::resolve("id").unwrap(), SearchField::Id);
        assert_eq!(SearchField::resolve("name").unwrap(), SearchField::Name);
        assert_eq!(SearchField::resolve("age").unwrap(), SearchField::Age);
        assert_eq!(SearchField::resolve("email").unwrap(), SearchField::Email);
        assert_eq!(
            SearchField::resolve("birth_date").unwrap(),
            SearchField::BirthDate
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_trims() {
        assert_eq!(SearchField::resolve("  Email ").unwrap(), SearchField::Email);
        assert_eq!(
            SearchField::resolve("BIRTH_DATE").unwrap(),
            SearchField::BirthDate
        );
    }

    #[test]
    fn test_resolve_rejects_unknown_names() {
        for name in ["nome", "idade", "Name;DROP TABLE students", "", "id = 1"] {
            let err = SearchField::resolve(name).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_only_name_is_substring() {
        assert_eq!(SearchField::Name.comparison(), Comparison::Substring);
        for field in [
            SearchField::Id,
            SearchField::Age,
            SearchField::Email,
            SearchField::BirthDate,
        ] {
            assert_eq!(field.comparison(), Comparison::Exact);
        }
    }

    #[test]
    fn test_coerce_integers() {
        assert_eq!(SearchField::Id.coerce("7").unwrap(), SearchTerm::Id(7));
        assert_eq!(SearchField::Age.coerce(" 20 ").unwrap(), SearchTerm::Age(20));

        let err = SearchField::Age.coerce("twenty").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_coerce_dates() {
        assert_eq!(
            SearchField::BirthDate.coerce("2005-01-10").unwrap(),
            SearchTerm::BirthDate(NaiveDate::from_ymd_opt(2005, 1, 10).unwrap())
        );

        assert!(SearchField::BirthDate.coerce("10/01/2005").is_err());
        assert!(SearchField::BirthDate.coerce("2005-13-40").is_err());
    }

    #[test]
    fn test_coerce_strings_pass_through() {
        assert_eq!(
            SearchField::Name.coerce("Ana").unwrap(),
            SearchTerm::Name("Ana".to_string())
        );
        assert_eq!(
            SearchField::Email.coerce("ana@ex.com").unwrap(),
            SearchTerm::Email("ana@ex.com".to_string())
        );
    }
}
