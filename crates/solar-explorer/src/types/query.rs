//! Sort query parameters

use serde::{Deserialize, Serialize};

use super::sort::{SortDirection, SortField};
use crate::error::Result;

/// `?sort=<field>&dir=asc|desc`
///
/// Both are optional. Without `sort` the records keep file order; without
/// `dir` the direction is descending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortQuery {
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
}

impl SortQuery {
    pub fn new(field: Option<SortField>, direction: SortDirection) -> Self {
        Self {
            sort: field.map(|f| f.as_str().to_string()),
            dir: Some(direction.as_str().to_string()),
        }
    }

    /// Validate into typed selectors; empty values count as absent
    pub fn parse(&self) -> Result<(Option<SortField>, SortDirection)> {
        let field = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(name) => Some(name.parse::<SortField>()?),
        };
        let direction = match self.dir.as_deref().map(str::trim) {
            None | Some("") => SortDirection::default(),
            Some(dir) => dir.parse::<SortDirection>()?,
        };
        Ok((field, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_defaults() {
        let (field, direction) = SortQuery::default().parse().unwrap();
        assert_eq!(field, None);
        assert_eq!(direction, SortDirection::Descending);
    }

    #[test]
    fn test_parse_values() {
        let query = SortQuery::new(Some(SortField::Eccentricity), SortDirection::Ascending);
        let (field, direction) = query.parse().unwrap();
        assert_eq!(field, Some(SortField::Eccentricity));
        assert_eq!(direction, SortDirection::Ascending);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let query = SortQuery {
            sort: Some("colour".to_string()),
            dir: None,
        };
        assert!(matches!(query.parse(), Err(Error::UnknownSortField(_))));

        let query = SortQuery {
            sort: Some("".to_string()),
            dir: Some("sideways".to_string()),
        };
        assert!(matches!(query.parse(), Err(Error::UnknownSortDirection(_))));
    }
}
