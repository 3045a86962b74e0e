use serde::{Deserialize, Serialize};

/// Identifier used to correlate a result with its time display
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DestinationId(pub String);

impl DestinationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DestinationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A city, temple or beach - the only thing a search ever returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// IANA zone name; `None` means no local time is shown
    pub time_zone: Option<String>,
}

/// Pure grouping of cities. Countries never show up in results themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub cities: Vec<Destination>,
}

/// The whole loaded dataset. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub countries: Vec<Country>,
    pub temples: Vec<Destination>,
    pub beaches: Vec<Destination>,
}

impl Catalog {
    /// Every country's cities, country order then city order
    pub fn cities(&self) -> impl Iterator<Item = &Destination> {
        self.countries.iter().flat_map(|country| country.cities.iter())
    }

    /// Cities, then temples, then beaches
    pub fn all_destinations(&self) -> impl Iterator<Item = &Destination> {
        self.cities().chain(self.temples.iter()).chain(self.beaches.iter())
    }

    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            countries: self.countries.len(),
            cities: self.cities().count(),
            temples: self.temples.len(),
            beaches: self.beaches.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub countries: usize,
    pub cities: usize,
    pub temples: usize,
    pub beaches: usize,
}

impl std::fmt::Display for CatalogCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} countries ({} cities), {} temples, {} beaches",
            self.countries, self.cities, self.temples, self.beaches
        )
    }
}

/// Collection a category alias selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Beach,
    Temple,
    Country,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Beach => write!(f, "beach"),
            Category::Temple => write!(f, "temple"),
            Category::Country => write!(f, "country"),
        }
    }
}

/// A normalized search request. Only `query::normalize` builds these,
/// so a `Query` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    /// Trimmed, lowercased input; the substring key in free-text mode
    pub key: String,
    /// `None` means free-text search
    pub category: Option<Category>,
}

/// Ordered output of one search; rebuilt every time
pub type ResultSet = Vec<Destination>;

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(id: &str, name: &str) -> Destination {
        Destination {
            id: id.into(),
            name: name.to_string(),
            description: String::new(),
            image_url: String::new(),
            time_zone: None,
        }
    }

    #[test]
    fn test_cities_flatten_in_order() {
        let catalog = Catalog {
            countries: vec![
                Country {
                    name: "Japan".into(),
                    cities: vec![dest("1", "Tokyo"), dest("2", "Kyoto")],
                },
                Country {
                    name: "Brazil".into(),
                    cities: vec![dest("3", "Rio de Janeiro")],
                },
            ],
            temples: vec![dest("4", "Angkor Wat")],
            beaches: vec![dest("5", "Bora Bora")],
        };

        let names: Vec<_> = catalog.all_destinations().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Tokyo", "Kyoto", "Rio de Janeiro", "Angkor Wat", "Bora Bora"]);

        let counts = catalog.counts();
        assert_eq!(counts.countries, 2);
        assert_eq!(counts.cities, 3);
        assert_eq!(counts.to_string(), "2 countries (3 cities), 1 temples, 1 beaches");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.all_destinations().count(), 0);
    }
}
