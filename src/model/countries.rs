use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CountryId(pub usize);

/// A university as listed under its country, before it gets tracked.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryEntry {
    pub name: String,
    pub score: f64,
    pub rank: i64,
}

/// Entries of a single ranking year grouped by country. Countries are kept
/// in the order they were first seen.
#[derive(Debug)]
pub struct CountryGroups {
    pub year: i32,
    countries: Vec<String>,
    index: HashMap<String, CountryId>,
    entries: Vec<Vec<CountryEntry>>,
}

#[allow(dead_code)]
impl CountryGroups {
    pub fn new(year: i32) -> CountryGroups {
        CountryGroups {
            year,
            countries: Vec::new(),
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, country: &str, entry: CountryEntry) -> CountryId {
        let id = match self.index.get(country) {
            Some(&id) => id,
            None => {
                let id = CountryId(self.countries.len());
                self.countries.push(country.to_owned());
                self.index.insert(country.to_owned(), id);
                self.entries.push(Vec::new());
                id
            }
        };
        self.entries[id.0].push(entry);
        id
    }

    pub fn all_countries(&self) -> Vec<CountryId> {
        (0..self.countries.len()).map(CountryId).collect()
    }

    pub fn id_of(&self, country: &str) -> Option<CountryId> {
        self.index.get(country).cloned()
    }

    pub fn country(&self, CountryId(country): CountryId) -> &str {
        &self.countries[country]
    }

    pub fn entries_for(&self, CountryId(country): CountryId) -> &[CountryEntry] {
        &self.entries[country]
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Iterate over `(country, entry)` pairs, country by country.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryEntry)> {
        self.countries
            .iter()
            .zip(&self.entries)
            .flat_map(|(c, es)| es.iter().map(move |e| (c.as_str(), e)))
    }
}
