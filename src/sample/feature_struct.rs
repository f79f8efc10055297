use std::collections::HashSet;
use std::ops::Index;


/// A categorical column of a [`Sample`](crate::Sample).
/// A `None` entry represents a missing cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    name: String,
    values: Vec<Option<String>>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            values: Vec::new(),
        }
    }


    /// Construct a feature from its name and the column values.
    pub fn from_values<T, I, V>(name: T, values: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = Option<V>>,
              V: Into<String>,
    {
        let values = values.into_iter()
            .map(|v| v.map(Into::into))
            .collect();
        Self { name: name.to_string(), values, }
    }


    /// Returns the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Append a value at the end of this column.
    pub fn append<V: Into<String>>(&mut self, value: Option<V>) {
        self.values.push(value.map(Into::into));
    }


    /// Returns the value at `row`.
    /// `None` if the cell is missing or `row` is out of range.
    #[inline]
    pub fn value(&self, row: usize) -> Option<&str> {
        self.values.get(row)?.as_deref()
    }


    /// Returns an iterator over the column values.
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.values.iter().map(Option::as_deref)
    }


    /// Returns the number of rows, including missing cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns the number of distinct non-missing values.
    pub fn distinct_value_count(&self) -> usize {
        self.values.iter()
            .flatten()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }
}


impl Index<usize> for Feature {
    type Output = Option<String>;
    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}
