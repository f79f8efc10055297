use std::path::Path;
use std::fs::File;
use std::io::Cursor;
use std::collections::HashMap;

use polars::prelude::*;

use crate::{Id3Error, Result};
use super::feature_struct::*;


/// Struct `Sample` holds a batch of categorical examples.
/// Each feature is stored as a column,
/// and the target labels are stored separately.
/// Row indices `0..n_sample` are fixed once the sample is constructed.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<String>,
    pub(super) target_name: String,
    pub(super) n_sample: usize,
}


impl Sample {
    /// Construct a `Sample` from feature columns and target labels.
    /// Every column must have exactly `target.len()` entries.
    pub fn from_columns<S: ToString>(
        features: Vec<Feature>,
        target_name: S,
        target: Vec<String>,
    ) -> Result<Self>
    {
        let target_name = target_name.to_string();
        let n_sample = target.len();

        let mut name_to_index = HashMap::with_capacity(features.len());
        for (i, feature) in features.iter().enumerate() {
            let name = feature.name();
            if feature.len() != n_sample {
                return Err(Id3Error::LengthMismatch {
                    column: name.to_string(),
                    expected: n_sample,
                    got: feature.len(),
                });
            }

            let duplicated = name == target_name
                || name_to_index.insert(name.to_string(), i).is_some();
            if duplicated {
                return Err(Id3Error::DuplicateColumn(name.to_string()));
            }
        }

        let sample = Self {
            name_to_index, features, target, target_name, n_sample,
        };
        Ok(sample)
    }


    /// Construct a `Sample` from an in-memory table.
    /// `header` names every column, including the `target` column.
    /// Empty or absent cells are treated as missing values,
    /// and a record longer than `header` is rejected.
    pub fn from_records<H, R, V>(
        header: &[H],
        records: &[R],
        target: &str,
    ) -> Result<Self>
        where H: AsRef<str>,
              R: AsRef<[V]>,
              V: AsRef<str>,
    {
        let target_pos = header.iter()
            .position(|name| name.as_ref() == target)
            .ok_or_else(|| Id3Error::UnknownFeature(target.to_string()))?;

        let mut columns = header.iter()
            .map(|name| Feature::new(name.as_ref()))
            .collect::<Vec<_>>();

        for (row, record) in records.iter().enumerate() {
            let record = record.as_ref();
            if record.len() > header.len() {
                return Err(Id3Error::RecordTooLong {
                    row, expected: header.len(), got: record.len(),
                });
            }
            for (j, column) in columns.iter_mut().enumerate() {
                let cell = record.get(j)
                    .map(|cell| -> &str { cell.as_ref() })
                    .filter(|cell| !cell.is_empty());
                column.append(cell);
            }
        }

        let target_column = columns.remove(target_pos);
        let labels = target_column.values()
            .enumerate()
            .map(|(row, y)| {
                y.map(str::to_string)
                    .ok_or(Id3Error::MissingTarget { row })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_columns(columns, target, labels)
    }


    /// Convert a `polars::DataFrame` into `Sample`.
    /// Every column is read as a string column,
    /// and the column named `target` becomes the target labels.
    pub fn from_dataframe(data: &DataFrame, target: &str) -> Result<Self> {
        let mut features = Vec::with_capacity(data.width());
        let mut labels = None;

        for series in data.get_columns() {
            let column = series.cast(&DataType::Utf8)?;
            let values = column.utf8()?;

            if series.name() == target {
                let ys = values.into_iter()
                    .enumerate()
                    .map(|(row, y)| {
                        y.map(str::to_string)
                            .ok_or(Id3Error::MissingTarget { row })
                    })
                    .collect::<Result<Vec<_>>>()?;
                labels = Some(ys);
            } else {
                let feature = Feature::from_values(
                    series.name(), values.into_iter()
                );
                features.push(feature);
            }
        }

        let labels = labels
            .ok_or_else(|| Id3Error::UnknownFeature(target.to_string()))?;
        Self::from_columns(features, target, labels)
    }


    /// Read a CSV format file to `Sample` type.
    /// Every cell is kept as the verbatim text token.
    pub fn from_csv<P>(file: P, has_header: bool, target: &str)
        -> Result<Self>
        where P: AsRef<Path>
    {
        let data = CsvReader::from_path(file.as_ref())?
            .has_header(has_header)
            .infer_schema(Some(0))
            .finish()?;
        Self::from_dataframe(&data, target)
    }


    /// Read CSV formatted bytes to `Sample` type.
    pub fn from_csv_bytes(bytes: &[u8], has_header: bool, target: &str)
        -> Result<Self>
    {
        let data = CsvReader::new(Cursor::new(bytes.to_vec()))
            .has_header(has_header)
            .infer_schema(Some(0))
            .finish()?;
        Self::from_dataframe(&data, target)
    }


    /// Convert `self` into a `polars::DataFrame`.
    /// The target column is placed last.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = self.features.iter()
            .map(|feature| {
                let values = feature.values().collect::<Vec<_>>();
                Series::new(feature.name(), values)
            })
            .collect::<Vec<_>>();
        columns.push(Series::new(&self.target_name, self.target.as_slice()));

        let data = DataFrame::new(columns)?;
        Ok(data)
    }


    /// Write `self` to `file` as CSV with a header row.
    pub fn to_csv<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let mut data = self.to_dataframe()?;
        let mut file = File::create(file)?;
        CsvWriter::new(&mut file).finish(&mut data)?;
        Ok(())
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.features.len())
    }


    /// Returns `true` if the sample has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature named `name`.
    pub fn feature(&self, name: &str) -> Result<&Feature> {
        self.name_to_index.get(name)
            .map(|&i| &self.features[i])
            .ok_or_else(|| Id3Error::UnknownFeature(name.to_string()))
    }


    /// Returns the feature names in column order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.features.iter()
            .map(Feature::name)
            .collect()
    }


    /// Returns the target labels.
    pub fn target(&self) -> &[String] {
        &self.target[..]
    }


    /// Returns the name of the target column.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }


    /// Returns a view of the `row`-th example.
    pub fn row(&self, row: usize) -> SampleRow<'_> {
        SampleRow { sample: self, row, }
    }
}


/// A borrowed view of one row of a [`Sample`].
#[derive(Debug, Clone, Copy)]
pub struct SampleRow<'a> {
    sample: &'a Sample,
    row: usize,
}


impl<'a> SampleRow<'a> {
    /// Returns the row index.
    pub fn index(&self) -> usize {
        self.row
    }


    /// Returns the value of `feature` at this row.
    pub fn get(&self, feature: &str) -> Option<&'a str> {
        self.sample.feature(feature).ok()?.value(self.row)
    }


    /// Returns the target label of this row.
    pub fn label(&self) -> Option<&'a str> {
        self.sample.target.get(self.row).map(String::as_str)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_csv_bytes_splits_target() {
        let bytes = b"\
            Outlook,Wind,Class\n\
            Sunny,Weak,No\n\
            Rain,Strong,No\n\
            Overcast,Weak,Yes";
        let sample = Sample::from_csv_bytes(bytes, true, "Class").unwrap();

        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.feature_names(), vec!["Outlook", "Wind"]);
        assert_eq!(sample.target(), &["No", "No", "Yes"]);
        assert_eq!(sample.row(1).get("Outlook"), Some("Rain"));
        assert_eq!(sample.row(2).label(), Some("Yes"));
    }

    #[test]
    fn from_records_marks_empty_cells_missing() {
        let sample = Sample::from_records(
            &["Outlook", "Class", "Wind"],
            &[["Sunny", "No", ""], ["Rain", "Yes", "Weak"]],
            "Class",
        ).unwrap();

        assert_eq!(sample.shape(), (2, 2));
        assert_eq!(sample.row(0).get("Wind"), None);
        assert_eq!(sample.row(1).get("Wind"), Some("Weak"));
    }

    #[test]
    fn long_records_are_rejected() {
        let err = Sample::from_records(
            &["Outlook", "Class"],
            &[vec!["Sunny", "No"], vec!["Rain", "Yes", "Weak"]],
            "Class",
        ).unwrap_err();
        assert!(matches!(
            err, Id3Error::RecordTooLong { row: 1, expected: 2, got: 3 }
        ));
    }

    #[test]
    fn csv_tokens_are_read_verbatim() {
        let bytes = b"Zone,Flag,Class\n007,True,Yes\n7,False,No\n1.50,True,Yes\n";
        let sample = Sample::from_csv_bytes(bytes, true, "Class").unwrap();

        let zones = (0..3).map(|i| sample.row(i).get("Zone"))
            .collect::<Vec<_>>();
        assert_eq!(zones, vec![Some("007"), Some("7"), Some("1.50")]);
        assert_eq!(sample.row(0).get("Flag"), Some("True"));
        assert_eq!(sample.feature("Zone").unwrap().distinct_value_count(), 3);
    }

    #[test]
    fn missing_target_column_is_reported() {
        let err = Sample::from_records(
            &["Outlook"], &[["Sunny"]], "Class"
        ).unwrap_err();
        assert!(matches!(err, Id3Error::UnknownFeature(name) if name == "Class"));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let outlook = Feature::from_values("Outlook", [Some("Sunny")]);
        let err = Sample::from_columns(
            vec![outlook], "Class", vec!["Yes".into(), "No".into()]
        ).unwrap_err();
        assert!(matches!(
            err, Id3Error::LengthMismatch { expected: 2, got: 1, .. }
        ));
    }
}
