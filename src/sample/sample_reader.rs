use std::path::Path;

use crate::{Id3Error, Result};
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use miniid3::SampleReader;
/// let sample = SampleReader::default()
///     .file("clean.csv")
///     .has_header(true)
///     .target_feature("Class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: true,
            target: None,
        }
    }
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true`.
    /// Without a header, polars names the columns
    /// `column_1`, `column_2`, ...
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns the [`Sample`].
    /// This method consumes `self`.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or(Id3Error::ReaderConfig("the file name is not set"))?;
        let target = self.target
            .ok_or(Id3Error::ReaderConfig(
                "target column is not specified, \
                use `SampleReader::target_feature`"
            ))?;

        tracing::debug!(
            file = %file.as_ref().display(),
            target = target.as_ref(),
            "reading sample"
        );
        Sample::from_csv(file, self.has_header, target.as_ref())
    }
}
