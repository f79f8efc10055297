//! Errors raised while loading samples, growing trees, and predicting.
use polars::prelude::PolarsError;
use std::io;


/// A shorthand for `std::result::Result<T, Id3Error>`.
pub type Result<T> = std::result::Result<T, Id3Error>;


/// The error type of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Id3Error {
    /// A training row has no value for a feature under evaluation.
    #[error("row {row} has no value for feature `{feature}`")]
    MissingFeatureValue {
        /// Name of the feature.
        feature: String,
        /// Index of the offending row.
        row: usize,
    },


    /// An instance given to `predict` has no value
    /// for the feature tested at a decision node.
    #[error("the instance has no value for feature `{feature}`")]
    MissingInstanceValue {
        /// Name of the feature.
        feature: String,
    },


    /// A decision node has no branch for the observed value.
    #[error("unknown category `{value}` for feature `{feature}`")]
    UnknownCategory {
        /// Name of the feature tested at the node.
        feature: String,
        /// The value that was never seen while training.
        value: String,
    },


    /// The sample has no column of this name.
    #[error("the feature named `{0}` does not exist")]
    UnknownFeature(String),


    /// A target cell is empty.
    #[error("row {row} has no target label")]
    MissingTarget {
        /// Index of the offending row.
        row: usize,
    },


    /// A column length disagrees with the number of target labels.
    #[error("column `{column}` has {got} values, expected {expected}")]
    LengthMismatch {
        /// Name of the column.
        column: String,
        /// Number of target labels.
        expected: usize,
        /// Number of values in the column.
        got: usize,
    },


    /// A record has more cells than the header has names.
    #[error("record {row} has {got} cells, expected at most {expected}")]
    RecordTooLong {
        /// Index of the offending record.
        row: usize,
        /// Number of header names.
        expected: usize,
        /// Number of cells in the record.
        got: usize,
    },


    /// Two columns share the same name.
    #[error("the column named `{0}` appears more than once")]
    DuplicateColumn(String),


    /// A tree cannot be grown from zero rows.
    #[error("cannot grow a tree from an empty sample")]
    EmptySample,


    /// `predict` or `render` was called before `fit`.
    #[error("the decision tree is not fitted yet")]
    NotFitted,


    /// `SampleReader` is missing a required setting.
    #[error("invalid reader configuration: {0}")]
    ReaderConfig(&'static str),


    /// Errors from the CSV reader/writer.
    #[error(transparent)]
    Polars(#[from] PolarsError),


    /// I/O errors.
    #[error(transparent)]
    Io(#[from] io::Error),
}
