//! Defines the [`Classifier`] trait.
use rayon::prelude::*;

use crate::{Instance, Result, Sample};


/// A trait that defines the behavor of a fitted classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of the given instance.
    fn predict<I>(&self, instance: &I) -> Result<String>
        where I: Instance + ?Sized;


    /// Predicts the labels of every row of `sample`, in row order.
    /// Rows are evaluated in parallel.
    /// If some rows fail, the error of the smallest such row is returned.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<String>>
        where Self: Sync
    {
        let n_sample = sample.shape().0;
        let predictions = (0..n_sample).into_par_iter()
            .map(|row| self.predict(&sample.row(row)))
            .collect::<Vec<_>>();

        predictions.into_iter().collect()
    }


    /// Returns the fraction of rows of `sample`
    /// whose prediction equals the target label.
    fn accuracy(&self, sample: &Sample) -> Result<f64>
        where Self: Sync
    {
        let n_sample = sample.shape().0;
        if n_sample == 0 { return Ok(0f64); }

        let correct = self.predict_all(sample)?
            .into_iter()
            .zip(sample.target())
            .filter(|(p, y)| p == *y)
            .count();

        Ok(correct as f64 / n_sample as f64)
    }
}
