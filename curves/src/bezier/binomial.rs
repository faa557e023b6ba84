/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

use once_cell::sync::Lazy;

/// Binomial coefficients for every degree up to `BINOMIAL_TABLE_DEGREE`
static BINOMIAL_TABLE: Lazy<BinomialTable> = Lazy::new(|| BinomialTable::with_degree(BINOMIAL_TABLE_DEGREE));

///
/// Pascal's triangle up to a fixed degree
///
#[derive(Clone, Debug, PartialEq)]
pub struct BinomialTable {
    rows: Vec<Vec<f64>>,
}

impl BinomialTable {
    ///
    /// Builds the rows of Pascal's triangle for degrees 0..=max_degree
    ///
    pub fn with_degree(max_degree: usize) -> BinomialTable {
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(max_degree + 1);
        rows.push(vec![1.0]);

        for degree in 1..=max_degree {
            let previous = &rows[degree - 1];
            let mut row = Vec::with_capacity(degree + 1);

            row.push(1.0);
            for k in 1..degree {
                row.push(previous[k - 1] + previous[k]);
            }
            row.push(1.0);

            rows.push(row);
        }

        BinomialTable { rows }
    }

    ///
    /// The largest degree stored in this table
    ///
    #[inline]
    pub fn max_degree(&self) -> usize {
        self.rows.len() - 1
    }

    ///
    /// Retrieves the coefficients for a particular degree, if they're in the table
    ///
    #[inline]
    pub fn row(&self, degree: usize) -> Option<&[f64]> {
        self.rows.get(degree).map(|row| row.as_slice())
    }

    ///
    /// Returns the binomial coefficient `n choose k`, computing it directly if `n` is beyond the end of the table
    ///
    pub fn coefficient(&self, n: usize, k: usize) -> f64 {
        if k > n {
            0.0
        } else if let Some(row) = self.row(n) {
            row[k]
        } else {
            binomial_coefficient(n, k)
        }
    }
}

///
/// Computes `n choose k` using the multiplicative formula
///
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    let k = k.min(n - k);
    (0..k).fold(1.0, |coefficient, i| coefficient * ((n - i) as f64) / ((i + 1) as f64))
}

///
/// Returns `n choose k`, using the shared precomputed table where possible
///
#[inline]
pub fn binomial(n: usize, k: usize) -> f64 {
    BINOMIAL_TABLE.coefficient(n, k)
}
