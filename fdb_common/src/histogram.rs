/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::fmt;
use serde::{Serialize,Deserialize};
use crate::MinMaxAvg;

/// summary statistics of all values that were added to a [`Histogram`]
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct HistogramStats {
    pub n: usize,
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

/// a fixed-bucket histogram over [val_min..val_max) that also keeps running mean/variance of the
/// raw values (Welford). Values outside the range are counted in the first or last bucket, but
/// enter the stats unclamped
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct Histogram {
    pub num_buckets: usize,
    pub val_min: f64,
    pub val_max: f64,

    #[serde(skip)] counts: Vec<u64>,
    #[serde(skip)] mma: MinMaxAvg,
    #[serde(skip)] m2: f64, // sum of squared deviations from the running mean
}

impl Histogram {
    pub fn new (num_buckets: usize, val_min: f64, val_max: f64)->Self {
        let num_buckets = num_buckets.max(1);
        Histogram { num_buckets, val_min, val_max, counts: vec![0; num_buckets], mma: MinMaxAvg::new(), m2: 0.0 }
    }

    pub fn add (&mut self, v: f64) {
        if !v.is_finite() { return }

        if self.counts.len() != self.num_buckets { // we got deserialized
            self.counts = vec![0; self.num_buckets.max(1)];
        }
        let idx = self.bucket_index(v);
        self.counts[idx] += 1;

        let prev_mean = if self.mma.is_empty() { v } else { self.mma.avg };
        self.mma.add(v);
        self.m2 += (v - prev_mean) * (v - self.mma.avg);
    }

    fn bucket_index (&self, v: f64)->usize {
        let n = self.counts.len();
        let width = self.val_max - self.val_min;
        if width <= 0.0 || v <= self.val_min { return 0 }

        let i = ((v - self.val_min) / width * n as f64) as usize;
        i.min( n-1)
    }

    pub fn len (&self)->usize { self.mma.n }
    pub fn is_empty (&self)->bool { self.mma.is_empty() }

    pub fn counts (&self)->&[u64] { self.counts.as_slice() }

    /// lower bound of bucket `idx`
    pub fn bucket_start (&self, idx: usize)->f64 {
        self.val_min + (self.val_max - self.val_min) * idx as f64 / self.num_buckets as f64
    }

    /// None if nothing was added yet. Stddev is the population standard deviation
    pub fn stats (&self)->Option<HistogramStats> {
        if self.mma.is_empty() { return None }

        let n = self.mma.n;
        Some( HistogramStats {
            n,
            mean: self.mma.avg,
            stddev: (self.m2 / n as f64).sqrt(),
            min: self.mma.min,
            max: self.mma.max
        })
    }
}

impl Default for Histogram {
    fn default()->Self { Histogram::new( 10, 0.0, 10000.0) }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Histogram(")?;
        for (i,c) in self.counts.iter().enumerate() {
            if *c > 0 { write!( f, " [{:.0}]:{}", self.bucket_start(i), c)?; }
        }
        write!( f, " )")
    }
}
