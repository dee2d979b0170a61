//! Fidelity metrics between a cover and its stego counterpart.
//!
//! All differencing happens on signed 64-bit integers, never on raw
//! `u8` values. A metric whose denominator is zero is reported as
//! [`DegenerateMetric`] instead of infinity or NaN; the other metrics in
//! the same report are still computed.
//!
//! PSNR here is the linear ratio `W·H·max(cover)² / Σ(cover-stego)²`,
//! not the usual decibel form.

use crate::container::PixelContainer;
use crate::error::{DegenerateMetric, Error, Result};
use serde::{Serialize, Serializer};
use std::fmt::Write as _;

/// Outcome of a single metric.
pub type MetricResult = std::result::Result<f64, DegenerateMetric>;

/// Scores comparing a cover and stego container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Largest per-channel absolute difference.
    pub max_abs_deviation: u8,
    /// Squared error per pixel, `Σ(cover-stego)² / (W·H)`.
    #[serde(serialize_with = "serialize_metric")]
    pub mse: MetricResult,
    /// Normalized mean squared error, `Σ(cover-stego)² / Σcover²`.
    #[serde(serialize_with = "serialize_metric")]
    pub nmse: MetricResult,
    /// Signal-to-noise ratio, `1 / NMSE`.
    #[serde(serialize_with = "serialize_metric")]
    pub snr: MetricResult,
    /// Peak signal-to-noise ratio (linear).
    #[serde(serialize_with = "serialize_metric")]
    pub psnr: MetricResult,
    /// Universal quality index in `[-1, 1]`.
    #[serde(serialize_with = "serialize_metric")]
    pub uqi: MetricResult,
}

impl MetricsReport {
    /// Human-readable multi-line summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Max absolute deviation: {}", self.max_abs_deviation);
        for (name, value) in [
            ("MSE", &self.mse),
            ("NMSE", &self.nmse),
            ("SNR", &self.snr),
            ("PSNR", &self.psnr),
            ("UQI", &self.uqi),
        ] {
            let label = format!("{}:", name);
            let _ = match value {
                Ok(v) => writeln!(out, "{:<23} {}", label, v),
                Err(_) => writeln!(out, "{:<23} undefined (zero denominator)", label),
            };
        }
        out
    }
}

fn serialize_metric<S>(value: &MetricResult, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.as_ref().ok().serialize(serializer)
}

/// Aggregate sums over a cover/stego pair, from which every metric is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Distortion {
    height: usize,
    width: usize,
    values: usize,
    max_abs_deviation: u8,
    max_cover: u8,
    sum_sq_diff: u64,
    sum_sq_cover: u64,
    mean_cover: f64,
    mean_stego: f64,
    var_cover: f64,
    var_stego: f64,
    covariance: f64,
}

impl Distortion {
    /// Measure a cover/stego pair. Shapes must match.
    pub fn measure(cover: &PixelContainer, stego: &PixelContainer) -> Result<Self> {
        if cover.shape() != stego.shape() {
            return Err(Error::DimensionMismatch {
                cover: cover.shape(),
                stego: stego.shape(),
            });
        }

        let c = cover.as_raw();
        let s = stego.as_raw();
        let values = c.len();

        let mut max_abs_deviation = 0u8;
        let mut max_cover = 0u8;
        let mut sum_sq_diff = 0u64;
        let mut sum_sq_cover = 0u64;
        let mut sum_cover = 0u64;
        let mut sum_stego = 0u64;

        for (&a, &b) in c.iter().zip(s) {
            let diff = i64::from(a) - i64::from(b);
            max_abs_deviation = max_abs_deviation.max(diff.unsigned_abs() as u8);
            max_cover = max_cover.max(a);
            sum_sq_diff += (diff * diff) as u64;
            sum_sq_cover += u64::from(a) * u64::from(a);
            sum_cover += u64::from(a);
            sum_stego += u64::from(b);
        }

        let (mean_cover, mean_stego) = if values == 0 {
            (0.0, 0.0)
        } else {
            let n = values as f64;
            (sum_cover as f64 / n, sum_stego as f64 / n)
        };

        let mut var_cover = 0.0;
        let mut var_stego = 0.0;
        let mut covariance = 0.0;
        for (&a, &b) in c.iter().zip(s) {
            let dc = f64::from(a) - mean_cover;
            let ds = f64::from(b) - mean_stego;
            var_cover += dc * dc;
            var_stego += ds * ds;
            covariance += dc * ds;
        }
        if values > 0 {
            let n = values as f64;
            var_cover /= n;
            var_stego /= n;
            covariance /= n;
        }

        Ok(Self {
            height: cover.height(),
            width: cover.width(),
            values,
            max_abs_deviation,
            max_cover,
            sum_sq_diff,
            sum_sq_cover,
            mean_cover,
            mean_stego,
            var_cover,
            var_stego,
            covariance,
        })
    }

    pub fn max_abs_deviation(&self) -> u8 {
        self.max_abs_deviation
    }

    pub fn mse(&self) -> MetricResult {
        let pixels = self.height * self.width;
        if pixels == 0 {
            return Err(DegenerateMetric { metric: "MSE" });
        }
        Ok(self.sum_sq_diff as f64 / pixels as f64)
    }

    pub fn nmse(&self) -> MetricResult {
        if self.sum_sq_cover == 0 {
            return Err(DegenerateMetric { metric: "NMSE" });
        }
        Ok(self.sum_sq_diff as f64 / self.sum_sq_cover as f64)
    }

    pub fn snr(&self) -> MetricResult {
        let nmse = self.nmse().map_err(|_| DegenerateMetric { metric: "SNR" })?;
        if nmse == 0.0 {
            return Err(DegenerateMetric { metric: "SNR" });
        }
        Ok(1.0 / nmse)
    }

    pub fn psnr(&self) -> MetricResult {
        if self.sum_sq_diff == 0 {
            return Err(DegenerateMetric { metric: "PSNR" });
        }
        let peak = f64::from(self.max_cover);
        Ok((self.height * self.width) as f64 * peak * peak / self.sum_sq_diff as f64)
    }

    pub fn uqi(&self) -> MetricResult {
        let denominator = (self.var_cover + self.var_stego)
            * (self.mean_cover * self.mean_cover + self.mean_stego * self.mean_stego);
        if self.values == 0 || denominator == 0.0 {
            return Err(DegenerateMetric { metric: "UQI" });
        }
        Ok(4.0 * self.covariance * self.mean_cover * self.mean_stego / denominator)
    }

    /// Collect every metric into a report.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            max_abs_deviation: self.max_abs_deviation,
            mse: self.mse(),
            nmse: self.nmse(),
            snr: self.snr(),
            psnr: self.psnr(),
            uqi: self.uqi(),
        }
    }
}

/// Compute every metric for a cover/stego pair.
pub fn compute(cover: &PixelContainer, stego: &PixelContainer) -> Result<MetricsReport> {
    let report = Distortion::measure(cover, stego)?.report();

    for value in [&report.mse, &report.nmse, &report.snr, &report.psnr, &report.uqi] {
        if let Err(e) = value {
            log::warn!("{}", e);
        }
    }
    Ok(report)
}
