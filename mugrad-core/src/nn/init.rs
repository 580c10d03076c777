use crate::error::MugradError;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// How freshly created parameters are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

/// A validated, ready-to-sample distribution built from an [`Init`].
#[derive(Debug, Clone)]
pub enum Sampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl Distribution<f64> for Sampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Sampler::Uniform(d) => d.sample(rng),
            Sampler::Normal(d) => d.sample(rng),
        }
    }
}

impl Init {
    pub fn validate(&self) -> Result<(), MugradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(MugradError::InvalidConfig(format!(
                        "uniform init needs finite low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !(mean.is_finite() && std.is_finite() && std >= 0.0) {
                    return Err(MugradError::InvalidConfig(format!(
                        "normal init needs finite mean and std >= 0, got mean={} std={}",
                        mean, std
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validates this init and builds its sampler.
    pub fn sampler(&self) -> Result<Sampler, MugradError> {
        self.validate()?;
        match *self {
            Init::Uniform { low, high } => Ok(Sampler::Uniform(Uniform::new(low, high))),
            Init::Normal { mean, std } => Normal::new(mean, std)
                .map(Sampler::Normal)
                .map_err(|e| MugradError::InvalidConfig(format!("normal init: {}", e))),
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
