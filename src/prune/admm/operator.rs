//! ADMM sparsity operator.

use super::config::AdmmConfig;
use super::report::{
    AdmmReport, AdmmTensorReport, RefreshRecord, RefreshState, UpdateOutcome, SMALL_WEIGHT_EPS,
};
use crate::error::{Error, Result};
use crate::model::ParameterSet;
use crate::prune::spec::SparsitySpec;
use crate::prune::threshold::{build_mask, select_threshold};
use crate::prune::tracked::{select_tracked, TrackedTensor};
use crate::Tensor;
use ndarray::Array1;

/// ADMM operator holding the auxiliary (Z) and dual (U) variables of every
/// tracked tensor.
///
/// W stays owned by the model; each call receives the parameter set and
/// re-validates identifier and shape before reading or writing.
///
/// Call order expected from the training loop:
/// - `update(epoch)` once per epoch
/// - `loss_grad()` once per step, after backward and before the optimizer
///   step
///
/// # Example
///
/// ```
/// use podar::model::NamedParameters;
/// use podar::prune::{AdmmConfig, AdmmOperator, SparsitySpec};
/// use podar::Tensor;
///
/// let mut params = NamedParameters::new();
/// params.insert("fc.weight", Tensor::from_vec(vec![0.1, 0.9, -0.2, 0.05], true));
/// let spec = SparsitySpec::from_pairs([("fc.weight", 0.5)]);
///
/// let mut admm = AdmmOperator::new(&params, &spec, AdmmConfig::default().with_rho(0.1))?;
/// let outcome = admm.update(&params, 0)?;
/// assert!(outcome.is_refreshed());
/// assert_eq!(admm.z("fc.weight").map(|z| z.to_vec()), Some(vec![0.0, 0.9, -0.2, 0.0]));
/// # Ok::<(), podar::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdmmOperator {
    tracked: Vec<TrackedTensor>,
    z: Vec<Array1<f32>>,
    u: Vec<Array1<f32>>,
    config: AdmmConfig,
    state: RefreshState,
    last_refresh_epoch: Option<usize>,
}

impl AdmmOperator {
    /// Track every parameter named in `spec`.
    ///
    /// Z starts as a copy of W and U as zeros.
    pub fn new<P: ParameterSet + ?Sized>(
        params: &P,
        spec: &SparsitySpec,
        config: AdmmConfig,
    ) -> Result<Self> {
        config.validate()?;
        let tracked = select_tracked(params, spec)?;

        let mut z = Vec::with_capacity(tracked.len());
        let mut u = Vec::with_capacity(tracked.len());
        for t in &tracked {
            let w = t.resolve(params)?;
            z.push(w.data().clone());
            u.push(Array1::zeros(t.numel));
        }

        tracing::info!(
            tensors = tracked.len(),
            rho = config.rho,
            update_period = config.update_period,
            "ADMM operator tracking parameters"
        );

        Ok(Self {
            tracked,
            z,
            u,
            config,
            state: RefreshState::Stale,
            last_refresh_epoch: None,
        })
    }

    /// Refresh Z and U if `epoch` is a multiple of the update period.
    ///
    /// For each tracked tensor:
    /// 1. importance = |W + U|
    /// 2. mask = importance > k-th smallest importance
    /// 3. Z = (W + U) * mask
    /// 4. U = U + W - Z, skipped at epoch 0 so the first refresh only projects
    ///
    /// All tensors are validated before any Z or U is written.
    pub fn update<P: ParameterSet + ?Sized>(
        &mut self,
        params: &P,
        epoch: usize,
    ) -> Result<UpdateOutcome> {
        if epoch % self.config.update_period != 0 {
            self.state = RefreshState::Stale;
            tracing::trace!(epoch, "ADMM update skipped");
            return Ok(UpdateOutcome::Stale);
        }

        let weights = self.resolve_all(params)?;

        let mut records = Vec::with_capacity(self.tracked.len());
        for (i, w) in weights.into_iter().enumerate() {
            let t = &self.tracked[i];
            let w = w.data();

            let w_plus_u = w + &self.u[i];
            let importance = w_plus_u.mapv(f32::abs);
            let threshold = select_threshold(&importance, t.fraction);
            let mask = build_mask(&importance, &t.shape, threshold)?;

            self.z[i] = &w_plus_u * mask.values();

            if epoch > 0 {
                let u = &mut self.u[i];
                *u += w;
                *u -= &self.z[i];
            }

            let target_mask_sum: f64 = self.u[i]
                .iter()
                .zip(self.z[i].iter())
                .zip(mask.values().iter())
                .map(|((&u, &z), &m)| f64::from((u - z).abs() * (1.0 - m)))
                .sum();

            tracing::debug!(
                tensor = %t.name,
                threshold,
                kept = mask.nnz(),
                target_mask_sum,
                "ADMM refreshed Z/U"
            );

            records.push(RefreshRecord {
                name: t.name.clone(),
                threshold,
                kept: mask.nnz(),
                target_mask_sum,
            });
        }

        self.state = RefreshState::Refreshed;
        self.last_refresh_epoch = Some(epoch);
        tracing::info!(epoch, tensors = records.len(), "ADMM update complete");

        Ok(UpdateOutcome::Refreshed(records))
    }

    /// Add the penalty gradient ρ(W − Z + U) to each tracked gradient buffer.
    ///
    /// Accumulates on top of the primary loss gradient; a missing buffer is
    /// treated as zero. Tensors with `requires_grad == false` are left alone.
    pub fn loss_grad<P: ParameterSet + ?Sized>(&self, params: &mut P) -> Result<()> {
        for t in &self.tracked {
            let w = t.resolve(&*params)?;
            if let Some(grad) = w.grad() {
                if grad.len() != t.numel {
                    return Err(Error::ShapeMismatch {
                        name: format!("{}.grad", t.name),
                        expected: t.shape.clone(),
                        actual: vec![grad.len()],
                    });
                }
            }
        }

        let rho = self.config.rho;
        for (i, t) in self.tracked.iter().enumerate() {
            let w = t.resolve_mut(params)?;
            if !w.requires_grad() {
                continue;
            }
            let mut penalty = w.data() - &self.z[i];
            penalty += &self.u[i];
            penalty *= rho;
            w.accumulate_grad(penalty);
        }
        Ok(())
    }

    /// Compute convergence diagnostics against the current weights.
    pub fn report<P: ParameterSet + ?Sized>(&self, params: &P) -> Result<AdmmReport> {
        let weights = self.resolve_all(params)?;

        let tensors = weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                let t = &self.tracked[i];
                let w_z_error: f64 = w
                    .data()
                    .iter()
                    .zip(self.z[i].iter())
                    .map(|(&w, &z)| {
                        let d = f64::from(w - z);
                        d * d
                    })
                    .sum();
                AdmmTensorReport {
                    name: t.name.clone(),
                    shape: t.shape.clone(),
                    numel: t.numel,
                    w_z_error,
                    zero_count: self.z[i].iter().filter(|&&z| z == 0.0).count(),
                    small_count: w.data().iter().filter(|&&v| v.abs() < SMALL_WEIGHT_EPS).count(),
                }
            })
            .collect();

        Ok(AdmmReport::from_tensors(self.config.rho, tensors))
    }

    /// Compute diagnostics and emit them as `info` events.
    pub fn print_info<P: ParameterSet + ?Sized>(&self, params: &P) -> Result<AdmmReport> {
        let report = self.report(params)?;
        for (i, t) in report.tensors.iter().enumerate() {
            tracing::info!(
                index = i,
                tensor = %t.name,
                shape = ?t.shape,
                w_z_error = t.w_z_error,
                target_sparsity = t.target_sparsity(),
                small_sparsity = t.small_sparsity(),
                "ADMM tensor"
            );
        }
        tracing::info!(
            rho = report.rho,
            w_z_error = report.total_w_z_error,
            target_sparsity = report.target_sparsity(),
            small_sparsity = report.small_sparsity(),
            "ADMM total"
        );
        Ok(report)
    }

    /// Tracked tensors in enumeration order
    pub fn tracked(&self) -> &[TrackedTensor] {
        &self.tracked
    }

    /// Auxiliary variable Z for `name`
    pub fn z(&self, name: &str) -> Option<&Array1<f32>> {
        self.position(name).map(|i| &self.z[i])
    }

    /// Dual variable U for `name`
    pub fn u(&self, name: &str) -> Option<&Array1<f32>> {
        self.position(name).map(|i| &self.u[i])
    }

    /// Penalty coefficient ρ
    pub fn rho(&self) -> f32 {
        self.config.rho
    }

    /// Epochs between refreshes
    pub fn update_period(&self) -> usize {
        self.config.update_period
    }

    /// State after the last `update` call
    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Epoch of the most recent refresh
    pub fn last_refresh_epoch(&self) -> Option<usize> {
        self.last_refresh_epoch
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tracked.iter().position(|t| t.name == name)
    }

    fn resolve_all<'a, P: ParameterSet + ?Sized>(&self, params: &'a P) -> Result<Vec<&'a Tensor>> {
        self.tracked.iter().map(|t| t.resolve(params)).collect()
    }
}
