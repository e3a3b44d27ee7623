//! Fixed-mask retrain operator.

use super::report::{RetrainReport, RetrainTensorReport};
use crate::error::Result;
use crate::model::ParameterSet;
use crate::prune::spec::SparsitySpec;
use crate::prune::threshold::{build_mask, select_threshold, SparsityMask};
use crate::prune::tracked::{select_tracked, TrackedTensor};

/// Retrain-stage operator holding one frozen mask per tracked tensor.
///
/// Masks are derived once at construction from |W| alone; ADMM state plays
/// no part. `apply_mask` must run after every optimizer step, since the
/// pruned elements keep receiving primary-loss gradients.
///
/// # Example
///
/// ```
/// use podar::model::NamedParameters;
/// use podar::prune::{RetrainOperator, SparsitySpec};
/// use podar::Tensor;
///
/// let mut params = NamedParameters::new();
/// params.insert("fc.weight", Tensor::from_vec(vec![0.1, 0.9, -0.2, 0.05], true));
/// let spec = SparsitySpec::from_pairs([("fc.weight", 0.5)]);
///
/// let retrain = RetrainOperator::new(&params, &spec)?;
/// retrain.apply_mask(&mut params)?;
/// assert_eq!(params.get("fc.weight").map(|t| t.data().to_vec()),
///            Some(vec![0.0, 0.9, -0.2, 0.0]));
/// # Ok::<(), podar::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RetrainOperator {
    tracked: Vec<TrackedTensor>,
    masks: Vec<SparsityMask>,
}

impl RetrainOperator {
    /// Derive a mask for every parameter named in `spec` from |W|.
    pub fn new<P: ParameterSet + ?Sized>(params: &P, spec: &SparsitySpec) -> Result<Self> {
        let tracked = select_tracked(params, spec)?;

        let mut masks = Vec::with_capacity(tracked.len());
        for t in &tracked {
            let w = t.resolve(params)?;
            let importance = w.data().mapv(f32::abs);
            let threshold = select_threshold(&importance, t.fraction);
            let mask = build_mask(&importance, &t.shape, threshold)?;
            tracing::debug!(
                tensor = %t.name,
                threshold,
                kept = mask.nnz(),
                "retrain mask frozen"
            );
            masks.push(mask);
        }

        tracing::info!(tensors = tracked.len(), "retrain operator tracking parameters");

        Ok(Self { tracked, masks })
    }

    /// Multiply every tracked tensor by its mask in place.
    ///
    /// Idempotent: the set of zeroed elements never changes. All tensors are
    /// validated before any is written.
    pub fn apply_mask<P: ParameterSet + ?Sized>(&self, params: &mut P) -> Result<()> {
        for t in &self.tracked {
            t.resolve(&*params)?;
        }
        for (t, mask) in self.tracked.iter().zip(&self.masks) {
            mask.apply(t.resolve_mut(params)?)?;
        }
        Ok(())
    }

    /// Count exact zeros in the current weights.
    pub fn report<P: ParameterSet + ?Sized>(&self, params: &P) -> Result<RetrainReport> {
        let tensors = self
            .tracked
            .iter()
            .map(|t| {
                let w = t.resolve(params)?;
                Ok(RetrainTensorReport {
                    name: t.name.clone(),
                    pruned: w.data().iter().filter(|&&v| v == 0.0).count(),
                    numel: t.numel,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RetrainReport::from_tensors(tensors))
    }

    /// Count zeros and emit them as `info` events.
    pub fn print_info<P: ParameterSet + ?Sized>(&self, params: &P) -> Result<RetrainReport> {
        let report = self.report(params)?;
        for (i, t) in report.tensors.iter().enumerate() {
            tracing::info!(
                index = i,
                tensor = %t.name,
                pruned = t.pruned,
                numel = t.numel,
                pruned_pct = t.pruned_percent(),
                "retrain tensor"
            );
        }
        tracing::info!(
            pruned = report.total_pruned,
            numel = report.total_elements,
            pruned_pct = report.pruned_percent(),
            "retrain total"
        );
        Ok(report)
    }

    /// Tracked tensors in enumeration order
    pub fn tracked(&self) -> &[TrackedTensor] {
        &self.tracked
    }

    /// Frozen mask for `name`
    pub fn mask(&self, name: &str) -> Option<&SparsityMask> {
        self.tracked
            .iter()
            .position(|t| t.name == name)
            .map(|i| &self.masks[i])
    }

    /// Elements the masks force to zero, across all tensors
    pub fn pruned_count(&self) -> usize {
        self.masks.iter().map(SparsityMask::num_zeros).sum()
    }
}
