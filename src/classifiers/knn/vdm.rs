use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use rayon::prelude::*;

/// How per-class probability differences are folded into one attribute
/// distance.
///
/// `Absolute` is the default because `Signed` puts every pair of values seen
/// in training at distance 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifferenceMode {
    /// `Σ_c |P(c|x) − P(c|y)|^q`
    #[default]
    Absolute,
    /// `(Σ_c (P(c|x) − P(c|y)))^q`, no absolute value taken. Any two values
    /// seen in training are at distance 0 under this mode, since both rows
    /// sum to 1.
    Signed,
}

/// `P(class | attribute = value)` for every value of one attribute, as a
/// row-major `domain_size × number_of_classes` matrix.
///
/// Values never seen in training keep an all-zero row.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalProbabilities {
    number_of_classes: usize,
    cells: Vec<f64>,
}

impl ConditionalProbabilities {
    pub fn domain_size(&self) -> usize {
        self.cells.len() / self.number_of_classes.max(1)
    }

    pub fn number_of_classes(&self) -> usize {
        self.number_of_classes
    }

    pub fn row(&self, value: usize) -> &[f64] {
        let start = value * self.number_of_classes;
        &self.cells[start..start + self.number_of_classes]
    }

    /// Difference between the class profiles of two values.
    pub fn value_pair_difference(
        &self,
        x: usize,
        y: usize,
        exponent: u32,
        mode: DifferenceMode,
    ) -> f64 {
        let q = exponent as i32;
        let diffs = self.row(x).iter().zip(self.row(y)).map(|(px, py)| px - py);
        match mode {
            DifferenceMode::Absolute => diffs.map(|d| d.abs().powi(q)).sum(),
            DifferenceMode::Signed => diffs.sum::<f64>().powi(q),
        }
    }
}

pub fn conditional_probability<I: Instance>(
    training: &[I],
    attribute: usize,
    domain_size: usize,
    number_of_classes: usize,
) -> ConditionalProbabilities {
    let mut cells = vec![0.0; domain_size * number_of_classes];
    let mut value_counts = vec![0usize; domain_size];

    for instance in training {
        let value = instance.value_at_index(attribute);
        value_counts[value] += 1;
        cells[value * number_of_classes + instance.class_value()] += 1.0;
    }

    for (value, &count) in value_counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let start = value * number_of_classes;
        for cell in &mut cells[start..start + number_of_classes] {
            *cell /= count as f64;
        }
    }

    ConditionalProbabilities {
        number_of_classes,
        cells,
    }
}

/// Difference between `query_value` and every training instance's value of
/// `attribute`, in training order.
pub fn value_difference<I: Instance>(
    training: &[I],
    probabilities: &ConditionalProbabilities,
    attribute: usize,
    query_value: usize,
    exponent: u32,
    mode: DifferenceMode,
) -> Vec<f64> {
    training
        .iter()
        .map(|instance| {
            probabilities.value_pair_difference(
                query_value,
                instance.value_at_index(attribute),
                exponent,
                mode,
            )
        })
        .collect()
}

/// Conditional probabilities of every attribute, derived once from a
/// training set and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VdmCache {
    attributes: Vec<ConditionalProbabilities>,
}

impl VdmCache {
    /// With `parallel`, attributes are processed as independent rayon tasks;
    /// the result is identical either way.
    pub fn new<I>(header: &InstanceHeader, training: &[I], parallel: bool) -> Self
    where
        I: Instance + Sync,
    {
        let number_of_classes = header.number_of_classes();
        let build = |attribute: usize| {
            conditional_probability(
                training,
                attribute,
                header.attribute_domain_size(attribute),
                number_of_classes,
            )
        };

        let attributes = if parallel {
            (0..header.number_of_attributes())
                .into_par_iter()
                .map(build)
                .collect()
        } else {
            (0..header.number_of_attributes()).map(build).collect()
        };
        Self { attributes }
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute(&self, attribute: usize) -> &ConditionalProbabilities {
        &self.attributes[attribute]
    }

    /// Distance from `query` to every training instance:
    /// `sqrt(Σ_a difference_a²)`, in training order.
    pub fn distances<I, Q>(
        &self,
        training: &[I],
        query: &Q,
        exponent: u32,
        mode: DifferenceMode,
        parallel: bool,
    ) -> Vec<f64>
    where
        I: Instance + Sync,
        Q: Instance + Sync + ?Sized,
    {
        let per_attribute = |attribute: usize| {
            value_difference(
                training,
                &self.attributes[attribute],
                attribute,
                query.value_at_index(attribute),
                exponent,
                mode,
            )
        };

        let vectors: Vec<Vec<f64>> = if parallel {
            (0..self.attributes.len())
                .into_par_iter()
                .map(per_attribute)
                .collect()
        } else {
            (0..self.attributes.len()).map(per_attribute).collect()
        };

        (0..training.len())
            .map(|i| vectors.iter().map(|v| v[i] * v[i]).sum::<f64>().sqrt())
            .collect()
    }
}
