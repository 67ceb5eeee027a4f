use std::collections::{BTreeMap, HashMap};

use crate::analyzer::Tokenizer;

/// L2-normalized term weights keyed by vocabulary index.
pub type SparseVector = BTreeMap<usize, f64>;

/// TF-IDF vectorizer whose vocabulary is fit on the documents it transforms.
///
/// Weights are raw term counts times smoothed IDF, `ln((1 + n) / (1 + df)) + 1`,
/// and each row is scaled to unit length. Rows with no terms stay empty.
#[derive(Clone, Default)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
}

impl TfIdfVectorizer {
    pub fn fit_transform<S: AsRef<str>>(&mut self, docs: &[S]) -> Vec<SparseVector> {
        let tokenized: Vec<Vec<String>> = docs.iter().map(|d| self.tokenizer.tokens(d.as_ref())).collect();

        // Sorted vocabulary keeps term indices and summation order stable.
        let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                vocabulary.entry(token.as_str()).or_insert(0);
            }
        }
        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let mut doc_freq = vec![0usize; vocabulary.len()];
        let counts: Vec<HashMap<usize, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf: HashMap<usize, usize> = HashMap::new();
                for token in tokens {
                    *tf.entry(vocabulary[token.as_str()]).or_insert(0) += 1;
                }
                for term in tf.keys() {
                    doc_freq[*term] += 1;
                }
                tf
            })
            .collect();

        let n = docs.len() as f64;
        let idf: Vec<f64> = doc_freq.iter().map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0).collect();

        counts
            .into_iter()
            .map(|tf| {
                let mut row: SparseVector = tf.into_iter().map(|(term, count)| (term, count as f64 * idf[term])).collect();
                let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.values_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect()
    }
}

/// Cosine similarity of two sparse vectors, clamped to `[0, 1]`.
/// A zero vector on either side gives 0.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    // fold from +0.0: an empty f64 sum is -0.0, which would order below +0.0
    let dot = a.iter().filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb)).fold(0.0, |acc, x| acc + x);
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
