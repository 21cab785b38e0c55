//! Statistical fallback classifier.
//!
//! Wraps a pre-trained TF-IDF + logistic regression pipeline exported as a
//! JSON artifact. This crate performs inference only; the artifact is
//! produced by a separate offline training job and loaded once at startup.

use crate::{Category, TriageError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Capability seam for the triage engine: any probabilistic text classifier
/// exposing a best label and a full label distribution.
pub trait TicketClassifier: Send + Sync {
    /// Best label together with its probability mass.
    fn predict(&self, text: &str) -> Result<(Category, f64), TriageError>;

    /// Per-label probabilities, summing to 1 within float tolerance.
    fn predict_distribution(&self, text: &str) -> Result<Vec<(Category, f64)>, TriageError>;

    /// The labels the model was trained on.
    fn labels(&self) -> Vec<Category>;
}

/// Serialized model artifact.
///
/// Tokenization contract (must match the training job): terms are lowercase
/// alphanumeric tokens of length >= 2. `idf[i]` is the inverse document
/// frequency of the term with vocabulary index `i`; `coef[c]` and
/// `intercept[c]` are the regression weights for `labels[c]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub labels: Vec<String>,
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
}

/// TF-IDF + multinomial logistic regression inference over a loaded artifact.
#[derive(Debug)]
pub struct LinearModel {
    labels: Vec<Category>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearModel {
    /// Load a model artifact from disk. A missing or malformed artifact is
    /// startup-fatal: the service must not accept traffic without a model.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TriageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TriageError::ModelNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, TriageError> {
        if artifact.labels.is_empty() {
            return Err(TriageError::ModelInvalid("artifact has no labels".into()));
        }
        if artifact.coef.len() != artifact.labels.len()
            || artifact.intercept.len() != artifact.labels.len()
        {
            return Err(TriageError::ModelInvalid(format!(
                "weight rows ({}) do not match labels ({})",
                artifact.coef.len(),
                artifact.labels.len()
            )));
        }
        let width = artifact.idf.len();
        if artifact.coef.iter().any(|row| row.len() != width) {
            return Err(TriageError::ModelInvalid(
                "coefficient row width does not match idf vector".into(),
            ));
        }
        if artifact.vocabulary.values().any(|&idx| idx >= width) {
            return Err(TriageError::ModelInvalid(
                "vocabulary index out of range".into(),
            ));
        }

        Ok(Self {
            labels: artifact.labels.into_iter().map(Category::from).collect(),
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            coef: artifact.coef,
            intercept: artifact.intercept,
        })
    }

    /// L2-normalized TF-IDF feature vector for `text`. Out-of-vocabulary
    /// tokens contribute nothing.
    fn vectorize(&self, text: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.idf.len()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                features[idx] += 1.0;
            }
        }
        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in features.iter_mut() {
                *value /= norm;
            }
        }
        features
    }

    /// Raw decision scores, one per label.
    fn scores(&self, text: &str) -> Vec<f64> {
        let features = self.vectorize(text);
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, intercept)| {
                row.iter().zip(&features).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect()
    }
}

impl TicketClassifier for LinearModel {
    fn predict(&self, text: &str) -> Result<(Category, f64), TriageError> {
        let distribution = self.predict_distribution(text)?;
        let mut best: Option<(Category, f64)> = None;
        for (category, probability) in distribution {
            // strictly greater: on exact ties the first label wins
            let better = match &best {
                Some((_, current)) => probability > *current,
                None => true,
            };
            if better {
                best = Some((category, probability));
            }
        }
        best.ok_or_else(|| TriageError::Classifier("model produced no prediction".into()))
    }

    fn predict_distribution(&self, text: &str) -> Result<Vec<(Category, f64)>, TriageError> {
        let probabilities = softmax(&self.scores(text));
        Ok(self.labels.iter().cloned().zip(probabilities).collect())
    }

    fn labels(&self) -> Vec<Category> {
        self.labels.clone()
    }
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.iter().map(|e| e / total).collect()
}

/// Training-time tokenizer: lowercase alphanumeric runs, length >= 2.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2)
        .map(|token| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Two-label model: "printer"/"jam" vote Hardware, "vpn"/"internet"
    /// vote Network.
    fn tiny_artifact() -> ModelArtifact {
        ModelArtifact {
            labels: vec!["Hardware".to_string(), "Network".to_string()],
            vocabulary: [
                ("printer".to_string(), 0),
                ("jam".to_string(), 1),
                ("vpn".to_string(), 2),
                ("internet".to_string(), 3),
            ]
            .into_iter()
            .collect(),
            idf: vec![1.5, 1.8, 1.4, 1.6],
            coef: vec![
                vec![2.0, 1.7, -0.4, -0.3],
                vec![-0.4, -0.3, 2.1, 1.8],
            ],
            intercept: vec![-0.1, -0.1],
        }
    }

    #[test]
    fn test_predict_picks_supported_label() {
        let model = LinearModel::from_artifact(tiny_artifact()).unwrap();
        let (category, confidence) = model.predict("the printer has a jam").unwrap();
        assert_eq!(category, Category::Hardware);
        assert!(confidence > 0.5);

        let (category, _) = model.predict("vpn and internet are flaky").unwrap();
        assert_eq!(category, Category::Network);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let model = LinearModel::from_artifact(tiny_artifact()).unwrap();
        for text in ["printer jam", "vpn", "totally unrelated words", ""] {
            let distribution = model.predict_distribution(text).unwrap();
            let total: f64 = distribution.iter().map(|(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-9, "sum was {total} for {text:?}");
        }
    }

    #[test]
    fn test_confidence_is_top_probability() {
        let model = LinearModel::from_artifact(tiny_artifact()).unwrap();
        let (category, confidence) = model.predict("printer").unwrap();
        let distribution = model.predict_distribution("printer").unwrap();
        let from_distribution = distribution
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, p)| *p)
            .unwrap();
        assert_eq!(confidence, from_distribution);
    }

    #[test]
    fn test_out_of_vocabulary_text_falls_back_to_priors() {
        let model = LinearModel::from_artifact(tiny_artifact()).unwrap();
        // No token hits the vocabulary: scores reduce to the intercepts.
        let distribution = model.predict_distribution("zzz qqq").unwrap();
        assert_eq!(distribution.len(), 2);
        assert!((distribution[0].1 - distribution[1].1).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file_is_model_not_found() {
        let err = LinearModel::load("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, TriageError::ModelNotFound(_)));
    }

    #[test]
    fn test_empty_labels_rejected() {
        let mut artifact = tiny_artifact();
        artifact.labels.clear();
        artifact.coef.clear();
        artifact.intercept.clear();
        let err = LinearModel::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, TriageError::ModelInvalid(_)));
    }

    #[test]
    fn test_mismatched_weights_rejected() {
        let mut artifact = tiny_artifact();
        artifact.coef.pop();
        let err = LinearModel::from_artifact(artifact).unwrap_err();
        assert!(matches!(err, TriageError::ModelInvalid(_)));
    }

    #[test]
    fn test_load_from_disk_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let raw = serde_json::to_string(&tiny_artifact()).unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        let model = LinearModel::load(file.path()).unwrap();
        assert_eq!(model.labels().len(), 2);
    }

    #[test]
    fn test_corrupt_artifact_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let err = LinearModel::load(file.path()).unwrap_err();
        assert!(matches!(err, TriageError::Json(_)));
    }

    #[test]
    fn test_tokenize_contract() {
        assert_eq!(tokenize("VPN is down!"), vec!["vpn", "is", "down"]);
        // single-character tokens are dropped
        assert_eq!(tokenize("a b printer"), vec!["printer"]);
    }
}
