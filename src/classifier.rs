use rand::Rng;

use crate::models::UploadedImage;

/// Outcome of classifying one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub is_hotdog: bool,
    /// Score in [0.7, 1.0).
    pub confidence: f32,
}

pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &UploadedImage) -> anyhow::Result<Verdict>;
}

/// Stand-in classifier that redraws a random verdict on every call.
/// A real model would implement [`ImageClassifier`] and replace this at
/// wiring time.
pub struct RandomClassifier {}

impl RandomClassifier {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageClassifier for RandomClassifier {
    fn classify(&self, _image: &UploadedImage) -> anyhow::Result<Verdict> {
        let mut rng = rand::rng();

        Ok(Verdict {
            is_hotdog: rng.random_bool(0.5),
            confidence: rng.random_range(0.7..1.0),
        })
    }
}
