//! Sample product content generation.
//!
//! Stands in for the LLM/image-generation leg of the workflow: three
//! pre-defined sample products selected at random or by theme, with a
//! fabricated id, price, and timestamps.

use std::path::PathBuf;

use chrono::Utc;
use rand::seq::IndexedRandom;
use rand::Rng;

use merchmock_core::error::AppError;
use merchmock_core::models::ProductData;

struct SampleSeed {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    image_prompt: &'static str,
}

const SAMPLE_SEEDS: [SampleSeed; 3] = [
    SampleSeed {
        title: "Vintage Sunset Graphic Tee",
        description: "A nostalgic blend of retro aesthetics and modern comfort. This eye-catching t-shirt features a vibrant sunset design that captures the essence of golden hour.",
        tags: &["vintage", "retro", "sunset", "graphic", "comfortable", "casual", "trendy"],
        image_prompt: "vintage sunset graphic design on t-shirt, warm colors, retro style",
    },
    SampleSeed {
        title: "Minimalist Coffee Quote Mug",
        description: "Start your morning right with this sleek, minimalist coffee mug featuring an inspiring quote. Made from high-quality ceramic.",
        tags: &["minimalist", "coffee", "quote", "ceramic", "morning", "motivation", "clean"],
        image_prompt: "minimalist white coffee mug with simple black text quote",
    },
    SampleSeed {
        title: "Space Galaxy Phone Case",
        description: "Protect your phone in style with this stunning galaxy-themed case featuring deep space imagery with nebulas and stars.",
        tags: &["space", "galaxy", "phone case", "cosmic", "stars", "protection", "universe"],
        image_prompt: "phone case with galaxy space design, stars and nebulas",
    },
];

/// Fabricates product data packages from the built-in samples.
pub struct ProductContentGenerator {
    output_dir: PathBuf,
}

impl ProductContentGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Pick a sample by theme tag match (or at random for an unknown theme)
    /// and fabricate the full product package.
    pub fn generate(&self, theme: &str) -> ProductData {
        tracing::info!(theme = %theme, "Generating product content");
        let mut rng = rand::rng();

        let seed = if theme == "random" {
            SAMPLE_SEEDS.choose(&mut rng).unwrap_or(&SAMPLE_SEEDS[0])
        } else {
            SAMPLE_SEEDS
                .iter()
                .find(|s| s.tags.contains(&theme))
                .unwrap_or(&SAMPLE_SEEDS[0])
        };

        let now = Utc::now();
        let stamp = now.format("%Y%m%d_%H%M%S");
        let price: f64 = 19.99 + rng.random_range(5.0..25.0);

        let product = ProductData {
            id: format!("prod_{}", stamp),
            title: seed.title.to_string(),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            image_file: format!("product_{}.jpg", stamp),
            description: Some(seed.description.to_string()),
            image_prompt: Some(seed.image_prompt.to_string()),
            created_at: Some(now),
            theme: Some(theme.to_string()),
            price: Some((price * 100.0).round() / 100.0),
        };
        tracing::info!(product_id = %product.id, title = %product.title, "Product content generated");
        product
    }

    /// Write `product_data_<id>.json`; returns the path written.
    pub async fn write_package(&self, product: &ProductData) -> Result<PathBuf, AppError> {
        let path = self
            .output_dir
            .join(format!("product_data_{}.json", product.id));
        let json = serde_json::to_vec_pretty(product)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| AppError::WriteFailed {
                path: path.display().to_string(),
                source,
            })?;
        tracing::info!(path = %path.display(), "Product data saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_selects_matching_sample() {
        let generator = ProductContentGenerator::new(".");
        let product = generator.generate("space");
        assert_eq!(product.title, "Space Galaxy Phone Case");

        let product = generator.generate("coffee");
        assert_eq!(product.title, "Minimalist Coffee Quote Mug");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_first_sample() {
        let generator = ProductContentGenerator::new(".");
        let product = generator.generate("steampunk");
        assert_eq!(product.title, "Vintage Sunset Graphic Tee");
    }

    #[test]
    fn test_random_theme_picks_a_sample() {
        let generator = ProductContentGenerator::new(".");
        let product = generator.generate("random");
        let titles: Vec<&str> = SAMPLE_SEEDS.iter().map(|s| s.title).collect();
        assert!(titles.contains(&product.title.as_str()));
    }

    #[test]
    fn test_generated_package_shape() {
        let generator = ProductContentGenerator::new(".");
        let product = generator.generate("vintage");
        assert!(product.id.starts_with("prod_"));
        assert!(product.image_file.starts_with("product_"));
        assert!(product.image_file.ends_with(".jpg"));
        let price = product.price.unwrap();
        assert!((24.99..=44.99).contains(&price));
        assert!(product.created_at.is_some());
    }
}
