use std::collections::HashSet;
use std::path::Path;

use contracts::domain::a001_product::ProductRecord;

/// Набор товаров, встроенный в бинарник
const EMBEDDED_SEED: &str = include_str!("seed_products.json");

/// Упорядоченный каталог товаров в памяти.
///
/// Порядок записей задаётся файлом-источником и определяет разбиение на
/// страницы.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<ProductRecord>,
}

impl ProductCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// Разбор JSON-массива товаров; повторяющийся `id` считается ошибкой
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let products: Vec<ProductRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                anyhow::bail!("Duplicate product id in catalog: {}", product.id);
            }
        }

        Ok(Self::new(products))
    }

    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Загрузка каталога из файла; без файла берётся встроенный набор
    pub fn load(seed_path: Option<&Path>) -> anyhow::Result<Self> {
        match seed_path {
            Some(path) if path.exists() => {
                tracing::info!("Loading product catalog from: {}", path.display());
                let contents = std::fs::read_to_string(path)?;
                Self::from_json(&contents)
            }
            Some(path) => {
                tracing::warn!("Product seed not found at: {}", path.display());
                tracing::info!("Using embedded product catalog");
                Self::embedded()
            }
            None => {
                tracing::info!("Using embedded product catalog");
                Self::embedded()
            }
        }
    }

    pub fn all(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
