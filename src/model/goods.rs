//! What a transport can carry.
//!
//! [`Goods`] is implemented by every product-like entity. [`Article`] is the
//! loosely-typed counterpart used when a batch arrives as JSON: it may also
//! hold a bare [`Pack`], which is not cargo on its own.

use crate::error::{SupplyError, SupplyResult};
use crate::model::fields::{kind_of, Fields};
use crate::model::{Milk, Pack, PackedMilk, Product};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A product, or a specialisation of one, that can be loaded onto a transport.
pub trait Goods: fmt::Debug + fmt::Display + Send + Sync {
    /// The product attributes shared by all goods.
    fn product(&self) -> &Product;

    fn weight(&self) -> f64 {
        self.product().weight
    }

    /// Volume taken in the cargo hold (the product's own volume, not its pack's).
    fn volume(&self) -> f64 {
        self.product().volume
    }
}

impl Goods for Product {
    fn product(&self) -> &Product {
        self
    }
}

impl Goods for Milk {
    fn product(&self) -> &Product {
        &self.product
    }
}

impl Goods for PackedMilk {
    fn product(&self) -> &Product {
        &self.milk.product
    }
}

/// Any entity of the model, as described in a shipment plan.
///
/// The JSON form carries a `kind` tag (`pack`, `product`, `milk`,
/// `packed_milk`) next to the entity's own fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Article {
    Pack(Pack),
    Product(Product),
    Milk(Milk),
    PackedMilk(PackedMilk),
}

impl Article {
    pub fn kind(&self) -> &'static str {
        match self {
            Article::Pack(_) => "pack",
            Article::Product(_) => "product",
            Article::Milk(_) => "milk",
            Article::PackedMilk(_) => "packed_milk",
        }
    }

    /// Turns the article into cargo. A pack alone is not a product.
    pub fn into_goods(self) -> SupplyResult<Arc<dyn Goods>> {
        match self {
            Article::Pack(_) => Err(SupplyError::type_mismatch(
                "article",
                "a product or one of its kinds",
                "pack",
            )),
            Article::Product(p) => Ok(Arc::new(p)),
            Article::Milk(m) => Ok(Arc::new(m)),
            Article::PackedMilk(pm) => Ok(Arc::new(pm)),
        }
    }
}

/// Converts a whole batch, failing on the first element that is not a product.
pub fn into_cargo(articles: Vec<Article>) -> SupplyResult<Vec<Arc<dyn Goods>>> {
    articles
        .into_iter()
        .enumerate()
        .map(|(index, article)| {
            article.into_goods().map_err(|e| match e {
                SupplyError::TypeMismatch { expected, found, .. } => SupplyError::TypeMismatch {
                    field: format!("articles[{index}]"),
                    expected,
                    found,
                },
                other => other,
            })
        })
        .collect()
}

impl TryFrom<&Value> for Article {
    type Error = SupplyError;

    fn try_from(value: &Value) -> SupplyResult<Self> {
        let fields = Fields::new(value, "article")?;
        let kind = fields.text("kind")?;
        match kind.as_str() {
            "pack" => Pack::try_from(value).map(Article::Pack),
            "product" => Product::try_from(value).map(Article::Product),
            "milk" => Milk::try_from(value).map(Article::Milk),
            "packed_milk" => PackedMilk::try_from(value).map(Article::PackedMilk),
            _ => Err(SupplyError::type_mismatch(
                "kind",
                "one of pack, product, milk, packed_milk",
                format!("'{kind}'"),
            )),
        }
    }
}

/// Parses a JSON array of tagged articles.
pub fn articles_from_json(value: &Value) -> SupplyResult<Vec<Article>> {
    match value {
        Value::Array(items) => items.iter().map(Article::try_from).collect(),
        other => Err(SupplyError::type_mismatch(
            "articles",
            "an array",
            kind_of(other),
        )),
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Article::Pack(p) => fmt::Display::fmt(p, f),
            Article::Product(p) => fmt::Display::fmt(p, f),
            Article::Milk(m) => fmt::Display::fmt(m, f),
            Article::PackedMilk(pm) => fmt::Display::fmt(pm, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pack_json() -> Value {
        json!({
            "kind": "pack",
            "material": "carton",
            "tightness": true,
            "pack_volume": 1,
            "pack_shelf_life": { "days": 10 }
        })
    }

    fn product_json() -> Value {
        json!({
            "kind": "product",
            "product_name": "Cheese",
            "product_shelf_life": { "days": 30 },
            "weight": 1.5,
            "recommended_temperature": 4,
            "current_temperature": 5,
            "product_volume": 1.2
        })
    }

    #[test]
    fn test_tagged_articles_parse() {
        let articles = articles_from_json(&json!([pack_json(), product_json()])).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].kind(), "pack");
        assert_eq!(articles[1].kind(), "product");
    }

    #[test]
    fn test_pack_is_not_cargo() {
        let articles = articles_from_json(&json!([product_json(), pack_json()])).unwrap();
        match into_cargo(articles) {
            Err(SupplyError::TypeMismatch { field, found, .. }) => {
                assert_eq!(field, "articles[1]");
                assert_eq!(found, "pack");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_goods_expose_product_measures() {
        let article = Article::try_from(&product_json()).unwrap();
        let goods = article.into_goods().unwrap();
        assert_eq!(goods.weight(), 1.5);
        assert_eq!(goods.volume(), 1.2);
    }

    #[test]
    fn test_unknown_kind() {
        let mut payload = product_json();
        payload["kind"] = json!("truck");
        assert!(Article::try_from(&payload).is_err());
    }
}
