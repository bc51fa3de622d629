// catalog.rs - Loading the game catalog from its JSON data file

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::error::DataLoadError;
use crate::models::{Category, Field, GameRecord, Language};

/// Category name given to catalogs stored as a bare list of games.
pub const UNCATEGORIZED: &str = "GAMES";

/// Highest rating a game can carry.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// Folder that list-format image names are relative to.
pub const LIST_IMAGE_DIR: &str = "images";

// Record of a list document: { "id": 1, "image": .., "name": { "en": .. }, "description": { .. } }
#[derive(Deserialize, Debug)]
struct NestedRecord {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    name: Map<String, Value>,
    #[serde(default)]
    description: Map<String, Value>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
}

// Record of a categorized document: { "Picture": .., "English_N": .., "English_D": .. }
#[derive(Deserialize, Debug)]
struct FlatRecord {
    #[serde(rename = "Picture", default)]
    picture: Option<String>,
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

fn localized(map: &Map<String, Value>) -> HashMap<Language, String> {
    map.iter()
        .filter_map(|(key, value)| {
            let language = Language::from_key(key)?;
            let text = value.as_str()?;
            Some((language, text.to_string()))
        })
        .collect()
}

// Star i is filled iff i < rating, so fractions count up.
fn clamp_rating(rating: f64) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    rating.ceil().clamp(0.0, MAX_RATING as f64) as u8
}

impl NestedRecord {
    fn into_record(self) -> GameRecord {
        GameRecord {
            id: self.id,
            picture: self
                .image
                .filter(|image| !image.trim().is_empty())
                .map(|image| format!("{}/{}", LIST_IMAGE_DIR, image)),
            names: localized(&self.name),
            descriptions: localized(&self.description),
            rating: self.rating.map(clamp_rating),
        }
    }
}

impl FlatRecord {
    fn into_record(self) -> GameRecord {
        let mut record = GameRecord {
            picture: self.picture,
            ..GameRecord::default()
        };
        for language in Language::all() {
            for field in [Field::Name, Field::Description] {
                let key = format!("{}{}", language.key_prefix(), field.key_suffix());
                if let Some(text) = self.fields.get(&key).and_then(Value::as_str) {
                    let target = match field {
                        Field::Name => &mut record.names,
                        Field::Description => &mut record.descriptions,
                    };
                    target.insert(*language, text.to_string());
                }
            }
        }
        record
    }
}

fn parse_flat_games(value: Value) -> Result<Vec<GameRecord>, DataLoadError> {
    let raw: Vec<FlatRecord> = serde_json::from_value(value)?;
    Ok(raw.into_iter().map(FlatRecord::into_record).collect())
}

fn parse_nested_games(value: Value) -> Result<Vec<GameRecord>, DataLoadError> {
    let raw: Vec<NestedRecord> = serde_json::from_value(value)?;
    Ok(raw.into_iter().map(NestedRecord::into_record).collect())
}

impl Catalog {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        // Raw bytes: bad UTF-8 is a JSON error, not a read failure.
        let content = fs::read(path)
            .await
            .map_err(|source| DataLoadError::Missing {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_slice(&content)?;
        info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            games = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DataLoadError> {
        Self::from_json_slice(content.as_bytes())
    }

    pub fn from_json_slice(content: &[u8]) -> Result<Self, DataLoadError> {
        let document: Value = serde_json::from_slice(content)?;
        let categories = match document {
            Value::Object(map) => map
                .into_iter()
                .map(|(name, games)| {
                    debug!(category = %name, "parsing category");
                    Ok(Category {
                        name,
                        games: parse_flat_games(games)?,
                    })
                })
                .collect::<Result<Vec<_>, DataLoadError>>()?,
            list @ Value::Array(_) => vec![Category {
                name: UNCATEGORIZED.to_string(),
                games: parse_nested_games(list)?,
            }],
            _ => return Err(DataLoadError::Empty),
        };
        Ok(Self { categories })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Games of `category` in file order; empty when the category is unknown.
    pub fn get_games(&self, category: &str) -> &[GameRecord] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.games.as_slice())
            .unwrap_or(&[])
    }

    /// Like `get_games`, but falls back to the first category when `category` is absent.
    pub fn games_or_first(&self, category: &str) -> &[GameRecord] {
        match self.categories.iter().find(|c| c.name == category) {
            Some(c) => &c.games,
            None => self.categories.first().map(|c| c.games.as_slice()).unwrap_or(&[]),
        }
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.games.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT: &str = r#"{
        "GAMES_IN_FULL_CONTACT_SPORTS": [
            { "Picture": "img/tiger.jpg", "English_N": "Tiger Tag", "English_D": "Chase", "French_N": "Chat du tigre", "Arabic_N": "النمر" },
            { "English_N": "Sumo Circle", "French_D": 12 }
        ],
        "GAMES_IN_GRAPPLING": []
    }"#;

    const NESTED: &str = r#"[
        { "id": 7, "image": "crane.png", "rating": 4,
          "name": { "en": "Crane Balance", "fr": "Équilibre de la grue" },
          "description": { "en": "Stand on one leg", "ar": "قف على رجل واحدة" } },
        { "id": 8, "name": { "English": "Shadow Steps" }, "rating": 9.4 }
    ]"#;

    #[test]
    fn flat_keys_are_mapped_per_language() {
        let catalog = Catalog::from_json_str(FLAT).unwrap();
        let games = catalog.get_games("GAMES_IN_FULL_CONTACT_SPORTS");
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].picture.as_deref(), Some("img/tiger.jpg"));
        assert_eq!(games[0].text(Language::French, Field::Name), Some("Chat du tigre"));
        assert_eq!(games[0].text(Language::Arabic, Field::Description), None);
        // non-string values are dropped
        assert_eq!(games[1].text(Language::French, Field::Description), None);
        assert_eq!(games[1].rating, None);
    }

    #[test]
    fn categories_keep_file_order() {
        let catalog = Catalog::from_json_str(FLAT).unwrap();
        let names: Vec<_> = catalog.categories().collect();
        assert_eq!(names, vec!["GAMES_IN_FULL_CONTACT_SPORTS", "GAMES_IN_GRAPPLING"]);
        assert!(catalog.get_games("GAMES_IN_GRAPPLING").is_empty());
        assert!(catalog.get_games("nope").is_empty());
    }

    #[test]
    fn nested_list_becomes_single_category() {
        let catalog = Catalog::from_json_str(NESTED).unwrap();
        let games = catalog.get_games(UNCATEGORIZED);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, Some(7));
        assert_eq!(games[0].picture.as_deref(), Some("images/crane.png"));
        assert_eq!(games[0].rating, Some(4));
        assert_eq!(games[1].text(Language::English, Field::Name), Some("Shadow Steps"));
        assert_eq!(games[1].rating, Some(MAX_RATING));
    }

    #[test]
    fn games_or_first_falls_back() {
        let catalog = Catalog::from_json_str(NESTED).unwrap();
        assert_eq!(catalog.games_or_first("GAMES_IN_FULL_CONTACT_SPORTS").len(), 2);
        assert!(Catalog::default().games_or_first("x").is_empty());
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(matches!(Catalog::from_json_str("42"), Err(DataLoadError::Empty)));
        assert!(matches!(Catalog::from_json_str("{ broken"), Err(DataLoadError::Malformed(_))));
        assert!(matches!(
            Catalog::from_json_str(r#"{ "A": "not a list" }"#),
            Err(DataLoadError::Malformed(_))
        ));
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(clamp_rating(-2.0), 0);
        assert_eq!(clamp_rating(2.6), 3);
        assert_eq!(clamp_rating(f64::NAN), 0);
    }

    #[test]
    fn fractional_rating_fills_the_next_star() {
        assert_eq!(clamp_rating(4.4), 5);
        assert_eq!(clamp_rating(0.1), 1);
        assert_eq!(clamp_rating(3.0), 3);
    }

    #[test]
    fn list_record_with_string_id_is_rejected() {
        let result = Catalog::from_json_str(
            r#"[{"id":"1","name":{"en":"Crane"},"description":{"en":"Stand"},"rating":4}]"#,
        );
        assert!(matches!(result, Err(DataLoadError::Malformed(_))));
    }

    #[test]
    fn list_record_with_string_rating_is_rejected() {
        let result = Catalog::from_json_str(r#"[{"id":2,"name":{"en":"Bear"},"rating":"4"}]"#);
        assert!(matches!(result, Err(DataLoadError::Malformed(_))));
    }

    #[test]
    fn list_record_without_name_keeps_its_other_fields() {
        let catalog = Catalog::from_json_str(
            r#"[{"id":3,"image":"a.png","description":{"en":"Only desc"}}]"#,
        )
        .unwrap();
        let game = &catalog.get_games(UNCATEGORIZED)[0];
        assert_eq!(game.id, Some(3));
        assert_eq!(game.picture.as_deref(), Some("images/a.png"));
        assert_eq!(game.text(Language::English, Field::Description), Some("Only desc"));
        assert_eq!(game.text(Language::English, Field::Name), None);
    }

    #[test]
    fn categorized_records_keep_picture_as_written() {
        let catalog = Catalog::from_json_str(r#"{ "A": [ { "Picture": "logo1.jpg" } ] }"#).unwrap();
        assert_eq!(catalog.get_games("A")[0].picture.as_deref(), Some("logo1.jpg"));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let bytes = [b'[', b'{', b'"', b'i', b'm', b'a', b'g', b'e', b'"', b':', b'"', 0xff, b'"', b'}', b']'];
        assert!(matches!(Catalog::from_json_slice(&bytes), Err(DataLoadError::Malformed(_))));
    }
}
