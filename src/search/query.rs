//! Request bodies sent to the search engine
//!
//! Every body is a typed structure serialized with serde. Caller text only
//! ever lands in a JSON string value, so quotes or braces in a query cannot
//! change the shape of the request.

use serde::Serialize;
use std::collections::BTreeMap;

/// Fields a free-text query is scored against
pub const SEARCH_FIELDS: [&str; 3] = ["name", "tag", "description"];

/// Settings and mappings sent when creating a collection
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionSettings {
    pub settings: IndexSettings,
    pub mappings: Mappings,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexSettings {
    pub number_of_shards: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mappings {
    pub properties: BTreeMap<String, FieldMapping>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldMapping {
    #[serde(rename = "type")]
    pub field_type: String,
}

impl CollectionSettings {
    /// Settings used by `create_collection`.
    ///
    /// The mapping declares a single text field `field1`, which is not one of
    /// the product fields. Product fields are mapped dynamically by the engine
    /// on first index.
    pub fn placeholder(number_of_shards: u32) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(
            "field1".to_string(),
            FieldMapping {
                field_type: "text".to_string(),
            },
        );

        Self {
            settings: IndexSettings { number_of_shards },
            mappings: Mappings { properties },
        }
    }
}

/// Multi-match query flavors
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    #[default]
    PhrasePrefix,
    BestFields,
}

/// A free-text query over a set of fields
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub match_type: MatchType,
    pub fields: Vec<String>,
}

impl SearchQuery {
    /// Phrase-prefix query over the product text fields
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            match_type: MatchType::PhrasePrefix,
            fields: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Build the `_search` request body
    pub fn to_body(&self) -> SearchRequestBody<'_> {
        SearchRequestBody {
            query: QueryClause {
                multi_match: MultiMatch {
                    query: &self.text,
                    match_type: self.match_type,
                    fields: &self.fields,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchRequestBody<'a> {
    pub query: QueryClause<'a>,
}

#[derive(Debug, Serialize)]
pub struct QueryClause<'a> {
    pub multi_match: MultiMatch<'a>,
}

#[derive(Debug, Serialize)]
pub struct MultiMatch<'a> {
    pub query: &'a str,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub fields: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_mapping_is_field1_only() {
        let body = serde_json::to_value(CollectionSettings::placeholder(1)).unwrap();
        assert_eq!(
            body,
            json!({
                "settings": { "number_of_shards": 1 },
                "mappings": {
                    "properties": {
                        "field1": { "type": "text" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_phrase_prefix_body() {
        let query = SearchQuery::new("Iphone");
        let body = serde_json::to_value(query.to_body()).unwrap();
        assert_eq!(
            body,
            json!({
                "query": {
                    "multi_match": {
                        "query": "Iphone",
                        "type": "phrase_prefix",
                        "fields": ["name", "tag", "description"]
                    }
                }
            })
        );
    }

    #[test]
    fn test_query_text_cannot_escape_string_value() {
        let hostile = r#"x"}},"size":10000,"query":{"match_all":{"#;
        let query = SearchQuery::new(hostile);
        let body = serde_json::to_value(query.to_body()).unwrap();

        assert_eq!(body["query"]["multi_match"]["query"], hostile);
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert!(body.get("size").is_none());
    }

    #[test]
    fn test_empty_text_is_forwarded() {
        let query = SearchQuery::new("");
        let body = serde_json::to_value(query.to_body()).unwrap();
        assert_eq!(body["query"]["multi_match"]["query"], "");
    }

    #[test]
    fn test_custom_fields_and_type() {
        let query = SearchQuery::new("phone")
            .with_fields(vec!["tag".to_string()])
            .with_match_type(MatchType::BestFields);
        let body = serde_json::to_value(query.to_body()).unwrap();
        assert_eq!(body["query"]["multi_match"]["type"], "best_fields");
        assert_eq!(body["query"]["multi_match"]["fields"], json!(["tag"]));
    }
}
