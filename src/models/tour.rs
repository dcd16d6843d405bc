use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: i64,
    pub title: String,
    pub destination: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub price: f64,
    pub rating: f64,
    pub duration: i32,
    pub max_group_size: i32,
    pub review_count: i32,
}
