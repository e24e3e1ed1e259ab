use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{Value, json};

/// Thin wrapper over the three API endpoints.
pub struct TestClient {
    base_url: String,
    http: Client,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            http: Client::new(),
        }
    }

    /// `GET` with a raw path and query string, for malformed-input cases.
    pub async fn get(&self, path_and_query: &str) -> TestResponse {
        self.send(self.http.get(format!("{}{path_and_query}", self.base_url)))
            .await
    }

    pub async fn items(&self, page: u64, limit: u64, search: &str) -> TestResponse {
        let request = self
            .http
            .get(format!("{}/api/items", self.base_url))
            .query(&[
                ("page", page.to_string()),
                ("limit", limit.to_string()),
                ("search", search.to_string()),
            ]);
        self.send(request).await
    }

    pub async fn select(&self, id: u64, selected: bool) -> TestResponse {
        self.post("/api/select", &json!({ "id": id, "selected": selected }))
            .await
    }

    pub async fn reorder(&self, ids: &[u64]) -> TestResponse {
        let items: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
        self.post("/api/reorder", &json!({ "items": items })).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        self.send(self.http.post(format!("{}{path}", self.base_url)).json(body))
            .await
    }

    async fn send(&self, request: RequestBuilder) -> TestResponse {
        let response = request.send().await.expect("request reaches the server");
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        TestResponse { status, body }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    pub fn item_ids(&self) -> Vec<u64> {
        self.body["items"]
            .as_array()
            .expect("items is an array")
            .iter()
            .map(|item| item["id"].as_u64().expect("id is an integer"))
            .collect()
    }

    pub fn selected_ids(&self) -> Vec<u64> {
        self.body["selectedItems"]
            .as_array()
            .expect("selectedItems is an array")
            .iter()
            .map(|id| id.as_u64().expect("id is an integer"))
            .collect()
    }
}
