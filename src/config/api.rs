/// Endpoint layout of the prediction server.
pub struct EndpointPaths {
    pub history: &'static str,
    pub train: &'static str,
    pub predict: &'static str,
}

pub struct ClientDefaults {
    pub base_url: &'static str,
    /// Connect timeout only. Requests themselves are never timed out by the client
    /// (training can legitimately take minutes).
    pub connect_timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct ApiConfig {
    pub paths: EndpointPaths,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    paths: EndpointPaths {
        history: "/history",
        train: "/train",
        predict: "/predict",
    },
    client: ClientDefaults {
        base_url: "http://127.0.0.1:5000",
        connect_timeout_ms: 5000,
        user_agent: "stock-sight/0.1",
    },
};
