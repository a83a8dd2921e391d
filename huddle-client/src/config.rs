/// Connection settings for the signaling endpoint and the RTC stack.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub ice_servers: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "ws://localhost:8080/groupcall".to_owned(),
            ice_servers: vec!["stun:stun.l.google.com:19302".to_owned()],
        }
    }
}
