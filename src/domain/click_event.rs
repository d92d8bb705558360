//! Request metadata captured by the redirect handler.

/// Client metadata attached to a redirect request.
///
/// Built by the redirect handler from the request headers and the peer
/// socket address, then handed to the service which stamps it with the
/// current instant and appends it to the link's click log. All fields are
/// optional to handle missing headers gracefully.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClickEvent {
    pub fn new(ip: Option<String>, user_agent: Option<&str>, referer: Option<&str>) -> Self {
        Self {
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }
}
