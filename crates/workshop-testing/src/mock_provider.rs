//! Mock provider built from a contract interaction.
//!
//! The mock only answers the exact request the interaction describes, so a
//! consumer that sends anything else gets mockito's 501 and fails the
//! interaction's assertion.

use mockito::{Matcher, Mock, Server, ServerGuard};
use workshop_contract::interaction::Interaction;

pub struct MockProvider {
    server: ServerGuard,
    mock: Mock,
}

impl MockProvider {
    pub async fn start(interaction: &Interaction) -> Self {
        let mut server = Server::new_async().await;
        let request = &interaction.request;
        let expect = &interaction.expect;

        let query = if request.query.is_empty() {
            Matcher::Exact(String::new())
        } else {
            Matcher::AllOf(
                request
                    .query
                    .iter()
                    .map(|(k, v)| Matcher::UrlEncoded(k.clone(), v.clone()))
                    .collect(),
            )
        };

        let mut mock = server
            .mock(request.method.as_str(), request.path.as_str())
            .match_query(query)
            .with_status(usize::from(expect.status));
        for (name, value) in &expect.headers {
            mock = mock.with_header(name.as_str(), value.as_str());
        }
        if let Some(body) = &expect.body {
            mock = mock.with_body(body.to_string());
        }

        let mock = mock.create_async().await;
        Self { server, mock }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Panic unless the interaction's request was received exactly once.
    pub async fn verify(&self) {
        self.mock.assert_async().await;
    }
}
