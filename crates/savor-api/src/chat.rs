// Customer chat endpoints
//
// Plain request/response: conversations and messages are fetched on demand,
// outgoing messages are posted. No streaming surface.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{ConversationRecord, MessageRecord, SendMessagePayload};

impl ApiClient {
    /// List a restaurant's chat conversations, most recent activity first.
    ///
    /// `GET api/chat/conversations/{restaurant_id}`
    pub async fn list_conversations(
        &self,
        restaurant_id: &str,
    ) -> Result<Vec<ConversationRecord>, Error> {
        let url = self.api_url(&format!("chat/conversations/{restaurant_id}"))?;
        debug!("listing conversations");
        self.get(url).await
    }

    /// List the messages of one conversation, oldest first.
    ///
    /// `GET api/chat/messages/{conversation_id}`
    pub async fn list_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<MessageRecord>, Error> {
        let url = self.api_url(&format!("chat/messages/{conversation_id}"))?;
        debug!(%conversation_id, "listing messages");
        self.get(url).await
    }

    /// Send a message into a conversation.
    ///
    /// `POST api/chat/messages`
    pub async fn send_message(
        &self,
        payload: &SendMessagePayload,
    ) -> Result<MessageRecord, Error> {
        let url = self.api_url("chat/messages")?;
        debug!(conversation = %payload.conversation_id, "sending message");
        self.post(url, payload).await
    }
}
