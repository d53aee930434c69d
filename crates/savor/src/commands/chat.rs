//! Customer chat command handlers.

use tabled::Tabled;

use savor_core::{
    ChatMessage, Command as CoreCommand, Console, Conversation, EntityId, SendMessageRequest,
};

use crate::cli::{ChatArgs, ChatCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ConversationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Last message")]
    last_message: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Unread")]
    unread: String,
}

impl From<&Conversation> for ConversationRow {
    fn from(c: &Conversation) -> Self {
        Self {
            id: c.id.to_string(),
            customer: util::dash(c.customer_name.as_deref()),
            last_message: util::dash(c.last_message.as_deref()),
            when: c
                .last_message_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".into()),
            unread: if c.unread_count > 0 {
                c.unread_count.to_string()
            } else {
                String::new()
            },
        }
    }
}

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "Message")]
    text: String,
    #[tabled(rename = "Sent")]
    sent: String,
}

impl From<&ChatMessage> for MessageRow {
    fn from(m: &ChatMessage) -> Self {
        Self {
            from: m.sender_role.clone(),
            text: m.text.clone(),
            sent: m
                .sent_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".into()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: ChatArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ChatCommand::Conversations => {
            let conversations = console.conversations().await?;
            let out = output::render_list(
                &global.output,
                &conversations,
                |c| ConversationRow::from(c),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ChatCommand::Messages { conversation } => {
            let messages = console.messages(&EntityId::from(conversation)).await?;
            let out = output::render_list(
                &global.output,
                &messages,
                |m| MessageRow::from(m),
                |m| m.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ChatCommand::Send {
            conversation,
            message,
        } => {
            if message.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "message".into(),
                    reason: "message text cannot be empty".into(),
                });
            }
            console
                .execute(CoreCommand::SendMessage(SendMessageRequest {
                    conversation_id: EntityId::from(conversation),
                    text: message,
                }))
                .await?;
            if !global.quiet {
                eprintln!("Message sent");
            }
            Ok(())
        }
    }
}
