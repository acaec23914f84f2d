// parley/parley-cli
//
// Copyright: 2024, The Parley Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use secrecy::Secret;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use common::{enable_logging, load_credentials, Level};
use parley_core_client::dtos::{Emoji, Message, MessageId, MessageType, User, UserId};
use parley_core_client::{
    Client, ClientDelegate, ClientEvent, ConnectionConfig, StaticCredentialProvider,
};
use parley_stomp::connector::websocket;

struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, client: Client, event: ClientEvent) {
        match event {
            ClientEvent::MessagesAppended {
                counterpart,
                message_ids,
            } => {
                for message in client
                    .conversations
                    .messages(&counterpart)
                    .iter()
                    .filter(|message| message_ids.contains(&message.id))
                {
                    println!("\n{}", MessageDisplay(message));
                }
            }
            ClientEvent::ComposingUserChanged { notification } => {
                if notification.is_typing {
                    println!("\nUser {} is typing…", notification.user_id);
                }
            }
            ClientEvent::ServerError { message } => println!("\nServer error: {}", message),
            ClientEvent::ConnectionStatusChanged { state, error } => match error {
                Some(error) => println!("\nConnection {}: {}", state, error),
                None => println!("\nConnection {}", state),
            },
            _ => (),
        }
    }
}

struct MessageDisplay<'a>(&'a Message);

impl Display for MessageDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = self.0;
        let sender = message
            .sender_display_name
            .clone()
            .unwrap_or_else(|| message.sender_id.to_string());

        write!(
            f,
            "[{}] #{} {}: {}",
            message.sent_at.format("%H:%M:%S"),
            message.id,
            sender,
            message.content
        )?;

        if let Some(image_url) = &message.image_url {
            write!(f, " <{}>", image_url)?;
        }
        for (emoji, count) in message.reactions.iter() {
            write!(f, " {}×{}", emoji, count)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Display, EnumIter, PartialEq)]
enum Selection {
    #[strum(serialize = "Show conversation")]
    ShowConversation,
    #[strum(serialize = "List conversations")]
    ListConversations,
    #[strum(serialize = "Send message")]
    SendMessage,
    #[strum(serialize = "Send image URL")]
    SendImage,
    #[strum(serialize = "Toggle reaction")]
    ToggleReaction,
    #[strum(serialize = "Delete message")]
    DeleteMessage,
    #[strum(serialize = "Show presence")]
    ShowPresence,
    Disconnect,
    Exit,
}

fn select_command() -> Result<Selection> {
    let options = Selection::iter().collect::<Vec<_>>();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .default(0)
        .items(&options[..])
        .interact()?;

    println!();
    Ok(options[selection])
}

fn prompt_user_id() -> Result<UserId> {
    let id = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter user id")
        .interact_text()?;
    Ok(UserId::from(id))
}

fn prompt_message_id() -> Result<MessageId> {
    let id = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter message id")
        .interact_text()?;
    Ok(MessageId::from(id))
}

fn prompt_string(prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

async fn configure_client() -> Result<Client> {
    let credentials = load_credentials()?;

    let mut config = ConnectionConfig::default();
    if let Some(endpoint) = credentials.endpoint {
        config.endpoint = endpoint;
    }

    println!("Connecting to {} as user {}…", config.endpoint, credentials.user_id);

    let client = Client::builder()
        .set_connector_provider(websocket::Connector::provider())
        .set_connection_config(config)
        .set_credential_provider(StaticCredentialProvider::new(
            Secret::new(credentials.token),
            User {
                id: UserId::from(credentials.user_id),
                display_name: credentials.display_name,
            },
        ))
        .build();

    client.add_observer(Arc::new(Delegate {}));
    client.start().await?;
    println!("Connected.");

    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    enable_logging(Level::INFO);

    let client = configure_client().await?;

    loop {
        match select_command()? {
            Selection::ShowConversation => {
                let counterpart = prompt_user_id()?;
                for message in client.conversations.messages(&counterpart).iter() {
                    println!("{}", MessageDisplay(message));
                }
            }
            Selection::ListConversations => {
                for counterpart in client.conversations.conversations() {
                    let count = client.conversations.messages(&counterpart).len();
                    println!("User {} ({} messages)", counterpart, count);
                }
            }
            Selection::SendMessage => {
                let receiver = prompt_user_id()?;
                client.conversations.send_typing(&receiver, true).await;
                let content = prompt_string("Message")?;
                client.conversations.send_typing(&receiver, false).await;

                if let Err(err) = client
                    .conversations
                    .send_message(&receiver, content, MessageType::Text, None)
                    .await
                {
                    println!("Could not send message. {}", err);
                }
            }
            Selection::SendImage => {
                let receiver = prompt_user_id()?;
                let image_url = prompt_string("Image URL")?;
                let caption = prompt_string("Caption")?;

                if let Err(err) = client
                    .conversations
                    .send_message(&receiver, caption, MessageType::Image, Some(image_url))
                    .await
                {
                    println!("Could not send image. {}", err);
                }
            }
            Selection::ToggleReaction => {
                let message_id = prompt_message_id()?;
                let emoji = Emoji::from(prompt_string("Emoji")?);
                client
                    .conversations
                    .toggle_reaction(&message_id, &emoji)
                    .await?;
            }
            Selection::DeleteMessage => {
                let message_id = prompt_message_id()?;
                if Confirm::new()
                    .with_prompt(format!("Delete message {}?", message_id))
                    .interact()?
                {
                    client.conversations.delete_message(&message_id).await?;
                }
            }
            Selection::ShowPresence => {
                let user_id = prompt_user_id()?;
                match client.presence.status(&user_id) {
                    Some(status) => println!(
                        "{} is {:?} (last seen {:?})",
                        status.display_name.unwrap_or_else(|| user_id.to_string()),
                        status.availability,
                        status.last_seen
                    ),
                    None => println!("User {} is offline.", user_id),
                }
            }
            Selection::Disconnect => {
                client.disconnect().await;
                if Confirm::new().with_prompt("Reconnect?").interact()? {
                    client.start().await?;
                }
            }
            Selection::Exit => {
                client.disconnect().await;
                break;
            }
        }
    }

    Ok(())
}
