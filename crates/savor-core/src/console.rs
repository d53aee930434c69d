// ── Console abstraction ──
//
// Full lifecycle management for a Savor back-office session. Handles
// authentication, read queries, and command routing. Strictly
// request/response: every call performs one round-trip against the backend,
// with no caching layer and no background tasks.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::command::{Command, CommandResult};
use crate::config::{AuthCredentials, ConsoleConfig, TlsVerification};
use crate::convert::voucher_payload;
use crate::error::CoreError;
use crate::model::{
    ChatMessage, Conversation, DashboardStats, EntityId, Food, Identity, Order, OrderStatus,
    Restaurant, RevenuePeriod, RevenuePoint, Review, Voucher, VoucherStatus,
};
use crate::rules;

use savor_api::ApiClient;
use savor_api::models::{FoodPayload, RestaurantPayload, SendMessagePayload, VoucherRecord};
use savor_api::transport::{TlsMode, TransportConfig};

// ── Console ──────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<ConsoleInner>`. Owns the authenticated API
/// client and the logged-in identity for the session.
#[derive(Clone)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

struct ConsoleInner {
    config: ConsoleConfig,
    client: Mutex<Option<ApiClient>>,
    identity: Mutex<Option<Identity>>,
}

/// A voucher joined with its derived status, ready for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ClassifiedVoucher {
    pub voucher: Voucher,
    pub status: VoucherStatus,
}

impl Console {
    /// Create a new Console from configuration. Does NOT connect -- call
    /// [`connect()`](Self::connect) to authenticate.
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            inner: Arc::new(ConsoleInner {
                config,
                client: Mutex::new(None),
                identity: Mutex::new(None),
            }),
        }
    }

    /// Access the console configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    // ── Connection lifecycle ─────────────────────────────────────

    /// Authenticate against the backend and cache the session identity.
    ///
    /// With a pre-issued token the token is verified via `auth/me`; with
    /// email/password a login round-trip obtains the token first.
    pub async fn connect(&self) -> Result<(), CoreError> {
        let config = &self.inner.config;
        let transport = build_transport(config);

        let (client, identity) = match &config.auth {
            AuthCredentials::Token(token) => {
                let client = ApiClient::with_token(config.url.clone(), token, &transport)?;
                let user = client.current_user().await?;
                debug!("token verified");
                (client, Identity::from(user))
            }
            AuthCredentials::Credentials { email, password } => {
                let anon = ApiClient::new(config.url.clone(), &transport)?;
                let login = anon.login(email, password).await?;
                debug!("credential login successful");
                let client = anon.into_authenticated(&login.token.clone().into())?;
                (client, Identity::from(login.user))
            }
        };

        *self.inner.client.lock().await = Some(client);
        *self.inner.identity.lock().await = Some(identity);
        Ok(())
    }

    /// The identity cached at connect time.
    pub async fn identity(&self) -> Result<Identity, CoreError> {
        self.inner
            .identity
            .lock()
            .await
            .clone()
            .ok_or(CoreError::NotConnected)
    }

    /// The restaurant this session operates on: the configured id when set,
    /// otherwise the restaurant attached to the logged-in account.
    pub async fn restaurant_id(&self) -> Result<EntityId, CoreError> {
        if let Some(id) = &self.inner.config.restaurant_id {
            return Ok(EntityId::from(id.as_str()));
        }
        let identity = self.identity().await?;
        identity.restaurant_id.ok_or_else(|| CoreError::Config {
            message: "no restaurant id configured and the account owns none".into(),
        })
    }

    // ── Read queries ─────────────────────────────────────────────

    /// Fetch this restaurant's vouchers, classified and in display order:
    /// non-expired first, expired last, stable within each half.
    pub async fn vouchers(&self) -> Result<Vec<ClassifiedVoucher>, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;

        let records = client.list_vouchers(rid.as_str()).await?;
        let vouchers: Vec<Voucher> = records.into_iter().filter_map(tolerant_voucher).collect();

        let today = today();
        let sorted = rules::sort_for_display(vouchers, today);
        Ok(sorted
            .into_iter()
            .map(|voucher| ClassifiedVoucher {
                status: rules::classify(&voucher, today),
                voucher,
            })
            .collect())
    }

    /// Fetch this restaurant's menu.
    pub async fn foods(&self) -> Result<Vec<Food>, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let records = client.list_foods(rid.as_str()).await?;
        Ok(records.into_iter().map(Food::from).collect())
    }

    /// Fetch this restaurant's orders, optionally filtered by status.
    pub async fn orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let records = client.list_orders(rid.as_str()).await?;
        let orders = records
            .into_iter()
            .map(Order::from)
            .filter(|o| status.is_none_or(|s| o.status == s))
            .collect();
        Ok(orders)
    }

    /// Fetch customer reviews.
    pub async fn reviews(&self) -> Result<Vec<Review>, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let records = client.list_reviews(rid.as_str()).await?;
        Ok(records.into_iter().map(Review::from).collect())
    }

    /// Fetch chat conversations.
    pub async fn conversations(&self) -> Result<Vec<Conversation>, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let records = client.list_conversations(rid.as_str()).await?;
        Ok(records.into_iter().map(Conversation::from).collect())
    }

    /// Fetch one conversation's messages, oldest first.
    pub async fn messages(&self, conversation: &EntityId) -> Result<Vec<ChatMessage>, CoreError> {
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let records = client.list_messages(conversation.as_str()).await?;
        Ok(records.into_iter().map(ChatMessage::from).collect())
    }

    /// Fetch the aggregate dashboard metrics.
    pub async fn dashboard(&self) -> Result<DashboardStats, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let record = client.dashboard_stats(rid.as_str()).await?;
        Ok(DashboardStats::from(record))
    }

    /// Fetch the bucketed revenue report.
    pub async fn revenue(&self, period: RevenuePeriod) -> Result<Vec<RevenuePoint>, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let records = client.revenue(rid.as_str(), &period.to_string()).await?;
        Ok(records.into_iter().map(RevenuePoint::from).collect())
    }

    /// Fetch the restaurant profile.
    pub async fn profile(&self) -> Result<Restaurant, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;
        let record = client.get_restaurant(rid.as_str()).await?;
        Ok(Restaurant::from(record))
    }

    // ── Command execution ────────────────────────────────────────

    /// Execute a write command against the backend.
    pub async fn execute(&self, command: Command) -> Result<CommandResult, CoreError> {
        let rid = self.restaurant_id().await?;
        let guard = self.inner.client.lock().await;
        let client = guard.as_ref().ok_or(CoreError::NotConnected)?;

        match command {
            Command::CreateVoucher(validated) => {
                let payload = voucher_payload(&validated, &rid);
                let record = client.create_voucher(&payload).await?;
                Ok(CommandResult::Voucher(Voucher::try_from(record)?))
            }
            Command::UpdateVoucher { id, update } => {
                let payload = voucher_payload(&update, &rid);
                let record = client.update_voucher(id.as_str(), &payload).await?;
                Ok(CommandResult::Voucher(Voucher::try_from(record)?))
            }
            Command::DeleteVoucher { id } => {
                client.delete_voucher(id.as_str()).await?;
                Ok(CommandResult::Ok)
            }

            Command::CreateFood(req) => {
                let payload = FoodPayload {
                    name: Some(req.name),
                    description: req.description,
                    category: req.category,
                    price: Some(req.price),
                    image_url: req.image_url,
                    available: Some(req.available),
                    restaurant_id: Some(rid.to_string()),
                };
                let record = client.create_food(&payload).await?;
                Ok(CommandResult::Food(Food::from(record)))
            }
            Command::UpdateFood { id, update } => {
                if update.is_empty() {
                    return Err(CoreError::ValidationFailed {
                        message: "no fields to update".into(),
                    });
                }
                let payload = FoodPayload {
                    name: update.name,
                    description: update.description,
                    category: update.category,
                    price: update.price,
                    image_url: update.image_url,
                    available: update.available,
                    restaurant_id: None,
                };
                let record = client.update_food(id.as_str(), &payload).await?;
                Ok(CommandResult::Food(Food::from(record)))
            }
            Command::DeleteFood { id } => {
                client.delete_food(id.as_str()).await?;
                Ok(CommandResult::Ok)
            }
            Command::SetFoodAvailability { id, available } => {
                let payload = FoodPayload {
                    available: Some(available),
                    ..FoodPayload::default()
                };
                let record = client.update_food(id.as_str(), &payload).await?;
                Ok(CommandResult::Food(Food::from(record)))
            }

            Command::UpdateOrderStatus { id, status } => {
                let record = client
                    .update_order_status(id.as_str(), &status.to_string())
                    .await?;
                Ok(CommandResult::Order(Order::from(record)))
            }

            Command::UpdateProfile(update) => {
                if update.is_empty() {
                    return Err(CoreError::ValidationFailed {
                        message: "no fields to update".into(),
                    });
                }
                let payload = RestaurantPayload {
                    name: update.name,
                    email: update.email,
                    phone: update.phone,
                    address: update.address,
                    description: update.description,
                    image_url: update.image_url,
                    opening_hours: update.opening_hours,
                };
                let record = client.update_restaurant(rid.as_str(), &payload).await?;
                Ok(CommandResult::Restaurant(Restaurant::from(record)))
            }

            Command::SendMessage(req) => {
                let payload = SendMessagePayload {
                    conversation_id: req.conversation_id.to_string(),
                    sender_role: "restaurant".into(),
                    text: req.text,
                };
                let record = client.send_message(&payload).await?;
                Ok(CommandResult::Message(ChatMessage::from(record)))
            }
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Convert a wire voucher, dropping (with a warning) records the backend
/// sends in a shape the rules engine cannot classify.
fn tolerant_voucher(record: VoucherRecord) -> Option<Voucher> {
    let code = record.code.clone();
    match Voucher::try_from(record) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(%code, "skipping malformed voucher record: {e}");
            None
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Map core TLS/timeout settings to the transport layer.
fn build_transport(config: &ConsoleConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}
