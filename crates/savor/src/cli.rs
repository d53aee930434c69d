//! Clap derive structures for the `savor` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This module depends only on clap + clap_complete so the build script
//! can include it for man-page generation.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// savor -- back-office console for Savor restaurant partners
#[derive(Debug, Parser)]
#[command(
    name = "savor",
    version,
    about = "Manage your Savor restaurant from the command line",
    long_about = "A back-office console for restaurants on the Savor delivery platform.\n\n\
        Covers the full partner surface: vouchers, menu, orders, reviews,\n\
        customer chat, dashboard metrics, revenue reports, and the\n\
        restaurant profile.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "SAVOR_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile)
    #[arg(long, short = 's', env = "SAVOR_SERVER", global = true)]
    pub server: Option<String>,

    /// Restaurant id (overrides profile; defaults to the account's restaurant)
    #[arg(long, short = 'r', env = "SAVOR_RESTAURANT", global = true)]
    pub restaurant: Option<String>,

    /// Bearer token for authentication
    #[arg(long, env = "SAVOR_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SAVOR_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "SAVOR_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "SAVOR_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage discount vouchers
    #[command(alias = "v")]
    Vouchers(VouchersArgs),

    /// Manage the menu
    #[command(alias = "f", alias = "menu")]
    Foods(FoodsArgs),

    /// View orders and advance their status
    #[command(alias = "o")]
    Orders(OrdersArgs),

    /// View customer reviews
    Reviews(ReviewsArgs),

    /// Customer chat: conversations and messages
    Chat(ChatArgs),

    /// Show aggregate dashboard metrics
    #[command(alias = "dash")]
    Dashboard,

    /// Show the bucketed revenue report
    #[command(alias = "rev")]
    Revenue(RevenueArgs),

    /// View and update the restaurant profile
    Profile(ProfileArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VOUCHERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VouchersArgs {
    #[command(subcommand)]
    pub command: VouchersCommand,
}

/// Fields of a voucher create/update form. All values are taken as raw
/// strings; validation happens in one place before anything touches the
/// backend.
#[derive(Debug, Args)]
pub struct VoucherFormArgs {
    /// Voucher code customers enter at checkout (e.g. SUMMER20)
    #[arg(long)]
    pub code: String,

    /// Human-readable description
    #[arg(long, short = 'd')]
    pub description: String,

    /// Discount type: 'percentage' or 'fixed'
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub discount_type: String,

    /// Discount value: percent (0-100] or fixed currency amount
    #[arg(long, value_name = "VALUE")]
    pub value: String,

    /// Minimum order amount to qualify (defaults to 0)
    #[arg(long, value_name = "AMOUNT", default_value = "")]
    pub min_order: String,

    /// Cap on the absolute discount (percentage vouchers)
    #[arg(long, value_name = "AMOUNT", default_value = "")]
    pub max_discount: String,

    /// First valid day, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Last valid day (inclusive), YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub end: String,

    /// Total redemption limit (omit for unlimited)
    #[arg(long, value_name = "N", default_value = "")]
    pub usage_limit: String,
}

#[derive(Debug, Subcommand)]
pub enum VouchersCommand {
    /// List vouchers with derived status, active first
    #[command(alias = "ls")]
    List {
        /// Only show vouchers with this status
        /// (active, upcoming, expired, usage_exhausted)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one voucher in detail
    Get {
        /// Voucher id
        id: String,
    },

    /// Create a voucher
    Create(VoucherFormArgs),

    /// Replace a voucher's configuration
    Update {
        /// Voucher id
        id: String,

        #[command(flatten)]
        form: VoucherFormArgs,
    },

    /// Delete a voucher
    #[command(alias = "rm")]
    Delete {
        /// Voucher id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FOODS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FoodsArgs {
    #[command(subcommand)]
    pub command: FoodsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FoodsCommand {
    /// List menu items
    #[command(alias = "ls")]
    List {
        /// Only show items in this category
        #[arg(long, short = 'c')]
        category: Option<String>,
    },

    /// Show one menu item in detail
    Get {
        /// Food id
        id: String,
    },

    /// Add a menu item
    Create {
        /// Item name
        #[arg(long)]
        name: String,

        /// Price
        #[arg(long)]
        price: f64,

        /// Description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Category (e.g. "mains", "drinks")
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Create the item hidden from ordering
        #[arg(long)]
        unavailable: bool,
    },

    /// Update a menu item (only the given fields change)
    Update {
        /// Food id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long, short = 'c')]
        category: Option<String>,

        #[arg(long)]
        image_url: Option<String>,
    },

    /// Make an item orderable again
    Enable {
        /// Food id
        id: String,
    },

    /// Hide an item from ordering (stays on the menu)
    Disable {
        /// Food id
        id: String,
    },

    /// Remove a menu item
    #[command(alias = "rm")]
    Delete {
        /// Food id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ORDERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List orders, newest first
    #[command(alias = "ls")]
    List {
        /// Only show orders with this status
        /// (pending, confirmed, preparing, delivering, delivered, cancelled)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one order with its line items
    Get {
        /// Order id
        id: String,
    },

    /// Advance an order to a new status
    SetStatus {
        /// Order id
        id: String,

        /// Target status (confirmed, preparing, delivering, delivered, cancelled)
        status: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REVIEWS / CHAT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ReviewsArgs {
    #[command(subcommand)]
    pub command: ReviewsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReviewsCommand {
    /// List customer reviews, newest first
    #[command(alias = "ls")]
    List {
        /// Only show reviews with at most this rating
        #[arg(long)]
        max_rating: Option<f64>,
    },
}

#[derive(Debug, Args)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub command: ChatCommand,
}

#[derive(Debug, Subcommand)]
pub enum ChatCommand {
    /// List conversations, most recent activity first
    Conversations,

    /// Show the messages of one conversation, oldest first
    Messages {
        /// Conversation id
        conversation: String,
    },

    /// Send a message into a conversation
    Send {
        /// Conversation id
        conversation: String,

        /// Message text
        message: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REVENUE / PROFILE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RevenueArgs {
    /// Bucketing period: daily, weekly, monthly, yearly
    #[arg(long, default_value = "monthly")]
    pub period: String,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show the restaurant profile
    Show,

    /// Update the profile (only the given fields change)
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        /// e.g. "Mon-Sun 09:00-22:00"
        #[arg(long)]
        opening_hours: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG / COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive setup wizard
    Init,

    /// Show the effective configuration
    Show,

    /// Set a key on the active profile (server, restaurant, email, ...)
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },

    /// Store a token or password in the system keyring
    SetSecret {
        /// Profile to store the secret for (defaults to the active profile)
        #[arg(long)]
        profile: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
