use crate::market_commands::{OrderCommands, ProductCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Expected account role (farmer, buyer, admin). The session is not
        /// kept when the account's actual role differs.
        #[arg(long)]
        role: Option<String>,
    },

    /// Create an account and persist the first session
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        password: String,

        /// Account role (farmer, buyer, admin)
        #[arg(long)]
        role: String,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        state: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the account behind the stored session
    Whoami,

    /// Show the resolved session state
    Session,

    /// Product operations
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },

    /// Order operations
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },
}
