use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List product listings (public)
    List,
}

#[derive(Subcommand)]
pub enum OrderCommands {
    /// List your orders (requires a session)
    List,
}
