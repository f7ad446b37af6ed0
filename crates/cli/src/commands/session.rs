//! Interactive storefront session.
//!
//! Reads one command per line from stdin, applies it to a [`Storefront`]
//! and prints the resulting screen. A pending sign-in completes on its own
//! while the session waits for input.
//!
//! # Usage
//!
//! ```bash
//! printf 'enter\nset email ana@example.com\nset password pw\nsubmit\nwait\nadd 1\ncart\n' \
//!     | vitrine session
//! ```

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use vitrine_core::ProductId;
use vitrine_storefront::auth::AuthField;
use vitrine_storefront::cart::CartKey;
use vitrine_storefront::catalog::{CategoryFilter, SortKey};
use vitrine_storefront::{Action, Storefront, StorefrontConfig};

use crate::render;

const HELP: &str = "\
commands:
  enter                       open the account form
  back                        go back one screen
  mode                        switch between sign in and register
  set <field> <value>         fill name, email, password or confirm
  reveal <field>              show or hide password or confirm
  submit                      submit the account form
  wait                        wait for a pending sign-in
  category <all|sweatshirt|polo>
  search <text>               empty text clears the search
  sort <name|price-low|price-high|rating>
  add <id> [color size]       add to cart, first color and size by default
  qty <id> <color> <size> <n> set a line quantity, 0 removes it
  inc|dec <id> <color> <size> change a line quantity by one
  remove <id> <color> <size>  remove a line
  fav <id>                    toggle a favorite
  cart                        open or close the cart
  dismiss                     close the notice
  show                        print the current screen
  help                        print this help
  quit                        leave the session";

/// Errors from parsing or applying a session command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid {what}: {value}")]
    Invalid { what: &'static str, value: String },

    #[error("product {0} has no color or size to preselect")]
    NoVariant(ProductId),
}

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Dispatch(Action),
    /// Add to cart; without a variant the product's first color and size
    /// are used.
    Add {
        product_id: ProductId,
        variant: Option<(String, String)>,
    },
    Wait,
    Show,
    Help,
    Quit,
}

/// What the loop does after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Help,
    Quit,
}

fn invalid(what: &'static str, value: &str) -> CommandError {
    CommandError::Invalid {
        what,
        value: value.to_owned(),
    }
}

fn product_id(value: &str) -> Result<ProductId, CommandError> {
    value.parse().map_err(|_| invalid("product id", value))
}

fn field(value: &str) -> Result<AuthField, CommandError> {
    value.parse().map_err(|_| invalid("field", value))
}

/// Parse `<id> <color> <size>` into a cart key.
fn cart_key(args: &[&str], usage: &'static str) -> Result<CartKey, CommandError> {
    match args {
        [id, color, size] => Ok(CartKey::new(product_id(id)?, *color, *size)),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns `CommandError` for unknown commands and malformed arguments.
pub fn parse(line: &str) -> Result<Option<SessionCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, rest)| (name, rest.trim()));
    let args: Vec<&str> = rest.split_whitespace().collect();

    let action = match name.to_ascii_lowercase().as_str() {
        "enter" => Action::EnterAccount,
        "back" => Action::Back,
        "mode" => Action::ToggleAuthMode,
        "submit" => Action::SubmitAuth,
        "cart" => Action::ToggleCart,
        "dismiss" => Action::DismissNotice,
        "set" => {
            // the value is the rest of the line, spaces included
            let (field_name, value) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(f, v)| (f, v.trim()));
            if field_name.is_empty() {
                return Err(CommandError::Usage("set <field> <value>"));
            }
            Action::EditField {
                field: field(field_name)?,
                value: value.to_owned(),
            }
        }
        "reveal" => match args.as_slice() {
            [field_name] => Action::TogglePasswordVisibility(field(field_name)?),
            _ => return Err(CommandError::Usage("reveal <field>")),
        },
        "category" => match args.as_slice() {
            [value] => Action::SetCategory(
                value
                    .parse::<CategoryFilter>()
                    .map_err(|_| invalid("category", value))?,
            ),
            _ => return Err(CommandError::Usage("category <all|sweatshirt|polo>")),
        },
        "search" => Action::SetSearch(rest.to_owned()),
        "sort" => match args.as_slice() {
            [value] => Action::SetSort(
                value
                    .parse::<SortKey>()
                    .map_err(|_| invalid("sort key", value))?,
            ),
            _ => return Err(CommandError::Usage("sort <name|price-low|price-high|rating>")),
        },
        "add" => {
            return match args.as_slice() {
                [id] => Ok(Some(SessionCommand::Add {
                    product_id: product_id(id)?,
                    variant: None,
                })),
                [id, color, size] => Ok(Some(SessionCommand::Add {
                    product_id: product_id(id)?,
                    variant: Some(((*color).to_owned(), (*size).to_owned())),
                })),
                _ => Err(CommandError::Usage("add <id> [color size]")),
            };
        }
        "qty" => match args.as_slice() {
            [id, color, size, quantity] => Action::SetQuantity {
                key: CartKey::new(product_id(id)?, *color, *size),
                quantity: quantity
                    .parse()
                    .map_err(|_| invalid("quantity", quantity))?,
            },
            _ => return Err(CommandError::Usage("qty <id> <color> <size> <n>")),
        },
        "inc" => Action::IncrementLine(cart_key(&args, "inc <id> <color> <size>")?),
        "dec" => Action::DecrementLine(cart_key(&args, "dec <id> <color> <size>")?),
        "remove" => Action::RemoveFromCart(cart_key(&args, "remove <id> <color> <size>")?),
        "fav" => match args.as_slice() {
            [id] => Action::ToggleFavorite(product_id(id)?),
            _ => return Err(CommandError::Usage("fav <id>")),
        },
        "wait" => return Ok(Some(SessionCommand::Wait)),
        "show" => return Ok(Some(SessionCommand::Show)),
        "help" | "?" => return Ok(Some(SessionCommand::Help)),
        "quit" | "exit" => return Ok(Some(SessionCommand::Quit)),
        other => return Err(CommandError::Unknown(other.to_owned())),
    };

    Ok(Some(SessionCommand::Dispatch(action)))
}

/// Apply a parsed command to the storefront.
///
/// # Errors
///
/// Returns `CommandError::NoVariant` when `add` has no variant to fall back on.
pub async fn execute(
    storefront: &mut Storefront,
    command: SessionCommand,
) -> Result<Outcome, CommandError> {
    match command {
        SessionCommand::Dispatch(action) => storefront.dispatch(action),
        SessionCommand::Add {
            product_id,
            variant,
        } => {
            let (color, size) = match variant {
                Some(variant) => variant,
                None => match storefront.state().catalog().get(product_id) {
                    Some(product) => {
                        let (color, size) = product
                            .default_variant()
                            .ok_or(CommandError::NoVariant(product_id))?;
                        (color.to_owned(), size.to_owned())
                    }
                    // the reducer reports unknown products
                    None => (String::new(), String::new()),
                },
            };
            storefront.dispatch(Action::AddToCart(CartKey::new(product_id, color, size)));
        }
        SessionCommand::Wait => {
            if storefront.next_completion().await.is_none() {
                info!("No sign-in pending");
            }
        }
        SessionCommand::Show => {}
        SessionCommand::Help => return Ok(Outcome::Help),
        SessionCommand::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Render)
}

fn show(storefront: &Storefront, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = storefront.snapshot()?;
    if json {
        render::emit(&serde_json::to_string(&snapshot)?)?;
    } else {
        render::emit(&render::screen(&snapshot))?;
    }
    Ok(())
}

/// Run the session until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if stdin or stdout fail, or a snapshot cannot be built.
pub async fn run(config: &StorefrontConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut storefront = Storefront::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!(
        auth_delay_ms = config.auth_delay.as_millis(),
        currency = %config.currency,
        "Session started"
    );
    show(&storefront, json)?;

    loop {
        tokio::select! {
            Some(ticket) = storefront.next_completion(), if storefront.has_pending_auth() => {
                info!(%ticket, "Signed in");
                show(&storefront, json)?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let outcome = match parse(&line) {
                    Ok(None) => continue,
                    Ok(Some(command)) => execute(&mut storefront, command).await,
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(Outcome::Render) => show(&storefront, json)?,
                    Ok(Outcome::Help) => render::emit(HELP)?,
                    Ok(Outcome::Quit) => {
                        info!("Session closed");
                        return Ok(());
                    }
                    Err(e) => warn!("{e}"),
                }
            }
        }
    }

    // end of input: let a pending sign-in finish before leaving
    if storefront.next_completion().await.is_some() {
        show(&storefront, json)?;
    }
    info!("Session closed");
    Ok(())
}
