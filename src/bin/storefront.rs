use std::process::ExitCode;

use clap::{Parser, Subcommand};
use coffee_shop::domain::order::Order;
use coffee_shop::storefront::{
    Field, Storefront, StorefrontClient, StorefrontError, DEFAULT_API_URL,
};
use dotenvy::dotenv;

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Browse the café menu and place orders",
    after_help = "Examples:\n  storefront menu\n  storefront order --item 1x2 --item 3 --name Ada --email ada@example.com --address '1 Bean Street'\n  storefront status 1 ready"
)]
struct Cli {
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the coffee shop API")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List the menu, or show one item")]
    Menu { id: Option<u32> },
    #[command(about = "Build a cart and place a single order")]
    Order {
        #[arg(long = "item", required = true, value_parser = parse_item, help = "Menu id with optional quantity, e.g. 2 or 2x3")]
        items: Vec<(u32, u32)>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
    },
    #[command(about = "List every order the shop has received")]
    Orders,
    #[command(about = "Show one order")]
    Show { id: u64 },
    #[command(about = "Move an order to a new status")]
    Status { id: u64, status: String },
}

fn parse_item(raw: &str) -> Result<(u32, u32), String> {
    let (id, qty) = raw.split_once('x').unwrap_or((raw, "1"));
    let id = id.trim().parse().map_err(|_| format!("invalid item id '{id}'"))?;
    let qty: u32 = qty
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{qty}'"))?;
    if qty == 0 {
        return Err("quantity must be at least 1".to_string());
    }
    Ok((id, qty))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let client = StorefrontClient::new(cli.api_url);

    let (context, result) = match cli.command {
        Command::Menu { id } => ("Error loading menu", menu(&client, id).await),
        Command::Order {
            items,
            name,
            email,
            address,
        } => (
            "Error placing order",
            order(client, &items, name, email, address).await,
        ),
        Command::Orders => ("Error loading orders", orders(&client).await),
        Command::Show { id } => ("Error loading order", show(&client, id).await),
        Command::Status { id, status } => (
            "Error updating order",
            set_status(&client, id, &status).await,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{context}: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn menu(client: &StorefrontClient, id: Option<u32>) -> Result<(), StorefrontError> {
    let items = match id {
        Some(id) => vec![client.coffee(id).await?],
        None => client.menu().await?,
    };
    for item in items {
        println!(
            "{:>2}  {:<12} ${:>5}  {}",
            item.id, item.name, item.price, item.description
        );
    }
    Ok(())
}

async fn order(
    client: StorefrontClient,
    items: &[(u32, u32)],
    name: String,
    email: String,
    address: String,
) -> Result<(), StorefrontError> {
    let mut shop = Storefront::open(client).await?;
    for &(id, qty) in items {
        for _ in 0..qty {
            shop.add_to_cart(id)?;
        }
    }
    shop.customer.set(Field::Name, name);
    shop.customer.set(Field::Email, email);
    shop.customer.set(Field::Address, address);

    println!(
        "Cart: {} item(s), total ${}",
        shop.cart.total_items(),
        shop.cart.total_price()
    );
    let receipt = shop.checkout().await?;
    println!(
        "Order placed successfully! Order ID: {}, Total: ${}",
        receipt.order_id, receipt.total
    );
    Ok(())
}

async fn orders(client: &StorefrontClient) -> Result<(), StorefrontError> {
    let orders = client.orders().await?;
    if orders.is_empty() {
        println!("No orders yet");
    }
    for o in &orders {
        print_order(o);
    }
    Ok(())
}

async fn show(client: &StorefrontClient, id: u64) -> Result<(), StorefrontError> {
    print_order(&client.order(id).await?);
    Ok(())
}

async fn set_status(
    client: &StorefrontClient,
    id: u64,
    status: &str,
) -> Result<(), StorefrontError> {
    let o = client.update_status(id, status).await?;
    println!("Order #{} is now {}", o.id, o.status);
    Ok(())
}

fn print_order(o: &Order) {
    println!(
        "#{} [{}] {} <{}>, ${}, placed {}",
        o.id,
        o.status,
        o.customer.name,
        o.customer.email,
        o.total,
        o.created_at.to_rfc3339()
    );
    for line in &o.items {
        println!("    {} x {} @ ${}", line.quantity, line.item.name, line.item.price);
    }
}
